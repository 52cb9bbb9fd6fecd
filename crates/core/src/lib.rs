//! rulegen 공통 크레이트
//!
//! 규칙 데이터 모델, 실행 설정, 최상위 에러 타입을 정의합니다.
//! 확장 로직은 `rulegen-expander`, 명령줄 도구는 `rulegen-cli`에 있습니다.

pub mod config;
pub mod error;
pub mod types;

// --- 주요 타입 re-export ---

// 에러
pub use error::{ConfigError, RulegenError};

// 설정
pub use config::{ExpansionConfig, GeneralConfig, RulegenConfig, SourcesConfig};

// 도메인 타입
pub use types::{
    AUTO_RULE_FLAG, DEFAULT_DECIMAL_PRECISION, DEFAULT_ERROR_CODE, DEFAULT_FIELD_VALUE, Expression,
    Field, Rule,
};
