//! rulegen 규칙 확장 파이프라인
//!
//! # 모듈 구성
//!
//! - [`reader`]: 빈 줄로 구분된 JSON 배열 레코드 읽기
//! - [`processor`]: 일반 / 3열 처리 전략
//! - [`defaults`]: 모든 출력 규칙에 적용되는 공통 기본값
//! - [`collection`]: 처리된 규칙 누적
//! - [`writer`]: 단일 JSON 배열 출력
//! - [`pipeline`]: 전체 실행 흐름 오케스트레이션
//! - [`error`]: 도메인 에러 타입
//!
//! # 아키텍처
//!
//! ```text
//! RuleReader -> RuleProcessor -> RuleCollection -> RuleWriter
//!                   |
//!         Normal / ThreeColumn (+ apply_defaults)
//! ```

pub mod collection;
pub mod defaults;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod reader;
pub mod writer;

// --- 주요 타입 re-export ---

pub use collection::{RuleCollection, SourceOutcome};
pub use defaults::apply_defaults;
pub use error::ExpanderError;
pub use pipeline::{ExpandPipeline, ExpandSummary, SourceSummary};
pub use processor::{Column, RuleProcessor, ThreeColumnOptions};
pub use reader::RuleReader;
pub use writer::RuleWriter;
