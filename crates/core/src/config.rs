//! 설정 관리 -- rulegen.toml 파싱 및 런타임 설정
//!
//! [`RulegenConfig`]는 실행 한 번에 필요한 모든 설정을 담는 최상위 구조체입니다.
//! 시작 시 한 번 구성되어 처리 함수들에 참조로 전달됩니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`RULEGEN_SOURCES_OUTPUT_RULE_FILEPATH=out.json` 형식)
//! 3. 설정 파일 (`rulegen.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # fn example() -> Result<(), rulegen_core::error::RulegenError> {
//! use rulegen_core::config::RulegenConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = RulegenConfig::load("rulegen.toml")?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = RulegenConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, RulegenError};

/// 허용되는 로그 레벨
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 허용되는 로그 형식
pub const VALID_LOG_FORMATS: [&str; 2] = ["json", "pretty"];

/// rulegen 통합 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulegenConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 입력/출력 경로
    #[serde(default)]
    pub sources: SourcesConfig,
    /// 3열 확장 옵션
    #[serde(default)]
    pub expansion: ExpansionConfig,
}

impl RulegenConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulegenError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RulegenError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RulegenError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                RulegenError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, RulegenError> {
        toml::from_str(toml_str).map_err(|e| {
            RulegenError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `RULEGEN_{SECTION}_{FIELD}`
    pub fn apply_env_overrides(&mut self) {
        override_string(&mut self.general.log_level, "RULEGEN_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "RULEGEN_GENERAL_LOG_FORMAT");

        override_path(
            &mut self.sources.three_column_rule_filepath,
            "RULEGEN_SOURCES_THREE_COLUMN_RULE_FILEPATH",
        );
        override_path(
            &mut self.sources.normal_rule_filepath,
            "RULEGEN_SOURCES_NORMAL_RULE_FILEPATH",
        );
        override_path(
            &mut self.sources.output_rule_filepath,
            "RULEGEN_SOURCES_OUTPUT_RULE_FILEPATH",
        );

        override_bool(
            &mut self.expansion.sort_aggregates,
            "RULEGEN_EXPANSION_SORT_AGGREGATES",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), RulegenError> {
        if !VALID_LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", VALID_LOG_LEVELS.join(", ")),
            }
            .into());
        }

        if !VALID_LOG_FORMATS.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", VALID_LOG_FORMATS.join(", ")),
            }
            .into());
        }

        let paths = [
            (
                "sources.three_column_rule_filepath",
                &self.sources.three_column_rule_filepath,
            ),
            (
                "sources.normal_rule_filepath",
                &self.sources.normal_rule_filepath,
            ),
            (
                "sources.output_rule_filepath",
                &self.sources.output_rule_filepath,
            ),
        ];
        for (field, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_owned(),
                    reason: "path must not be empty".to_owned(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 규칙 입력/출력 경로
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// 3열(total/exemption/liable)로 확장할 규칙 파일
    pub three_column_rule_filepath: PathBuf,
    /// 그대로 사용할 규칙 파일
    pub normal_rule_filepath: PathBuf,
    /// 병합된 출력 파일
    pub output_rule_filepath: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            three_column_rule_filepath: PathBuf::from("jsonRule_three_column.txt"),
            normal_rule_filepath: PathBuf::from("jsonRule_normal.txt"),
            output_rule_filepath: PathBuf::from("jsonRule.out.txt"),
        }
    }
}

/// 3열 확장 옵션
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// 합성된 집계 규칙을 필드명 순으로 정렬할지 여부 (기본: 정렬하지 않음)
    pub sort_aggregates: bool,
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_path(target: &mut PathBuf, env_key: &str) {
    if let Some(val) = std::env::var_os(env_key) {
        *target = PathBuf::from(val);
    }
}

fn override_bool(target: &mut bool, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<bool>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse bool from env var, ignoring"
            ),
        }
    }
}
