//! 에러 타입 -- 설정 및 공통 I/O 에러 정의

/// rulegen 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum RulegenError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_wraps_into_rulegen_error() {
        let err: RulegenError = ConfigError::FileNotFound {
            path: "rulegen.toml".to_owned(),
        }
        .into();
        assert!(matches!(err, RulegenError::Config(_)));
        assert_eq!(
            err.to_string(),
            "config error: config file not found: rulegen.toml"
        );
    }

    #[test]
    fn invalid_value_display_names_field() {
        let err = ConfigError::InvalidValue {
            field: "general.log_level".to_owned(),
            reason: "must be one of: info".to_owned(),
        };
        assert!(err.to_string().contains("general.log_level"));
    }
}
