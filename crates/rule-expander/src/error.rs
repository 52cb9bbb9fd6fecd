//! 규칙 확장 에러 타입
//!
//! [`ExpanderError`]는 규칙 파일 읽기부터 출력 파일 쓰기까지 발생하는 모든 에러를 표현합니다.
//! 모든 에러는 실행을 중단시키며 재시도하지 않습니다.

/// 규칙 확장 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum ExpanderError {
    /// 규칙 소스 파일이 존재하지 않음
    #[error("rule source not found: {path}")]
    NotFound {
        /// 소스 파일 경로
        path: String,
    },

    /// 논리 레코드의 JSON 파싱 실패
    #[error("rule parse error: {path}: record {record} (line {line}): {reason}")]
    Parse {
        /// 소스 파일 경로
        path: String,
        /// 실패한 논리 레코드 번호 (1부터 시작)
        record: usize,
        /// 레코드가 시작된 줄 번호 (1부터 시작)
        line: usize,
        /// 실패 사유
        reason: String,
    },

    /// 파일 읽기/생성/쓰기 실패
    #[error("io error: {path}: {source}")]
    Io {
        /// 대상 파일 경로
        path: String,
        /// 원인 I/O 에러
        #[source]
        source: std::io::Error,
    },
}

impl ExpanderError {
    /// 경로 문맥을 붙여 I/O 에러를 변환합니다.
    ///
    /// `NotFound`는 별도 변형으로 분류됩니다.
    pub(crate) fn from_io(path: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_owned(),
            }
        } else {
            Self::Io {
                path: path.to_owned(),
                source,
            }
        }
    }
}
