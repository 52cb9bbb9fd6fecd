//! 규칙 출력 -- 누적된 규칙 전체를 하나의 JSON 배열로 씁니다.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rulegen_core::Rule;

use crate::error::ExpanderError;

/// 규칙 출력기
pub struct RuleWriter;

impl RuleWriter {
    /// 규칙 목록을 파일에 씁니다. 파일이 있으면 내용을 덮어씁니다.
    ///
    /// # Errors
    /// 파일을 만들 수 없거나 쓰기에 실패하면 [`ExpanderError::Io`]
    pub fn write_to(path: impl AsRef<Path>, rules: &[Rule]) -> Result<(), ExpanderError> {
        let path = path.as_ref();
        let target = path.display().to_string();
        let io_err = |source| ExpanderError::Io {
            path: target.clone(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        Self::write_json(&mut out, rules).map_err(io_err)?;
        out.flush().map_err(io_err)?;

        tracing::info!(path = %target, count = rules.len(), "wrote rule output");

        Ok(())
    }

    /// 규칙 목록을 개행으로 끝나는 JSON 배열 한 줄로 직렬화합니다.
    pub fn write_json<W: Write>(out: &mut W, rules: &[Rule]) -> std::io::Result<()> {
        serde_json::to_writer(&mut *out, rules)?;
        out.write_all(b"\n")
    }
}
