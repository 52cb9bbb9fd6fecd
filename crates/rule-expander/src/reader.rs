//! 규칙 레코드 리더 -- 줄 단위로 구분된 JSON 배열 레코드를 읽습니다.
//!
//! 연속된 비어 있지 않은 줄들을 이어 붙인 문자열이 하나의 논리 레코드(`[Rule, ...]`)가 되고,
//! 길이가 0인 줄만 레코드를 종료시키며 파싱을 유발합니다.
//! 공백만 있는 줄은 레코드 본문의 일부로 이어 붙습니다.
//! 마지막 빈 줄 없이 파일이 끝나면 남은 레코드는 파싱하지 않고 버립니다.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rulegen_core::Rule;

use crate::error::ExpanderError;

/// 규칙 레코드 리더
pub struct RuleReader;

impl RuleReader {
    /// 파일에서 모든 논리 레코드를 읽어 규칙을 순서대로 반환합니다.
    ///
    /// # Errors
    /// - 파일이 없으면 [`ExpanderError::NotFound`]
    /// - 레코드 하나라도 JSON이 잘못되었으면 [`ExpanderError::Parse`]
    /// - 그 외 읽기 실패는 [`ExpanderError::Io`]
    pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Rule>, ExpanderError> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let file = File::open(path).map_err(|e| ExpanderError::from_io(&source, e))?;
        let rules = Self::read_records(BufReader::new(file), &source)?;

        tracing::info!(path = %source, count = rules.len(), "loaded rule source");

        Ok(rules)
    }

    /// 임의의 줄 단위 입력에서 논리 레코드를 읽습니다.
    ///
    /// `source`는 에러 메시지와 로그에만 사용됩니다.
    pub fn read_records<R: BufRead>(reader: R, source: &str) -> Result<Vec<Rule>, ExpanderError> {
        let mut rules = Vec::new();
        let mut buffer = String::new();
        let mut record = 0;
        let mut record_line = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| ExpanderError::from_io(source, e))?;

            if line.is_empty() {
                if buffer.is_empty() {
                    continue;
                }
                record += 1;
                let parsed = Self::parse_record(&buffer, source, record, record_line)?;
                tracing::debug!(
                    source,
                    record,
                    line = record_line,
                    count = parsed.len(),
                    "parsed rule record"
                );
                rules.extend(parsed);
                buffer.clear();
            } else {
                if buffer.is_empty() {
                    record_line = idx + 1;
                }
                buffer.push_str(&line);
            }
        }

        if !buffer.is_empty() {
            tracing::warn!(
                source,
                line = record_line,
                "rule record not terminated by a blank line, ignoring"
            );
        }

        Ok(rules)
    }

    /// 논리 레코드 하나(JSON 배열)를 파싱합니다.
    pub fn parse_record(
        json: &str,
        source: &str,
        record: usize,
        line: usize,
    ) -> Result<Vec<Rule>, ExpanderError> {
        serde_json::from_str(json).map_err(|e| ExpanderError::Parse {
            path: source.to_owned(),
            record,
            line,
            reason: e.to_string(),
        })
    }
}
