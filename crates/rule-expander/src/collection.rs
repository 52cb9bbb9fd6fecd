//! 출력 규칙 누적기

use std::path::Path;

use rulegen_core::Rule;

use crate::error::ExpanderError;
use crate::processor::RuleProcessor;
use crate::reader::RuleReader;
use crate::writer::RuleWriter;

/// 소스별 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOutcome {
    /// 소스 파일 경로
    pub path: String,
    /// 적용된 처리 전략 이름
    pub processor: &'static str,
    /// 소스에서 읽은 규칙 수
    pub input_rules: usize,
    /// 변환 후 추가된 규칙 수
    pub output_rules: usize,
}

/// 처리된 규칙을 삽입 순서대로 모아 두는 컬렉션
///
/// 소스를 하나씩 읽어 변환한 결과를 뒤에 덧붙이고, 마지막에 한 번만 출력합니다.
#[derive(Debug, Default)]
pub struct RuleCollection {
    rules: Vec<Rule>,
}

impl RuleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 소스 파일을 읽어 `processor`로 변환한 뒤 컬렉션에 덧붙입니다.
    ///
    /// 읽기나 파싱이 실패하면 컬렉션은 변경되지 않습니다.
    pub fn process_source(
        &mut self,
        path: impl AsRef<Path>,
        processor: &RuleProcessor,
    ) -> Result<SourceOutcome, ExpanderError> {
        let path = path.as_ref();
        let input = RuleReader::load_file(path)?;
        let input_rules = input.len();

        let processed = processor.process(input);
        let output_rules = processed.len();

        tracing::info!(
            path = %path.display(),
            processor = processor.name(),
            input_rules,
            output_rules,
            "processed rule source"
        );

        self.rules.extend(processed);

        Ok(SourceOutcome {
            path: path.display().to_string(),
            processor: processor.name(),
            input_rules,
            output_rules,
        })
    }

    /// 이미 메모리에 있는 규칙을 변환해 덧붙입니다.
    pub fn extend_processed(&mut self, rules: Vec<Rule>, processor: &RuleProcessor) {
        self.rules.extend(processor.process(rules));
    }

    /// 누적된 규칙 전체를 JSON 배열로 씁니다.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ExpanderError> {
        RuleWriter::write_to(path, &self.rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
