//! 전체 실행 흐름 -- 3열 소스, 일반 소스, 출력 순서로 한 번 실행합니다.
//!
//! ```text
//! three-column source -> RuleReader -> ThreeColumn ─┐
//!                                                    ├─> RuleCollection -> RuleWriter
//! normal source       -> RuleReader -> Normal ──────┘
//! ```
//!
//! 어느 단계든 실패하면 즉시 중단되며 출력 파일은 건드리지 않습니다.

use std::path::PathBuf;

use serde::Serialize;

use rulegen_core::{ExpansionConfig, RulegenConfig, SourcesConfig};

use crate::collection::{RuleCollection, SourceOutcome};
use crate::error::ExpanderError;
use crate::processor::{RuleProcessor, ThreeColumnOptions};

/// 실행 결과 요약
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandSummary {
    /// 처리 순서대로 나열한 소스별 결과
    pub sources: Vec<SourceSummary>,
    /// 출력된 전체 규칙 수
    pub total_rules: usize,
    /// 출력 파일 경로
    pub output_path: String,
}

/// 소스 하나의 처리 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub path: String,
    pub processor: String,
    pub input_rules: usize,
    pub output_rules: usize,
}

impl From<SourceOutcome> for SourceSummary {
    fn from(outcome: SourceOutcome) -> Self {
        Self {
            path: outcome.path,
            processor: outcome.processor.to_owned(),
            input_rules: outcome.input_rules,
            output_rules: outcome.output_rules,
        }
    }
}

/// 두 입력 소스를 병합해 하나의 출력 파일을 만드는 파이프라인
#[derive(Debug, Clone)]
pub struct ExpandPipeline {
    three_column_source: PathBuf,
    normal_source: PathBuf,
    output: PathBuf,
    options: ThreeColumnOptions,
}

impl ExpandPipeline {
    /// 설정 섹션에서 파이프라인을 구성합니다.
    pub fn new(sources: &SourcesConfig, expansion: &ExpansionConfig) -> Self {
        Self {
            three_column_source: sources.three_column_rule_filepath.clone(),
            normal_source: sources.normal_rule_filepath.clone(),
            output: sources.output_rule_filepath.clone(),
            options: ThreeColumnOptions {
                sort_aggregates: expansion.sort_aggregates,
            },
        }
    }

    pub fn from_config(config: &RulegenConfig) -> Self {
        Self::new(&config.sources, &config.expansion)
    }

    /// 처리 순서대로 나열한 (소스 경로, 처리 전략) 목록
    pub fn stages(&self) -> [(&PathBuf, RuleProcessor); 2] {
        [
            (
                &self.three_column_source,
                RuleProcessor::ThreeColumn(self.options),
            ),
            (&self.normal_source, RuleProcessor::Normal),
        ]
    }

    /// 두 소스를 차례로 읽고 변환한 뒤 출력 파일을 한 번 씁니다.
    pub fn run(&self) -> Result<ExpandSummary, ExpanderError> {
        let mut collection = RuleCollection::new();
        let mut sources = Vec::with_capacity(2);

        for (path, processor) in self.stages() {
            let outcome = collection.process_source(path, &processor)?;
            sources.push(SourceSummary::from(outcome));
        }

        collection.write_to(&self.output)?;

        Ok(ExpandSummary {
            sources,
            total_rules: collection.len(),
            output_path: self.output.display().to_string(),
        })
    }
}
