//! 규칙 처리 전략
//!
//! 입력 소스마다 두 전략 중 하나가 명시적으로 선택됩니다.
//! - [`RuleProcessor::Normal`]: 기본값만 주입 ([`normal`])
//! - [`RuleProcessor::ThreeColumn`]: 3열 확장 + 집계 규칙 합성 ([`three_column`])

pub mod normal;
pub mod three_column;

use std::fmt;

use rulegen_core::Rule;

pub use three_column::{Column, ThreeColumnOptions};

/// 입력 규칙 변환 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleProcessor {
    /// 규칙을 그대로 두고 기본값만 주입
    Normal,
    /// total / exemption / liable 3열 확장
    ThreeColumn(ThreeColumnOptions),
}

impl RuleProcessor {
    /// 규칙 목록을 변환합니다.
    pub fn process(&self, rules: Vec<Rule>) -> Vec<Rule> {
        match self {
            Self::Normal => normal::normalize(rules),
            Self::ThreeColumn(options) => three_column::expand(&rules, *options),
        }
    }

    /// 로그와 보고서에 쓰이는 전략 이름
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::ThreeColumn(_) => "three-column",
        }
    }
}

impl fmt::Display for RuleProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
