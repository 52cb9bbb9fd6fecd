//! 3열 규칙 확장 -- total / exemption / liable
//!
//! 두 단계로 출력을 만듭니다.
//!
//! 1. 규칙별 확장: 입력 규칙마다 세 열 접미사를 대상 필드와 모든 합산 항에 붙인
//!    규칙 세 개를 `.total`, `.exemption`, `.liable` 순서로 생성합니다.
//! 2. 집계 규칙 합성: 입력 전체에 등장한 서로 다른 (접미사 붙기 전) 필드명마다
//!    `F.total = F.exemption + F.liable` 규칙을 하나씩 생성합니다.
//!
//! 합성 규칙의 순서는 정해져 있지 않습니다.
//! [`ThreeColumnOptions::sort_aggregates`]를 켜면 필드명 순으로 정렬됩니다.

use std::collections::HashSet;

use rulegen_core::{AUTO_RULE_FLAG, Field, Rule};

use crate::defaults::apply_defaults;

/// 3열 확장의 열 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// 합계
    Total,
    /// 면제분
    Exemption,
    /// 과세분
    Liable,
}

impl Column {
    /// 확장 순서대로 나열한 모든 열
    pub const ALL: [Column; 3] = [Column::Total, Column::Exemption, Column::Liable];

    /// 필드명에 붙는 접미사
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Total => ".total",
            Self::Exemption => ".exemption",
            Self::Liable => ".liable",
        }
    }
}

/// 3열 확장 옵션
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreeColumnOptions {
    /// 합성된 집계 규칙을 필드명 순으로 정렬
    pub sort_aggregates: bool,
}

/// 규칙 목록을 3열로 확장하고 필드별 집계 규칙을 덧붙입니다.
pub fn expand(rules: &[Rule], options: ThreeColumnOptions) -> Vec<Rule> {
    let mut output = Vec::with_capacity(rules.len() * Column::ALL.len());

    for rule in rules {
        output.extend(Column::ALL.iter().map(|&column| expand_column(rule, column)));
    }

    let mut names: Vec<&str> = collect_field_names(rules).into_iter().collect();
    if options.sort_aggregates {
        names.sort_unstable();
    }

    tracing::debug!(
        expanded = output.len(),
        aggregates = names.len(),
        "three-column expansion"
    );

    output.extend(names.into_iter().map(aggregate_rule));
    output
}

/// 규칙 하나를 지정한 열로 변환합니다.
///
/// 대상 필드와 모든 합산 항에 같은 접미사가 붙고, 기본값은 0이 되며,
/// 합산 항의 `multiplier`와 `indicator`는 그대로 유지됩니다.
pub fn expand_column(rule: &Rule, column: Column) -> Rule {
    let suffix = column.suffix();
    let mut expanded = rule.clone();
    expanded.expression.field = rule.expression.field.with_suffix(suffix);
    expanded.expression.sum = rule
        .expression
        .sum
        .iter()
        .map(|summand| summand.with_suffix(suffix))
        .collect();
    apply_defaults(&mut expanded);
    expanded
}

/// `F.total = F.exemption + F.liable` 집계 규칙을 생성합니다.
pub fn aggregate_rule(name: &str) -> Rule {
    let base = Field::named(name);
    let mut rule = Rule::new(
        base.with_suffix(Column::Total.suffix()),
        vec![
            base.with_suffix(Column::Exemption.suffix()),
            base.with_suffix(Column::Liable.suffix()),
        ],
    );
    rule.rule_flags = vec![AUTO_RULE_FLAG.to_owned()];
    apply_defaults(&mut rule);
    rule
}

/// 입력 규칙 전체에 등장한 서로 다른 필드명 (대상 + 합산 항)
fn collect_field_names(rules: &[Rule]) -> HashSet<&str> {
    rules
        .iter()
        .flat_map(|rule| rule.expression.field_names())
        .collect()
}
