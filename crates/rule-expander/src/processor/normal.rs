//! 일반 규칙 처리 -- 이름 변경 없이 기본값만 주입합니다.

use rulegen_core::Rule;

use crate::defaults::apply_defaults;

/// 각 규칙의 필드 기본값을 0으로 고정하고 공통 기본값을 적용합니다.
///
/// 입력과 같은 길이, 같은 순서의 규칙을 반환합니다.
pub fn normalize(rules: Vec<Rule>) -> Vec<Rule> {
    rules
        .into_iter()
        .map(|mut rule| {
            rule.zero_defaults();
            apply_defaults(&mut rule);
            rule
        })
        .collect()
}
