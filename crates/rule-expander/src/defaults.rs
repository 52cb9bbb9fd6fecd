//! 출력 규칙 공통 정규화

use rulegen_core::{DEFAULT_DECIMAL_PRECISION, DEFAULT_ERROR_CODE, Rule};

/// 모든 출력 규칙에 공통 기본값을 적용합니다.
///
/// `decimalPrecision`은 항상 2로 덮어쓰고, `errorCode`는 비어 있을 때만 채웁니다.
/// 여러 번 적용해도 결과가 같습니다.
pub fn apply_defaults(rule: &mut Rule) {
    rule.decimal_precision = DEFAULT_DECIMAL_PRECISION;
    if rule.error_code.is_empty() {
        rule.error_code = DEFAULT_ERROR_CODE.to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulegen_core::Field;

    #[test]
    fn fills_missing_error_code_and_precision() {
        let mut rule = Rule::new(Field::named("tax"), Vec::new());
        rule.decimal_precision = 6;
        apply_defaults(&mut rule);
        assert_eq!(rule.decimal_precision, 2);
        assert_eq!(rule.error_code, "E02PND50XXX");
    }

    #[test]
    fn keeps_existing_error_code() {
        let mut rule = Rule::new(Field::named("tax"), Vec::new());
        rule.error_code = "E01CUSTOM".to_owned();
        apply_defaults(&mut rule);
        assert_eq!(rule.error_code, "E01CUSTOM");
    }

    #[test]
    fn is_idempotent() {
        let mut once = Rule::new(Field::named("tax"), vec![Field::named("base")]);
        apply_defaults(&mut once);
        let mut twice = once.clone();
        apply_defaults(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn leaves_fields_and_flags_untouched() {
        let mut rule = Rule::new(Field::named("tax"), vec![Field::named("base")]);
        let before = rule.clone();
        apply_defaults(&mut rule);
        assert_eq!(rule.expression, before.expression);
        assert!(rule.enable_flags.is_empty());
        assert!(rule.rule_flags.is_empty());
    }
}
