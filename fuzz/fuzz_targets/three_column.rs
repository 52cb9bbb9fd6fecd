#![no_main]

use libfuzzer_sys::fuzz_target;
use rulegen_expander::{RuleProcessor, RuleReader, ThreeColumnOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(rules) = RuleReader::read_records(data, "fuzz-input") else {
        return;
    };
    let input = rules.len();

    let expanded = RuleProcessor::ThreeColumn(ThreeColumnOptions::default()).process(rules);

    // 입력 규칙마다 3개의 열 규칙이 먼저 나온다
    assert!(expanded.len() >= input * 3);
    for rule in &expanded {
        assert_eq!(rule.decimal_precision, rulegen_core::DEFAULT_DECIMAL_PRECISION);
        assert!(!rule.error_code.is_empty());
    }
});
