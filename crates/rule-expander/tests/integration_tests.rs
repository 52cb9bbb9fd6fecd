//! 통합 테스트 -- 파일 읽기부터 출력 파일 쓰기까지 전체 흐름 검증

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rulegen_core::{ExpansionConfig, Rule, SourcesConfig};
use rulegen_expander::{ExpandPipeline, ExpanderError, RuleReader};
use tempfile::TempDir;

const THREE_COLUMN_RULES: &str = r#"[
{"expression":{"field":{"name":"tax"},"sum":[{"name":"base","multiplier":0.1}]}},
{"expression":{"field":{"name":"fee"},"sum":[{"name":"base"},{"name":"surcharge","indicator":"S"}]},"errorCode":"E10"}
]

"#;

const NORMAL_RULES: &str = r#"[{"expression":{"field":{"name":"net","defaultValue":9},"sum":[{"name":"gross"},{"name":"tax.total","multiplier":-1}]},"enableFlags":["NET"]}]

[{"expression":{"field":{"name":"due"},"sum":[{"name":"net"}]},"errorCode":"E20","decimalPrecision":0}]

"#;

struct Fixture {
    _dir: TempDir,
    sources: SourcesConfig,
}

impl Fixture {
    fn new(three_column: &str, normal: &str) -> Self {
        let dir = TempDir::new().expect("should create temp dir");
        let sources = SourcesConfig {
            three_column_rule_filepath: dir.path().join("jsonRule_three_column.txt"),
            normal_rule_filepath: dir.path().join("jsonRule_normal.txt"),
            output_rule_filepath: dir.path().join("jsonRule.out.txt"),
        };
        fs::write(&sources.three_column_rule_filepath, three_column)
            .expect("should write three-column rules");
        fs::write(&sources.normal_rule_filepath, normal).expect("should write normal rules");
        Self { _dir: dir, sources }
    }

    fn pipeline(&self) -> ExpandPipeline {
        ExpandPipeline::new(&self.sources, &ExpansionConfig::default())
    }

    fn output(&self) -> &PathBuf {
        &self.sources.output_rule_filepath
    }
}

fn read_output(path: &Path) -> Vec<Rule> {
    let text = fs::read_to_string(path).expect("output should exist");
    serde_json::from_str(&text).expect("output should be a JSON array")
}

#[test]
fn test_full_run_merges_sources_in_order() {
    // Given: 3열 규칙 2개, 일반 규칙 2개
    let fixture = Fixture::new(THREE_COLUMN_RULES, NORMAL_RULES);

    // When
    let summary = fixture.pipeline().run().expect("run should succeed");

    // Then: 2*3 확장 + 집계 4 (tax, base, fee, surcharge) + 일반 2
    assert_eq!(summary.sources.len(), 2);
    assert_eq!(summary.sources[0].processor, "three-column");
    assert_eq!(summary.sources[0].input_rules, 2);
    assert_eq!(summary.sources[0].output_rules, 10);
    assert_eq!(summary.sources[1].processor, "normal");
    assert_eq!(summary.sources[1].output_rules, 2);
    assert_eq!(summary.total_rules, 12);

    let rules = read_output(fixture.output());
    assert_eq!(rules.len(), 12);

    let phase_a: Vec<_> = rules[..6]
        .iter()
        .map(|r| r.expression.field.name.as_str())
        .collect();
    assert_eq!(
        phase_a,
        vec![
            "tax.total",
            "tax.exemption",
            "tax.liable",
            "fee.total",
            "fee.exemption",
            "fee.liable"
        ]
    );

    let aggregates: HashSet<_> = rules[6..10]
        .iter()
        .map(|r| r.expression.field.name.as_str())
        .collect();
    assert_eq!(
        aggregates,
        HashSet::from(["tax.total", "base.total", "fee.total", "surcharge.total"])
    );

    assert_eq!(rules[10].expression.field.name, "net");
    assert_eq!(rules[11].expression.field.name, "due");
}

#[test]
fn test_every_output_rule_is_normalized() {
    let fixture = Fixture::new(THREE_COLUMN_RULES, NORMAL_RULES);
    fixture.pipeline().run().expect("run should succeed");

    for rule in read_output(fixture.output()) {
        assert_eq!(rule.decimal_precision, 2);
        assert!(!rule.error_code.is_empty());
        assert_eq!(rule.expression.field.default_value, Some(0.0));
        assert!(
            rule.expression
                .sum
                .iter()
                .all(|f| f.default_value == Some(0.0))
        );
    }
}

#[test]
fn test_error_codes_preserved_or_defaulted() {
    let fixture = Fixture::new(THREE_COLUMN_RULES, NORMAL_RULES);
    fixture.pipeline().run().expect("run should succeed");
    let rules = read_output(fixture.output());

    assert!(rules[..3].iter().all(|r| r.error_code == "E02PND50XXX"));
    assert!(rules[3..6].iter().all(|r| r.error_code == "E10"));
    assert_eq!(rules[10].error_code, "E02PND50XXX");
    assert_eq!(rules[11].error_code, "E20");
}

#[test]
fn test_optional_attributes_survive_serialization() {
    let fixture = Fixture::new(THREE_COLUMN_RULES, NORMAL_RULES);
    fixture.pipeline().run().expect("run should succeed");
    let text = fs::read_to_string(fixture.output()).expect("output should exist");

    assert!(!text.contains("null"), "absent optionals must be omitted");
    let rules: Vec<Rule> = serde_json::from_str(&text).expect("valid JSON");

    let fee_liable = &rules[5];
    assert_eq!(fee_liable.expression.sum[1].name, "surcharge.liable");
    assert_eq!(fee_liable.expression.sum[1].indicator.as_deref(), Some("S"));
    assert_eq!(rules[0].expression.sum[0].multiplier, Some(0.1));
    assert_eq!(rules[10].enable_flags, vec!["NET"]);
    assert_eq!(rules[10].expression.sum[1].multiplier, Some(-1.0));
}

#[test]
fn test_output_round_trips_through_reader() {
    let fixture = Fixture::new(THREE_COLUMN_RULES, NORMAL_RULES);
    fixture.pipeline().run().expect("run should succeed");
    let written = read_output(fixture.output());

    // 출력 파일 + 빈 줄은 그대로 하나의 논리 레코드가 됨
    let mut text = fs::read_to_string(fixture.output()).expect("output should exist");
    text.push('\n');
    let reread = RuleReader::read_records(text.as_bytes(), "roundtrip").expect("should reparse");
    assert_eq!(written, reread);
}

#[test]
fn test_malformed_record_leaves_output_untouched() {
    // Given: 두 번째 논리 레코드가 잘못된 일반 규칙 파일
    let broken_normal = "[{\"expression\":{\"field\":{\"name\":\"ok\"}}}]\n\n[{\"expression\":\n\n";
    let fixture = Fixture::new(THREE_COLUMN_RULES, broken_normal);
    fs::write(fixture.output(), "previous output").expect("should seed output");

    // When
    let err = fixture.pipeline().run().expect_err("run should fail");

    // Then
    match err {
        ExpanderError::Parse { record, line, .. } => {
            assert_eq!(record, 2);
            assert_eq!(line, 3);
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
    assert_eq!(
        fs::read_to_string(fixture.output()).expect("output should exist"),
        "previous output"
    );
}

#[test]
fn test_missing_source_fails_without_creating_output() {
    let fixture = Fixture::new(THREE_COLUMN_RULES, NORMAL_RULES);
    fs::remove_file(&fixture.sources.normal_rule_filepath).expect("should remove source");

    let err = fixture.pipeline().run().expect_err("run should fail");

    assert!(matches!(err, ExpanderError::NotFound { .. }));
    assert!(!fixture.output().exists());
}

#[test]
fn test_trailing_unterminated_record_is_excluded() {
    let unterminated = "[{\"expression\":{\"field\":{\"name\":\"a\"}}}]\n\n[{\"expression\":{\"field\":{\"name\":\"b\"}}}]";
    let fixture = Fixture::new("", unterminated);

    let summary = fixture.pipeline().run().expect("run should succeed");

    assert_eq!(summary.total_rules, 1);
    let rules = read_output(fixture.output());
    assert_eq!(rules[0].expression.field.name, "a");
}

#[test]
fn test_sorted_aggregates_are_deterministic() {
    let fixture = Fixture::new(THREE_COLUMN_RULES, "");
    let pipeline = ExpandPipeline::new(
        &fixture.sources,
        &ExpansionConfig {
            sort_aggregates: true,
        },
    );
    pipeline.run().expect("run should succeed");

    let rules = read_output(fixture.output());
    let aggregates: Vec<_> = rules[6..]
        .iter()
        .map(|r| r.expression.field.name.as_str())
        .collect();
    assert_eq!(
        aggregates,
        vec!["base.total", "fee.total", "surcharge.total", "tax.total"]
    );
}
