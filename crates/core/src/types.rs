//! 규칙 데이터 모델 -- 입력/출력 JSON 규칙 레코드
//!
//! 하나의 [`Rule`]은 대상 필드 하나를 다른 필드들의 (가중) 합으로 계산하는 방법을 기술합니다.
//! 직렬화 형식은 하위 규칙 평가 엔진이 읽는 camelCase JSON이며,
//! 비어 있는 선택 속성은 `null`로 내보내지 않고 생략합니다.
//! 입력에서는 명시적인 `null`도 키가 없는 것과 같이 기본값으로 읽습니다.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `errorCode`가 비어 있는 규칙에 채워지는 기본 에러 코드
pub const DEFAULT_ERROR_CODE: &str = "E02PND50XXX";

/// 모든 출력 규칙의 소수점 정밀도
pub const DEFAULT_DECIMAL_PRECISION: i32 = 2;

/// 모든 출력 필드의 기본값
pub const DEFAULT_FIELD_VALUE: f64 = 0.0;

/// 자동 합성된 집계 규칙에 붙는 플래그
pub const AUTO_RULE_FLAG: &str = "XML_AUTO";

/// 수식의 피연산자 하나 (대상 필드 또는 합산 항)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// 필드명
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    /// 지시자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    /// 합산 시 곱해지는 가중치
    #[serde(
        default,
        serialize_with = "integral_as_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub multiplier: Option<f64>,
    /// 값이 없을 때 사용되는 기본값
    #[serde(
        default,
        serialize_with = "integral_as_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<f64>,
}

impl Field {
    /// 이름만 가진 필드를 생성합니다.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// 기본값을 0으로 고정합니다.
    pub fn zero_default(&mut self) {
        self.default_value = Some(DEFAULT_FIELD_VALUE);
    }

    /// 이름 뒤에 접미사를 붙인 복사본을 반환합니다.
    ///
    /// `indicator`와 `multiplier`는 그대로 유지되고 기본값은 0으로 설정됩니다.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        let mut field = self.clone();
        field.name.push_str(suffix);
        field.zero_default();
        field
    }
}

/// 규칙 수식 -- `field = Σ sum[i] * multiplier`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    /// 계산 대상 필드
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: Field,
    /// 합산 항 목록 (순서 유지)
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sum: Vec<Field>,
}

impl Expression {
    /// 대상 필드와 모든 합산 항의 이름을 순서대로 반환합니다.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.field.name.as_str()).chain(self.sum.iter().map(|f| f.name.as_str()))
    }
}

/// 계산 가능한 출력 필드 하나를 기술하는 규칙
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// 계산 수식
    #[serde(default, deserialize_with = "null_as_default")]
    pub expression: Expression,
    /// 평가 실패 시 보고되는 에러 코드
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub error_code: String,
    /// 소수점 정밀도
    #[serde(default, deserialize_with = "null_as_default")]
    pub decimal_precision: i32,
    /// 활성화 플래그
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub enable_flags: Vec<String>,
    /// 규칙 플래그
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub rule_flags: Vec<String>,
}

impl Rule {
    /// 대상 필드와 합산 항으로 규칙을 생성합니다.
    pub fn new(field: Field, sum: Vec<Field>) -> Self {
        Self {
            expression: Expression { field, sum },
            ..Self::default()
        }
    }

    /// 대상 필드와 모든 합산 항의 기본값을 0으로 고정합니다.
    pub fn zero_defaults(&mut self) {
        self.expression.field.zero_default();
        for summand in &mut self.expression.sum {
            summand.zero_default();
        }
    }
}

/// f64가 모든 정수를 정확히 표현하는 상한 (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// `null`을 키가 없는 경우와 같이 기본값으로 읽습니다.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 소수부가 없는 값은 `0.0`이 아닌 `0`으로 씁니다.
fn integral_as_integer<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *value {
        Some(v) if v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER => {
            serializer.serialize_i64(v as i64)
        }
        Some(v) => serializer.serialize_f64(v),
        None => serializer.serialize_none(),
    }
}
