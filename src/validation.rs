//! 원시 텍스트 입력을 검증해 [`PlanConfig`]로 바꾸는 파이프라인.
//!
//! 필드마다 숫자 변환 → 정수/범위 검사 → 제약 검사 순서로 진행하고,
//! 실패한 필드를 모두 모아 한 번에 돌려준다.

use thiserror::Error;

use crate::plan::PlanConfig;

/// f64로 정확히 표현 가능한 가장 큰 정수 (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// 필드별 제약.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// 0 이상
    NonNegative,
    /// 1 이상
    Positive,
}

/// 사용자에게 입력받는 숫자 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TotalWeeks,
    InitialVolume,
    IncrementPercent,
    RecoveryInterval,
    RecoveryDecrementPercent,
}

impl Field {
    /// 프롬프트 순서대로 나열한 전체 필드.
    pub const ALL: [Field; 5] = [
        Field::TotalWeeks,
        Field::InitialVolume,
        Field::IncrementPercent,
        Field::RecoveryInterval,
        Field::RecoveryDecrementPercent,
    ];

    pub fn constraint(self) -> Constraint {
        match self {
            Field::TotalWeeks | Field::RecoveryInterval => Constraint::NonNegative,
            Field::InitialVolume | Field::IncrementPercent | Field::RecoveryDecrementPercent => {
                Constraint::Positive
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::TotalWeeks => "weeks",
            Field::InitialVolume => "initial volume",
            Field::IncrementPercent => "increment",
            Field::RecoveryInterval => "recovery interval",
            Field::RecoveryDecrementPercent => "recovery decrement",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 필드 하나의 검증 실패.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: Field, input: String },
    #[error("{field}: value must be an integer")]
    NotAnInteger { field: Field },
    #[error("{field}: value must be finite and at most {MAX_SAFE_INTEGER}")]
    OutOfRange { field: Field },
    #[error("{field}: value must not be negative")]
    Negative { field: Field },
    #[error("{field}: value must be greater than zero")]
    NotPositive { field: Field },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotANumber { field, .. }
            | ValidationError::NotAnInteger { field }
            | ValidationError::OutOfRange { field }
            | ValidationError::Negative { field }
            | ValidationError::NotPositive { field } => *field,
        }
    }
}

/// 프롬프트에서 모은 원시 입력.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputs {
    pub total_weeks: String,
    pub initial_volume: String,
    pub increment_percent: String,
    pub recovery_interval: String,
    pub recovery_decrement_percent: String,
    pub round_to_integer: bool,
}

impl RawInputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::TotalWeeks => &self.total_weeks,
            Field::InitialVolume => &self.initial_volume,
            Field::IncrementPercent => &self.increment_percent,
            Field::RecoveryInterval => &self.recovery_interval,
            Field::RecoveryDecrementPercent => &self.recovery_decrement_percent,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::TotalWeeks => &mut self.total_weeks,
            Field::InitialVolume => &mut self.initial_volume,
            Field::IncrementPercent => &mut self.increment_percent,
            Field::RecoveryInterval => &mut self.recovery_interval,
            Field::RecoveryDecrementPercent => &mut self.recovery_decrement_percent,
        };
        *slot = value;
    }
}

/// 텍스트를 숫자로 변환한다. 빈 문자열은 0, `0x`/`0o`/`0b` 접두어와 지수 표기를 허용한다.
fn coerce_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    let radix = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| s.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix {
        return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
    }
    // Rust는 "inf"/"nan"도 받아들이므로 숫자 형태만 통과시킨다.
    let looks_numeric = s
        .trim_start_matches(['+', '-'])
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');
    if looks_numeric {
        return s.parse::<f64>().ok();
    }
    match s {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// 한 필드의 원시 텍스트를 검증해 정수로 돌려준다.
pub fn parse_field(field: Field, raw: &str) -> Result<u64, ValidationError> {
    let value = coerce_number(raw).ok_or_else(|| ValidationError::NotANumber {
        field,
        input: raw.trim().to_string(),
    })?;
    if !value.is_finite() || value.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(ValidationError::OutOfRange { field });
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    if field.constraint() == Constraint::Positive && value == 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(value as u64)
}

/// 모든 필드를 순서대로 검증한다. 하나라도 실패하면 실패 목록 전체를 돌려준다.
pub fn validate(inputs: &RawInputs) -> Result<PlanConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut values = [0u64; 5];
    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        match parse_field(field, inputs.get(field)) {
            Ok(v) => *slot = v,
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    let [total_weeks, initial_volume, increment_percent, recovery_interval, recovery_decrement_percent] =
        values;
    Ok(PlanConfig {
        total_weeks,
        initial_volume,
        increment_percent,
        recovery_interval,
        recovery_decrement_percent,
        round_to_integer: inputs.round_to_integer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_like_number_conversion() {
        assert_eq!(coerce_number(" 20 "), Some(20.0));
        assert_eq!(coerce_number(""), Some(0.0));
        assert_eq!(coerce_number("2e1"), Some(20.0));
        assert_eq!(coerce_number("0x10"), Some(16.0));
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("nan"), None);
        assert_eq!(coerce_number("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn safe_integer_boundary() {
        assert_eq!(
            parse_field(Field::TotalWeeks, "9007199254740991"),
            Ok(MAX_SAFE_INTEGER)
        );
        assert_eq!(
            parse_field(Field::TotalWeeks, "9007199254740992"),
            Err(ValidationError::OutOfRange {
                field: Field::TotalWeeks
            })
        );
    }
}
