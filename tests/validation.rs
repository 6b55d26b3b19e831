use running_planner::plan::PlanConfig;
use running_planner::validation::{parse_field, validate, Field, RawInputs, ValidationError};

fn raw(weeks: &str, initial: &str, inc: &str, interval: &str, dec: &str) -> RawInputs {
    RawInputs {
        total_weeks: weeks.into(),
        initial_volume: initial.into(),
        increment_percent: inc.into(),
        recovery_interval: interval.into(),
        recovery_decrement_percent: dec.into(),
        round_to_integer: true,
    }
}

#[test]
fn valid_inputs_build_config() {
    let cfg = validate(&raw("20", " 20 ", "10", "4", "10")).expect("valid");
    assert_eq!(
        cfg,
        PlanConfig {
            total_weeks: 20,
            initial_volume: 20,
            increment_percent: 10,
            recovery_interval: 4,
            recovery_decrement_percent: 10,
            round_to_integer: true,
        }
    );
}

#[test]
fn zero_allowed_only_for_non_negative_fields() {
    assert_eq!(parse_field(Field::TotalWeeks, "0"), Ok(0));
    assert_eq!(parse_field(Field::RecoveryInterval, "0"), Ok(0));
    assert_eq!(
        parse_field(Field::InitialVolume, "0"),
        Err(ValidationError::NotPositive {
            field: Field::InitialVolume
        })
    );
    assert_eq!(
        parse_field(Field::RecoveryDecrementPercent, "0"),
        Err(ValidationError::NotPositive {
            field: Field::RecoveryDecrementPercent
        })
    );
}

#[test]
fn rejects_non_integers_and_negatives() {
    assert!(matches!(
        parse_field(Field::IncrementPercent, "abc"),
        Err(ValidationError::NotANumber { .. })
    ));
    assert_eq!(
        parse_field(Field::IncrementPercent, "1.5"),
        Err(ValidationError::NotAnInteger {
            field: Field::IncrementPercent
        })
    );
    assert_eq!(
        parse_field(Field::TotalWeeks, "-3"),
        Err(ValidationError::Negative {
            field: Field::TotalWeeks
        })
    );
    assert_eq!(
        parse_field(Field::TotalWeeks, "Infinity"),
        Err(ValidationError::OutOfRange {
            field: Field::TotalWeeks
        })
    );
}

#[test]
fn integer_valued_decimals_are_accepted() {
    assert_eq!(parse_field(Field::InitialVolume, "20.0"), Ok(20));
    assert_eq!(parse_field(Field::InitialVolume, "2e1"), Ok(20));
}

#[test]
fn collects_every_failing_field_in_order() {
    let errors = validate(&raw("x", "0", "10", "-1", "2.5")).expect_err("invalid");
    let fields: Vec<Field> = errors.iter().map(ValidationError::field).collect();
    assert_eq!(
        fields,
        vec![
            Field::TotalWeeks,
            Field::InitialVolume,
            Field::RecoveryInterval,
            Field::RecoveryDecrementPercent
        ]
    );
}

#[test]
fn error_message_names_field() {
    let err = parse_field(Field::RecoveryInterval, "-1").expect_err("negative");
    assert_eq!(err.to_string(), "recovery interval: value must not be negative");
}
