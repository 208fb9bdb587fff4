mod common;

use stepdag::config::load_and_validate;
use stepdag::errors::StepdagError;
use stepdag::{build_schedule, validate, Step, StepClass};
use stepdag_test_utils::builders::{exclusive, pooled, unconstrained};

#[test]
fn mutual_predecessors_fail_with_cycle_error() {
    common::init_tracing();

    let steps = vec![exclusive("A", 1).after("B"), exclusive("B", 1).after("A")];

    match build_schedule(&steps, 2) {
        Err(StepdagError::CycleError { steps }) => {
            assert_eq!(steps, vec!["A".to_string(), "B".to_string()]);
        }
        Err(e) => panic!("Expected CycleError, got: {:?}", e),
        Ok(s) => panic!("Expected error, got schedule: {:?}", s),
    }
}

#[test]
fn cycle_error_lists_steps_blocked_downstream() {
    let steps = vec![
        unconstrained("root", 1),
        unconstrained("x", 1).after("root").after("z"),
        unconstrained("y", 1).after("x"),
        unconstrained("z", 1).after("y"),
        unconstrained("tail", 1).after("z"),
    ];

    match validate(&steps) {
        Err(StepdagError::CycleError { steps }) => {
            assert_eq!(steps, vec!["x", "y", "z", "tail"]);
        }
        other => panic!("Expected CycleError, got: {:?}", other),
    }
}

#[test]
fn self_dependency_is_a_cycle() {
    let steps = vec![unconstrained("loop", 1).after("loop")];

    assert!(matches!(
        validate(&steps),
        Err(StepdagError::CycleError { ref steps }) if steps == &["loop".to_string()]
    ));
}

#[test]
fn missing_predecessor_fails_with_reference_error() {
    let steps = vec![unconstrained("A", 1), unconstrained("B", 1).after("ghost")];

    match build_schedule(&steps, 2) {
        Err(StepdagError::ReferenceError { step, missing }) => {
            assert_eq!(step, "B");
            assert_eq!(missing, "ghost");
        }
        other => panic!("Expected ReferenceError, got: {:?}", other),
    }
}

#[test]
fn zero_pool_capacity_with_pooled_step_is_a_configuration_error() {
    let steps = vec![exclusive("A", 1), pooled("saute", 4).after("A")];

    match build_schedule(&steps, 0) {
        Err(StepdagError::ConfigurationError(msg)) => {
            assert!(msg.contains("saute"));
            assert!(msg.contains("pool capacity is 0"));
        }
        other => panic!("Expected ConfigurationError, got: {:?}", other),
    }
    // Structure alone is fine.
    assert!(validate(&steps).is_ok());
}

#[test]
fn negative_duration_is_a_validation_error() {
    let steps = vec![unconstrained("A", 1), exclusive("B", -3)];

    match validate(&steps) {
        Err(StepdagError::ValidationError { step, reason }) => {
            assert_eq!(step.as_deref(), Some("B"));
            assert!(reason.contains("-3"));
        }
        other => panic!("Expected ValidationError, got: {:?}", other),
    }
}

#[test]
fn duplicate_ids_are_a_validation_error() {
    let steps = vec![unconstrained("A", 1), exclusive("A", 2)];

    let err = validate(&steps).unwrap_err();
    assert!(matches!(err, StepdagError::ValidationError { .. }));
    assert_eq!(
        err.to_string(),
        "Validation error in step 'A': duplicate step id"
    );
}

#[test]
fn empty_or_blank_id_is_a_validation_error() {
    for id in ["", "   "] {
        let steps = vec![unconstrained("A", 1), unconstrained(id, 2)];

        let err = validate(&steps).unwrap_err();
        match &err {
            StepdagError::ValidationError { step, reason } => {
                assert!(step.is_none());
                assert_eq!(reason, "step #2 has an empty id");
            }
            other => panic!("Expected ValidationError, got: {:?}", other),
        }
        assert_eq!(err.to_string(), "Validation error: step #2 has an empty id");
    }
}

#[test]
fn repeated_predecessor_is_a_validation_error() {
    let steps = vec![unconstrained("A", 1), unconstrained("B", 1).after("A").after("A")];

    assert!(matches!(
        validate(&steps),
        Err(StepdagError::ValidationError { step: Some(ref s), .. }) if s == "B"
    ));
}

#[test]
fn overflowing_total_duration_is_rejected() {
    let steps = vec![
        Step::new("A", i64::MAX, StepClass::Exclusive),
        Step::new("B", 1, StepClass::Exclusive),
    ];

    assert!(matches!(
        build_schedule(&steps, 1),
        Err(StepdagError::ValidationError { .. })
    ));
}

#[test]
fn plan_file_cycle_returns_structured_error() {
    let file = common::plan_file(
        r#"
[[step]]
id = "A"
duration = 1
class = "exclusive"
after = ["B"]

[[step]]
id = "B"
duration = 1
class = "exclusive"
after = ["A"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(e @ StepdagError::CycleError { .. }) => {
            assert_eq!(e.to_string(), "Cycle detected among steps: A, B");
        }
        Err(e) => panic!("Expected CycleError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn plan_file_unknown_dependency_returns_reference_error() {
    let file = common::plan_file(
        r#"
[[step]]
id = "A"
duration = 1
class = "passive"
after = ["NonExistent"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(e @ StepdagError::ReferenceError { .. }) => {
            let msg = e.to_string();
            assert!(msg.contains("unknown step"));
            assert!(msg.contains("NonExistent"));
        }
        Err(e) => panic!("Expected ReferenceError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn plan_file_unknown_class_returns_validation_error() {
    let file = common::plan_file(
        r#"
[[step]]
id = "stir"
duration = 2
class = "frantic"
"#,
    );

    match load_and_validate(file.path()) {
        Err(StepdagError::ValidationError { step, reason }) => {
            assert_eq!(step.as_deref(), Some("stir"));
            assert!(reason.contains("frantic"));
        }
        Err(e) => panic!("Expected ValidationError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn plan_file_zero_capacity_with_pooled_step_is_rejected() {
    let file = common::plan_file(
        r#"
[config]
pool_capacity = 0

[[step]]
id = "fry"
duration = 8
class = "partial"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(StepdagError::ConfigurationError(_))
    ));
}

#[test]
fn plan_file_without_steps_is_rejected() {
    let file = common::plan_file("[config]\npool_capacity = 3\n");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(StepdagError::ConfigurationError(_))
    ));
}

#[test]
fn fractional_duration_is_a_parse_error() {
    let file = common::plan_file(
        r#"
[[step]]
id = "A"
duration = 2.5
class = "exclusive"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(StepdagError::TomlError(_))
    ));
}

#[test]
fn missing_plan_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    assert!(matches!(
        load_and_validate(&path),
        Err(StepdagError::IoError(_))
    ));
}
