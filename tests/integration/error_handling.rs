// tests/integration/error_handling.rs

use serde_json::json;
use taskplan::Planner;
use taskplan::errors::ScheduleError;
use taskplan_test_utils::builders::{PayloadBuilder, TaskRecordBuilder as Task};
use taskplan_test_utils::init_tracing;

#[test]
fn payload_without_tasks_is_an_input_shape_error() {
    init_tracing();

    let err = Planner::default()
        .plan_payload(&json!({"project": "apollo"}))
        .unwrap_err();
    assert_eq!(
        err,
        ScheduleError::InvalidInputShape("request body must contain tasks array".into())
    );

    let err = Planner::default()
        .plan_payload(&json!({"tasks": {"title": "A"}}))
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInputShape(_)));
}

#[test]
fn first_offending_record_wins() {
    init_tracing();

    // Record 1 has a bad date, record 2 has no title: the date is reported.
    let err = PayloadBuilder::new()
        .with_task(Task::new("fine"))
        .with_task(Task::new("late").due("someday"))
        .with_raw(json!({"estimatedHours": 3}))
        .plan()
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid dueDate for \"late\"");
}

#[test]
fn titleless_record_reports_its_position() {
    init_tracing();

    let err = PayloadBuilder::new()
        .with_task(Task::new("fine"))
        .with_raw(json!({"title": 42}))
        .plan()
        .unwrap_err();
    match err {
        ScheduleError::InvalidTask { index, reason } => {
            assert_eq!(index, 1);
            assert_eq!(reason, "every task must have a string title");
        }
        other => panic!("expected InvalidTask, got {other:?}"),
    }
}

#[test]
fn duplicates_are_rejected_regardless_of_position() {
    init_tracing();

    for position in 0..3 {
        let mut builder = PayloadBuilder::new()
            .with_task(Task::new("one"))
            .with_task(Task::new("two"))
            .with_task(Task::new("three"));
        builder = match position {
            0 => builder.with_task(Task::new("one").hours(2.0)),
            1 => builder.with_task(Task::new("two").after("one")),
            _ => builder.with_task(Task::new("three").due("2030-01-01")),
        };

        let err = builder.plan().unwrap_err();
        assert!(
            matches!(err, ScheduleError::DuplicateTask(_)),
            "position {position}: got {err:?}"
        );
    }
}

#[test]
fn unknown_dependency_is_found_before_cycles() {
    init_tracing();

    let err = PayloadBuilder::new()
        .with_task(Task::new("A").after("B"))
        .with_task(Task::new("B").after("A").after("ghost"))
        .plan()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "task \"B\" depends on unknown task \"ghost\""
    );
}

#[test]
fn identical_input_reproduces_identical_error() {
    init_tracing();

    let payload = PayloadBuilder::new()
        .with_task(Task::new("x").after("z"))
        .with_task(Task::new("y").after("x"))
        .with_task(Task::new("z").after("y"));

    let first = payload.plan().unwrap_err();
    for _ in 0..5 {
        assert_eq!(payload.plan().unwrap_err(), first);
    }
    assert_eq!(first.to_string(), "cycle detected among tasks: x, y, z");
}
