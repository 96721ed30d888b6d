// src/task/normalize.rs

//! Raw record -> [`Task`] conversion.
//!
//! Checks run per record in input order and stop at the first problem:
//! title, duplicate title, due date, dependency list. Referential integrity
//! of dependencies is left to the graph builder.

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::ScheduleError;
use crate::task::{DueDate, Task, TaskSet, TaskTitle};

const TITLE_FIELD: &str = "title";
const HOURS_FIELD: &str = "estimatedHours";
const DUE_FIELD: &str = "dueDate";
const DEPS_FIELD: &str = "dependencies";

/// Validate raw records and build the task set.
pub fn normalize_tasks(records: &[Value]) -> Result<TaskSet, ScheduleError> {
    let mut set = TaskSet::default();

    for (index, record) in records.iter().enumerate() {
        let task = normalize_record(index, record, &set)?;
        set.insert(task);
    }

    debug!(tasks = set.len(), "normalized task set");
    Ok(set)
}

fn normalize_record(index: usize, record: &Value, seen: &TaskSet) -> Result<Task, ScheduleError> {
    let fields = record.as_object().ok_or_else(|| ScheduleError::InvalidTask {
        index,
        reason: "every task must have a string title".to_string(),
    })?;

    let title = title_of(index, fields)?;
    if seen.contains(&title) {
        return Err(ScheduleError::DuplicateTask(title));
    }
    let due = due_date_of(&title, fields.get(DUE_FIELD))?;
    let dependencies = dependencies_of(index, &title, fields.get(DEPS_FIELD))?;
    let estimated_hours = coerce_hours(fields.get(HOURS_FIELD));

    Ok(Task {
        title,
        estimated_hours,
        due,
        dependencies,
    })
}

fn title_of(index: usize, fields: &Map<String, Value>) -> Result<TaskTitle, ScheduleError> {
    match fields.get(TITLE_FIELD) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(ScheduleError::InvalidTask {
            index,
            reason: "every task must have a string title".to_string(),
        }),
    }
}

/// `null`, a missing field and `""` all mean "no deadline".
fn due_date_of(title: &str, raw: Option<&Value>) -> Result<DueDate, ScheduleError> {
    match raw {
        None | Some(Value::Null) => Ok(DueDate::Open),
        Some(Value::String(s)) if s.is_empty() => Ok(DueDate::Open),
        Some(Value::String(s)) => DueDate::parse(s).ok_or_else(|| ScheduleError::InvalidDate {
            title: title.to_string(),
            value: s.clone(),
        }),
        Some(other) => Err(ScheduleError::InvalidDate {
            title: title.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Anything other than an array is treated as "no dependencies"; inside an
/// array every entry must be a title string.
fn dependencies_of(
    index: usize,
    title: &str,
    raw: Option<&Value>,
) -> Result<Vec<TaskTitle>, ScheduleError> {
    let Some(Value::Array(items)) = raw else {
        return Ok(Vec::new());
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(dep) => Ok(dep.clone()),
            other => Err(ScheduleError::InvalidTask {
                index,
                reason: format!("task \"{title}\" has a non-string dependency: {other}"),
            }),
        })
        .collect()
}

/// Permissive effort coercion: never fails, falls back to 0.
fn coerce_hours(raw: Option<&Value>) -> f64 {
    let hours = match raw {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };

    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}
