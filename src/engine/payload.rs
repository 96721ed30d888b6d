// src/engine/payload.rs

//! Request payload -> task records.

use serde_json::Value;

use crate::errors::ScheduleError;

/// Pull the raw task records out of a request payload.
///
/// Accepts `{"tasks": [...]}` (the request shape) and, for convenience on
/// the command line, a bare array of records.
pub fn extract_records(payload: &Value) -> Result<&[Value], ScheduleError> {
    match payload {
        Value::Array(records) => Ok(records.as_slice()),
        Value::Object(fields) => match fields.get("tasks") {
            None | Some(Value::Null) => Err(ScheduleError::InvalidInputShape(
                "request body must contain tasks array".to_string(),
            )),
            Some(Value::Array(records)) => Ok(records.as_slice()),
            Some(_) => Err(tasks_not_an_array()),
        },
        _ => Err(tasks_not_an_array()),
    }
}

fn tasks_not_an_array() -> ScheduleError {
    ScheduleError::InvalidInputShape("tasks must be an array".to_string())
}
