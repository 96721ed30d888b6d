// src/errors.rs

//! Crate-wide error types.
//!
//! [`ScheduleError`] is the engine's taxonomy: every variant is terminal and
//! reproducible for a given input. [`TaskplanError`] wraps it together with
//! the IO / parsing failures of the CLI layer.

use thiserror::Error;

use crate::task::TaskTitle;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The payload is not a sequence of task-like records.
    #[error("{0}")]
    InvalidInputShape(String),

    /// A record at `index` (0-based, input order) is not a valid task.
    #[error("{reason}")]
    InvalidTask { index: usize, reason: String },

    #[error("duplicate task title: {0}")]
    DuplicateTask(TaskTitle),

    #[error("invalid dueDate for \"{title}\"")]
    InvalidDate { title: TaskTitle, value: String },

    #[error("task \"{task}\" depends on unknown task \"{dependency}\"")]
    UnknownDependency {
        task: TaskTitle,
        dependency: TaskTitle,
    },

    /// The graph could not be fully drained.
    ///
    /// `blocked` lists every unscheduled task in input order; `witness`, when
    /// requested, is one concrete loop such as `["A", "B", "A"]`.
    #[error("cycle detected among tasks: {}{}", .blocked.join(", "), format_witness(.witness))]
    Cycle {
        blocked: Vec<TaskTitle>,
        witness: Option<Vec<TaskTitle>>,
    },

    #[error("too many tasks: {count} exceeds the limit of {limit}")]
    TooManyTasks { count: usize, limit: usize },
}

fn format_witness(witness: &Option<Vec<TaskTitle>>) -> String {
    match witness {
        Some(path) if !path.is_empty() => format!(" (cycle: {})", path.join(" -> ")),
        _ => String::new(),
    }
}

#[derive(Error, Debug)]
pub enum TaskplanError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskplanError>;
