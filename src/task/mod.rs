// src/task/mod.rs

//! Task entities and the normalizer that builds them.
//!
//! - [`due_date`] holds the deadline type, where "no deadline" sorts last.
//! - [`normalize`] turns loosely-typed JSON records into a [`TaskSet`].

pub mod due_date;
pub mod normalize;

use indexmap::IndexMap;

pub use due_date::DueDate;
pub use normalize::normalize_tasks;

/// Canonical task title type; the title is the task's identity.
pub type TaskTitle = String;

/// A validated task. Never mutated after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub title: TaskTitle,
    /// Non-negative and finite.
    pub estimated_hours: f64,
    pub due: DueDate,
    /// Titles that must be scheduled first, in input order, duplicates kept.
    pub dependencies: Vec<TaskTitle>,
}

/// Normalized tasks keyed by title, in input order.
#[derive(Debug, Clone, Default)]
pub struct TaskSet {
    tasks: IndexMap<TaskTitle, Task>,
}

impl TaskSet {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.tasks.contains_key(title)
    }

    pub fn get(&self, title: &str) -> Option<&Task> {
        self.tasks.get(title)
    }

    /// Tasks in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Titles in input order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(|s| s.as_str())
    }

    /// Callers check for duplicates first; a repeated title replaces the
    /// task but keeps its original position.
    pub(crate) fn insert(&mut self, task: Task) {
        self.tasks.insert(task.title.clone(), task);
    }
}
