#![allow(dead_code)]

use serde_json::{Map, Value, json};
use taskplan::errors::ScheduleError;
use taskplan::{Planner, Schedule, ScheduleOptions};

/// Builder for a request payload (`{"tasks": [...]}`).
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder {
    tasks: Vec<Value>,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, task: TaskRecordBuilder) -> Self {
        self.tasks.push(task.build());
        self
    }

    /// Append an arbitrary (possibly malformed) record.
    pub fn with_raw(mut self, record: Value) -> Self {
        self.tasks.push(record);
        self
    }

    pub fn records(&self) -> Vec<Value> {
        self.tasks.clone()
    }

    pub fn build(self) -> Value {
        json!({ "tasks": self.tasks })
    }

    pub fn plan(&self) -> Result<Schedule, ScheduleError> {
        self.plan_with(ScheduleOptions::default())
    }

    pub fn plan_with(&self, options: ScheduleOptions) -> Result<Schedule, ScheduleError> {
        Planner::new(options).plan(&self.tasks)
    }
}

/// Builder for a single raw task record.
#[derive(Debug, Clone)]
pub struct TaskRecordBuilder {
    fields: Map<String, Value>,
}

impl TaskRecordBuilder {
    pub fn new(title: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::String(title.to_string()));
        Self { fields }
    }

    pub fn after(mut self, dep: &str) -> Self {
        let deps = self
            .fields
            .entry("dependencies")
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = deps {
            items.push(Value::String(dep.to_string()));
        }
        self
    }

    pub fn due(mut self, date: &str) -> Self {
        self.fields
            .insert("dueDate".to_string(), Value::String(date.to_string()));
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.fields.insert("estimatedHours".to_string(), json!(hours));
        self
    }

    /// Set any field to any JSON value, e.g. a bogus `estimatedHours`.
    pub fn field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
