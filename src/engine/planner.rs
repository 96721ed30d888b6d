// src/engine/planner.rs

//! Pure planning pipeline.
//!
//! `Planner` runs normalizer -> graph builder -> scheduler and, when the
//! scheduler stalls, the cycle diagnoser. Every call allocates and owns its
//! own task set and graph; nothing survives between calls.

use serde_json::Value;
use tracing::{debug, info};

use crate::dag::{DependencyGraph, Scheduler, cycle};
use crate::engine::payload::extract_records;
use crate::engine::{Schedule, ScheduleOptions};
use crate::errors::ScheduleError;
use crate::task::{TaskSet, normalize_tasks};

#[derive(Debug, Clone, Default)]
pub struct Planner {
    options: ScheduleOptions,
}

impl Planner {
    pub fn new(options: ScheduleOptions) -> Self {
        Self { options }
    }

    /// Order a request payload (`{"tasks": [...]}` or a bare array).
    pub fn plan_payload(&self, payload: &Value) -> Result<Schedule, ScheduleError> {
        let records = extract_records(payload)?;
        self.plan(records)
    }

    /// Order raw task records.
    ///
    /// Either every task is placed, or an error is returned; partial orders
    /// are never handed out.
    pub fn plan(&self, records: &[Value]) -> Result<Schedule, ScheduleError> {
        let tasks = self.validate(records)?;
        let graph = DependencyGraph::build(&tasks)?;

        let drained = Scheduler::new(self.options.title_order).drain(&tasks, graph);
        if !drained.is_complete() {
            return Err(cycle::diagnose(
                &tasks,
                &drained.residual_in_degree,
                self.options.cycle_witness,
            ));
        }

        info!(tasks = drained.order.len(), "planned execution order");
        Ok(Schedule {
            recommended_order: drained.order,
        })
    }

    /// Normalize records and check that the dependency graph is well formed,
    /// without ordering anything.
    pub fn inspect(&self, records: &[Value]) -> Result<(TaskSet, DependencyGraph), ScheduleError> {
        let tasks = self.validate(records)?;
        let graph = DependencyGraph::build(&tasks)?;
        Ok((tasks, graph))
    }

    fn validate(&self, records: &[Value]) -> Result<TaskSet, ScheduleError> {
        if let Some(limit) = self.options.max_tasks {
            if records.len() > limit {
                return Err(ScheduleError::TooManyTasks {
                    count: records.len(),
                    limit,
                });
            }
        }

        debug!(records = records.len(), "normalizing task records");
        normalize_tasks(records)
    }
}
