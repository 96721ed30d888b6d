// src/engine/mod.rs

//! Ordering engine entry points.
//!
//! This module ties together:
//! - payload extraction (`{"tasks": [...]}` or a bare array)
//! - task normalization
//! - graph construction
//! - scheduling, and cycle diagnosis when scheduling stalls
//!
//! Everything here is synchronous and free of IO. The planner in [`planner`]
//! holds only immutable options, so one instance can serve many threads.

use serde::Serialize;

use crate::task::TaskTitle;
use crate::types::TitleOrder;

/// Options shared by every call made through one [`Planner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduleOptions {
    /// Tie-break on title after due date and effort.
    pub title_order: TitleOrder,
    /// Attach a concrete loop to `Cycle` errors.
    pub cycle_witness: bool,
    /// Reject payloads with more tasks than this.
    pub max_tasks: Option<usize>,
}

/// A complete, valid execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    #[serde(rename = "recommendedOrder")]
    pub recommended_order: Vec<TaskTitle>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.recommended_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommended_order.is_empty()
    }

    /// 0-based position of `title` in the order.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.recommended_order.iter().position(|t| t == title)
    }
}

pub mod planner;
pub mod payload;

pub use self::planner::Planner;
pub use self::payload::extract_records;
