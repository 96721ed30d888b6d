// src/dag/scheduler.rs

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::dag::graph::DependencyGraph;
use crate::dag::sort_key::SortKey;
use crate::task::{TaskSet, TaskTitle};
use crate::types::TitleOrder;

/// Result of draining a dependency graph.
///
/// `residual_in_degree` is what the in-degree map looked like when the ready
/// set ran dry; any entry above zero marks a task that was never scheduled.
#[derive(Debug, Clone)]
pub struct Drained {
    pub order: Vec<TaskTitle>,
    pub residual_in_degree: IndexMap<TaskTitle, usize>,
}

impl Drained {
    /// Whether every task made it into `order`.
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.residual_in_degree.len()
    }
}

/// Priority-driven Kahn's algorithm.
///
/// The ready set is a min-heap on [`SortKey`]: earliest due date first
/// (no deadline last), then fewest estimated hours, then title under the
/// configured [`TitleOrder`]. Since titles are unique the pick is always
/// unambiguous, which makes the order a pure function of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    title_order: TitleOrder,
}

impl Scheduler {
    pub fn new(title_order: TitleOrder) -> Self {
        Self { title_order }
    }

    /// Consume the graph and place as many tasks as possible.
    ///
    /// Never fails: a short `order` is the caller's signal that a cycle
    /// blocked part of the graph.
    pub fn drain(&self, tasks: &TaskSet, graph: DependencyGraph) -> Drained {
        let (successors, mut in_degree) = graph.into_parts();

        let mut ready: BinaryHeap<Reverse<SortKey>> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .filter_map(|(title, _)| tasks.get(title))
            .map(|task| Reverse(SortKey::for_task(task, self.title_order)))
            .collect();

        debug!(ready = ready.len(), "scheduler: initial ready set");

        let mut order: Vec<TaskTitle> = Vec::with_capacity(in_degree.len());

        while let Some(Reverse(next)) = ready.pop() {
            let title = next.title().to_string();
            trace!(task = %title, position = order.len(), "scheduler: placing task");

            for dependent in successors.get(&title).into_iter().flatten() {
                let Some(degree) = in_degree.get_mut(dependent) else {
                    continue;
                };
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    if let Some(task) = tasks.get(dependent) {
                        ready.push(Reverse(SortKey::for_task(task, self.title_order)));
                    }
                }
            }

            order.push(title);
        }

        debug!(
            placed = order.len(),
            total = in_degree.len(),
            "scheduler: ready set exhausted"
        );

        Drained {
            order,
            residual_in_degree: in_degree,
        }
    }
}
