// src/dag/graph.rs

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::ScheduleError;
use crate::task::{TaskSet, TaskTitle};

/// Per-call dependency graph: successors plus remaining in-degree.
///
/// Edge direction is dependency -> dependent. For
/// `{"title": "B", "dependencies": ["A"]}` we add `A -> B` and B's in-degree
/// becomes 1. Both maps cover every task, in task input order.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    successors: IndexMap<TaskTitle, Vec<TaskTitle>>,
    in_degree: IndexMap<TaskTitle, usize>,
}

impl DependencyGraph {
    /// Build the graph, failing on the first dependency that names a task
    /// outside the set.
    ///
    /// Self-dependencies and repeated entries are plain edges here; the
    /// former surface later as a cycle.
    pub fn build(tasks: &TaskSet) -> Result<Self, ScheduleError> {
        let mut successors: IndexMap<TaskTitle, Vec<TaskTitle>> = IndexMap::with_capacity(tasks.len());
        let mut in_degree: IndexMap<TaskTitle, usize> = IndexMap::with_capacity(tasks.len());

        for title in tasks.titles() {
            successors.insert(title.to_string(), Vec::new());
            in_degree.insert(title.to_string(), 0);
        }

        let mut edges = 0usize;
        for task in tasks.iter() {
            for dep in task.dependencies.iter() {
                let Some(dependents) = successors.get_mut(dep) else {
                    return Err(ScheduleError::UnknownDependency {
                        task: task.title.clone(),
                        dependency: dep.clone(),
                    });
                };
                dependents.push(task.title.clone());
                if let Some(degree) = in_degree.get_mut(&task.title) {
                    *degree += 1;
                }
                edges += 1;
            }
        }

        debug!(tasks = tasks.len(), edges, "built dependency graph");
        Ok(Self {
            successors,
            in_degree,
        })
    }

    /// All task titles, in input order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.in_degree.keys().map(|s| s.as_str())
    }

    /// Direct dependents of a task, in the order the edges were added.
    pub fn dependents_of(&self, title: &str) -> &[TaskTitle] {
        self.successors
            .get(title)
            .map(|deps| deps.as_slice())
            .unwrap_or(&[])
    }

    /// Number of unsatisfied dependency edges pointing at `title`.
    pub fn in_degree_of(&self, title: &str) -> Option<usize> {
        self.in_degree.get(title).copied()
    }

    /// Tasks with no dependencies, in input order.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(title, _)| title.as_str())
    }

    pub fn edge_count(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (IndexMap<TaskTitle, Vec<TaskTitle>>, IndexMap<TaskTitle, usize>) {
        (self.successors, self.in_degree)
    }
}
