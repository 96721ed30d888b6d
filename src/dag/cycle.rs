// src/dag/cycle.rs

//! Diagnosis for graphs the scheduler could not drain.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexMap;
use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::errors::ScheduleError;
use crate::task::{TaskSet, TaskTitle};

/// Every task whose in-degree never reached zero, in input order.
///
/// This covers the tasks on a cycle as well as everything downstream of one.
pub fn blocked_tasks(residual_in_degree: &IndexMap<TaskTitle, usize>) -> Vec<TaskTitle> {
    residual_in_degree
        .iter()
        .filter(|&(_, &degree)| degree > 0)
        .map(|(title, _)| title.clone())
        .collect()
}

/// Build the `Cycle` error for a partially drained graph.
pub fn diagnose(
    tasks: &TaskSet,
    residual_in_degree: &IndexMap<TaskTitle, usize>,
    with_witness: bool,
) -> ScheduleError {
    let blocked = blocked_tasks(residual_in_degree);
    let witness = if with_witness {
        find_cycle(tasks, &blocked)
    } else {
        None
    };

    warn!(?blocked, ?witness, "cycle detected; no order produced");
    ScheduleError::Cycle { blocked, witness }
}

/// Find one shortest dependency loop among `blocked`.
///
/// The loop is reported in "must come before" direction and closes on its
/// first task, e.g. `["A", "B", "A"]`. The start is the earliest blocked task
/// (input order) that sits on a cycle.
pub fn find_cycle(tasks: &TaskSet, blocked: &[TaskTitle]) -> Option<Vec<TaskTitle>> {
    let members: HashSet<&str> = blocked.iter().map(|s| s.as_str()).collect();

    // Edge direction: dependency -> dependent, restricted to blocked tasks.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for title in blocked {
        graph.add_node(title.as_str());
    }
    for title in blocked {
        let Some(task) = tasks.get(title) else {
            continue;
        };
        for dep in task.dependencies.iter() {
            if members.contains(dep.as_str()) {
                graph.add_edge(dep.as_str(), title.as_str(), ());
            }
        }
    }

    let mut component_of: HashMap<&str, usize> = HashMap::new();
    let components = tarjan_scc(&graph);
    for (idx, component) in components.iter().enumerate() {
        for &node in component {
            component_of.insert(node, idx);
        }
    }

    let start = blocked.iter().map(|s| s.as_str()).find(|&title| {
        component_of
            .get(title)
            .is_some_and(|&idx| components[idx].len() > 1 || graph.contains_edge(title, title))
    })?;
    if graph.contains_edge(start, start) {
        return Some(vec![start.to_string(), start.to_string()]);
    }

    let scc = component_of.get(start).copied()?;
    shortest_loop(&graph, start, |node| component_of.get(node) == Some(&scc))
}

/// Breadth-first search from `start` back to itself, staying inside the
/// nodes accepted by `keep`.
fn shortest_loop<'a>(
    graph: &DiGraphMap<&'a str, ()>,
    start: &'a str,
    keep: impl Fn(&str) -> bool,
) -> Option<Vec<TaskTitle>> {
    let mut parent: HashMap<&'a str, &'a str> = HashMap::new();
    let mut queue: VecDeque<&'a str> = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        for next in graph.neighbors(node) {
            if next == start {
                let mut chain = Vec::new();
                let mut cursor = node;
                while cursor != start {
                    chain.push(cursor);
                    cursor = parent.get(cursor).copied()?;
                }
                let mut path = Vec::with_capacity(chain.len() + 2);
                path.push(start.to_string());
                path.extend(chain.iter().rev().map(|s| s.to_string()));
                path.push(start.to_string());
                return Some(path);
            }
            if keep(next) && next != start && !parent.contains_key(next) {
                parent.insert(next, node);
                queue.push_back(next);
            }
        }
    }

    None
}
