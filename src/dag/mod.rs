// src/dag/mod.rs

//! Dependency graph and ordering.
//!
//! - [`graph`] builds the adjacency / in-degree maps for one call.
//! - [`sort_key`] defines the priority used to pick among ready tasks.
//! - [`scheduler`] drains the graph with a priority-driven Kahn's algorithm.
//! - [`cycle`] explains what is left when the graph cannot be drained.

pub mod cycle;
pub mod graph;
pub mod scheduler;
pub mod sort_key;

pub use graph::DependencyGraph;
pub use scheduler::{Drained, Scheduler};
pub use sort_key::{CollationKey, SortKey};
