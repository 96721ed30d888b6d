// src/config/mod.rs

//! Configuration loading and validation for taskplan.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate numeric bounds (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_or_default};
pub use model::{ConfigFile, LimitsSection, OutputSection, RawConfigFile, ScheduleSection};
