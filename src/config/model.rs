// src/config/model.rs

use serde::Deserialize;

use crate::engine::ScheduleOptions;
use crate::types::{OutputFormat, TitleOrder};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [schedule]
/// title_order = "locale"
/// cycle_witness = true
///
/// [output]
/// format = "json"
///
/// [limits]
/// max_tasks = 5000
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub schedule: ScheduleSection,

    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub limits: LimitsSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub schedule: ScheduleSection,
    pub output: OutputSection,
    pub limits: LimitsSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        schedule: ScheduleSection,
        output: OutputSection,
        limits: LimitsSection,
    ) -> Self {
        Self {
            schedule,
            output,
            limits,
        }
    }

    /// Engine options described by this config.
    pub fn schedule_options(&self) -> ScheduleOptions {
        ScheduleOptions {
            title_order: self.schedule.title_order,
            cycle_witness: self.schedule.cycle_witness,
            max_tasks: self.limits.max_tasks,
        }
    }
}

/// `[schedule]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleSection {
    /// `"locale"` (default) or `"ordinal"`.
    #[serde(default)]
    pub title_order: TitleOrder,

    /// Report one concrete loop alongside the blocked set on cycles.
    #[serde(default)]
    pub cycle_witness: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// `"text"` (default) or `"json"`.
    #[serde(default)]
    pub format: OutputFormat,
}

/// `[limits]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    /// Upper bound on tasks per payload; unlimited when absent.
    #[serde(default)]
    pub max_tasks: Option<usize>,
}
