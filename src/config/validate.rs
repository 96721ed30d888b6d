// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskplanError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::TaskplanError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.schedule, raw.output, raw.limits))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_limits(cfg)?;
    Ok(())
}

fn validate_limits(cfg: &RawConfigFile) -> Result<()> {
    // title_order and format are strongly typed and validated during
    // deserialization, so only numeric bounds are left to check.
    if cfg.limits.max_tasks == Some(0) {
        return Err(TaskplanError::ConfigError(
            "[limits].max_tasks must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}
