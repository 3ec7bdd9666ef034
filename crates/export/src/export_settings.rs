//! Where exports are written.

use std::path::PathBuf;

use bevy::prelude::*;

/// Environment variable overriding the export directory.
pub const EXPORT_DIR_ENV: &str = "RESILIENCE_EXPORT_DIR";

pub const DEFAULT_EXPORT_DIR: &str = "exports";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}

impl ExportSettings {
    /// Settings from `RESILIENCE_EXPORT_DIR`, falling back to `./exports`.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(EXPORT_DIR_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(dir) if !dir.trim().is_empty() => Self {
                output_dir: PathBuf::from(dir.trim()),
            },
            _ => Self::default(),
        }
    }
}
