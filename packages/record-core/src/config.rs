//! Options for building record types.
//!
//! Supports JSON config documents, environment variable overrides, and
//! defaults.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};

/// Environment variable that enables renaming of invalid field names.
pub const RENAME_ENV_VAR: &str = "RECORD_RENAME";

/// Options controlling how field names are normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Replace invalid or repeated field names with `_<position>` instead of
    /// failing (default: false)
    pub rename: bool,
}

impl BuildOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| RecordError::Config(format!("Invalid JSON: {}", e)))
    }

    /// Applies environment variable overrides.
    ///
    /// `RECORD_RENAME` accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = env::var(RENAME_ENV_VAR) {
            self.rename = parse_flag(&val).ok_or_else(|| {
                RecordError::Config(format!("Invalid {}: {}", RENAME_ENV_VAR, val))
            })?;
        }
        Ok(())
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
