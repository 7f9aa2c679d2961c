// src/config.rs

use crate::decode::{grid::DEFAULT_MAX_CELLS, ColumnRoles};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use tracing::debug;

/// What to do with a data row that has more than three cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRowPolicy {
    /// Abort the whole decode with `Error::MalformedRow`.
    #[default]
    Abort,
    /// Drop the offending row and keep going.
    Skip,
}

/// Where y = 0 lands in the rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateOrigin {
    /// Row index equals y; y = 0 is the first line.
    #[default]
    TopLeft,
    /// Row index is `max_y - y`; y = 0 is the last line.
    BottomLeft,
}

/// Options for the decoding core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub fallback_roles: ColumnRoles,
    pub malformed_rows: MalformedRowPolicy,
    pub origin: CoordinateOrigin,
    /// Largest grid (`width * height`) a table may describe.
    pub max_cells: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            fallback_roles: ColumnRoles::default(),
            malformed_rows: MalformedRowPolicy::default(),
            origin: CoordinateOrigin::default(),
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// Options for the document fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 3,
            initial_backoff_ms: 500,
        }
    }
}

impl FetchOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub decode: DecodeOptions,
    pub fetch: FetchOptions,
}

impl Options {
    /// Load options from a YAML file; missing keys take their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("reading {}: {}", path.display(), e)))?;
        let opts = Self::from_yaml_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), ?opts, "loaded options");
        Ok(opts)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }
}
