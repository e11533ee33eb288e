use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{self, DocumentResult};

/// Default refresh rate; screens at or below it do not mention their rate.
pub const DEFAULT_REFRESH_BASELINE_HZ: f64 = 60.0;

/// Capacities from this many GB upward are shown in TB.
pub const DEFAULT_TERABYTE_THRESHOLD_GB: f64 = 1024.0;

/// Serializable formatter configuration.
///
/// Usually left at its defaults; a catalog can override it through a JSON or
/// YAML file (see `specname init-config`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Refresh rates strictly above this are shown (`120Hz`).
    pub refresh_baseline_hz: f64,
    /// Storage capacities at or above this are converted to TB.
    pub terabyte_threshold_gb: f64,
    /// Use the extended processor name (cores, clock, cache) in spec sheets.
    pub processor_details: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            refresh_baseline_hz: DEFAULT_REFRESH_BASELINE_HZ,
            terabyte_threshold_gb: DEFAULT_TERABYTE_THRESHOLD_GB,
            processor_details: false,
        }
    }
}

impl FormatOptions {
    /// Load options from a JSON/YAML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> DocumentResult<Self> {
        document::load_document(path)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> DocumentResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn with_processor_details(mut self, enabled: bool) -> Self {
        self.processor_details = enabled;
        self
    }
}
