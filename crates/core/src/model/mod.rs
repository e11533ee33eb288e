//! Component spec records fed to the formatters.
//!
//! These are plain attribute bags: no identity, no persistence. Field names
//! match the catalog form (snake_case). Deserialization is lenient so a value
//! typed into the wrong kind of field degrades to "absent" rather than
//! rejecting the whole record.

use serde::{Deserialize, Serialize};

pub(crate) mod lenient;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorSpec {
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub generation: Option<String>,
    /// Required for a meaningful name; an empty model just yields a sparse one.
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub cores: Option<f64>,
    /// Turbo frequency when known, otherwise base.
    #[serde(deserialize_with = "lenient::frequency_ghz", skip_serializing_if = "Option::is_none")]
    pub frequency_ghz: Option<f64>,
    /// Free text, e.g. `24MB`.
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSpec {
    #[serde(deserialize_with = "lenient::screen_size", skip_serializing_if = "Option::is_none")]
    pub diagonal_inches: Option<f64>,
    /// Free text carrying the horizontal pixel count first, e.g. `1920x1080`.
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub hd_type: Option<String>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub panel_type: Option<String>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub refresh_rate_hz: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_touch: bool,
}

/// Shared shape for discrete and integrated graphics.
///
/// `family` only matters for integrated parts, `memory_type` and
/// `has_discrete` only for discrete ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuSpec {
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(deserialize_with = "lenient::capacity_gb", skip_serializing_if = "Option::is_none")]
    pub memory_gb: Option<f64>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_discrete: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSpec {
    #[serde(deserialize_with = "lenient::capacity_gb", skip_serializing_if = "Option::is_none")]
    pub capacity_gb: Option<f64>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_nvme: bool,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RamSpec {
    #[serde(deserialize_with = "lenient::capacity_gb", skip_serializing_if = "Option::is_none")]
    pub capacity_gb: Option<f64>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub type_detailed: Option<String>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub speed_mhz: Option<f64>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub transfer_rate: Option<String>,
}
