//! Marketing tier labels derived from a free-text resolution.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static PIXEL_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{3,4}").expect("static pixel-count regex"));

/// Coarse resolution tier shown in screen full names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionLabel {
    #[serde(rename = "FHD")]
    Fhd,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "2.5K")]
    TwoPointFiveK,
    #[serde(rename = "3K")]
    ThreeK,
    #[serde(rename = "4K")]
    FourK,
    #[serde(rename = "8K")]
    EightK,
}

impl ResolutionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionLabel::Fhd => "FHD",
            ResolutionLabel::TwoK => "2K",
            ResolutionLabel::TwoPointFiveK => "2.5K",
            ResolutionLabel::ThreeK => "3K",
            ResolutionLabel::FourK => "4K",
            ResolutionLabel::EightK => "8K",
        }
    }

    /// Bucket a horizontal pixel count. Lower bounds are exclusive except for FHD.
    pub fn from_horizontal_pixels(h: u32) -> Option<Self> {
        match h {
            1800..=2000 => Some(ResolutionLabel::Fhd),
            2001..=2600 => Some(ResolutionLabel::TwoK),
            2601..=2900 => Some(ResolutionLabel::TwoPointFiveK),
            2901..=3400 => Some(ResolutionLabel::ThreeK),
            3401..=4500 => Some(ResolutionLabel::FourK),
            7001..=8500 => Some(ResolutionLabel::EightK),
            _ => None,
        }
    }
}

impl fmt::Display for ResolutionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map text such as `1920x1080` or `3840 x 2160 pixels` to a tier label.
///
/// Only the first run of 3-4 digits is considered, so the horizontal count must
/// come first. Values in the gaps between tiers (e.g. 5000) yield `None`.
pub fn map_resolution(text: Option<&str>) -> Option<ResolutionLabel> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    let digits = PIXEL_COUNT.find(text)?;
    let h: u32 = digits.as_str().parse().ok()?;
    ResolutionLabel::from_horizontal_pixels(h)
}
