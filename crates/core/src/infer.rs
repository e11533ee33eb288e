//! Heuristics for filling gaps in product-feed data.
//!
//! Feeds frequently omit the processor generation or the discrete GPU brand
//! even though both can be read off the model string.

use std::sync::LazyLock;

use regex::Regex;

/// Brands recognised inside a discrete GPU model string, in priority order.
pub const DISCRETE_GPU_BRANDS: &[&str] =
    &["NVIDIA", "GeForce", "RTX", "GTX", "Quadro", "AMD", "Radeon", "RX", "FirePro"];

/// Model values feeds use to say "there is no discrete GPU".
const PLACEHOLDER_GPU_MODELS: &[&str] = &["no", "none", "not available", "no disponible"];

static INTEL_FIVE_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2})[0-9]{3}").expect("static intel regex"));
static INTEL_FOUR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([2-9])[0-9]{3}").expect("static intel regex"));
static INTEL_FIRST_GEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{2}$").expect("static intel regex"));
static RYZEN_SERIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])[0-9]{3}").expect("static ryzen regex"));

/// Guess a generation label such as `12th Gen`, `Ryzen 7000 Series` or
/// `Apple M2 Chip` from the manufacturer, family and model.
pub fn infer_processor_generation(
    manufacturer: Option<&str>,
    family: Option<&str>,
    model: Option<&str>,
) -> Option<String> {
    let model = model.map(str::trim).filter(|m| !m.is_empty())?.to_uppercase();
    let manufacturer = manufacturer.unwrap_or_default().to_lowercase();
    let family = family.unwrap_or_default().to_lowercase();

    if manufacturer.contains("intel") || family.contains("intel") {
        if family.contains("ultra") {
            return Some("Core Ultra Series 1".to_string());
        }
        if let Some(caps) = INTEL_FIVE_DIGIT.captures(&model) {
            return Some(format!("{}th Gen", &caps[1]));
        }
        if let Some(caps) = INTEL_FOUR_DIGIT.captures(&model) {
            return Some(format!("{}th Gen", &caps[1]));
        }
        if INTEL_FIRST_GEN.is_match(&model) {
            return Some("1st Gen".to_string());
        }
    }

    if manufacturer.contains("amd") || family.contains("ryzen") {
        if let Some(caps) = RYZEN_SERIES.captures(&model) {
            return Some(format!("Ryzen {}000 Series", &caps[1]));
        }
    }

    if manufacturer.contains("apple") || family.contains("apple") {
        for chip in ["M1", "M2", "M3"] {
            if model.contains(chip) {
                return Some(format!("Apple {chip} Chip"));
            }
        }
    }

    None
}

/// First known discrete GPU brand mentioned in `model`.
pub fn infer_gpu_brand(model: &str) -> Option<&'static str> {
    let upper = model.to_uppercase();
    DISCRETE_GPU_BRANDS.iter().copied().find(|brand| upper.contains(&brand.to_uppercase()))
}

/// True for model strings that only say the GPU is missing (`None`, `No disponible`).
pub fn is_placeholder_gpu_model(model: &str) -> bool {
    let lower = model.trim().to_lowercase();
    PLACEHOLDER_GPU_MODELS.contains(&lower.as_str())
}
