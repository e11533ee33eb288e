use crate::model::ProcessorSpec;
use crate::parse::{display_number, present};
use crate::text::{clean_join, redundant_in};

/// `[generation] [family] [model]`.
///
/// Vendors often repeat the family inside the generation (`Intel Core i7` /
/// `Intel`), so the family is dropped when the generation already contains it.
pub fn format_processor(spec: &ProcessorSpec) -> String {
    let generation = spec.generation.as_deref();
    let family = spec.family.as_deref().filter(|f| !redundant_in(Some(*f), generation));

    clean_join([generation, family, spec.model.as_deref()])
}

/// Base name followed by `(N-Core, up to F GHz, C Cache)` when any detail is known.
pub fn format_processor_extended(spec: &ProcessorSpec) -> String {
    let base = format_processor(spec);

    let mut details = Vec::new();
    if let Some(cores) = present(spec.cores) {
        details.push(format!("{}-Core", display_number(cores)));
    }
    if let Some(ghz) = present(spec.frequency_ghz) {
        details.push(format!("up to {} GHz", display_number(ghz)));
    }
    if let Some(cache) = spec.cache.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        details.push(format!("{cache} Cache"));
    }

    if details.is_empty() {
        return base;
    }
    clean_join([Some(base), Some(format!("({})", details.join(", ")))])
}
