use crate::model::GpuSpec;
use crate::parse::{display_number, present};
use crate::text::{clean_join, redundant_in};

fn memory_token(spec: &GpuSpec) -> Option<String> {
    present(spec.memory_gb).map(|gb| format!("{}GB", display_number(gb)))
}

/// `[brand] [model] [N GB] [memory type]`, or `""` when the laptop has no discrete GPU.
///
/// `has_discrete` is authoritative: a stale brand/model left in the form does
/// not produce a name once the flag is cleared.
pub fn format_discrete_gpu(spec: &GpuSpec) -> String {
    if !spec.has_discrete {
        return String::new();
    }

    let model = spec.model.as_deref();
    let brand = spec.brand.as_deref().filter(|b| !redundant_in(Some(*b), model));

    clean_join([
        brand.map(str::to_string),
        model.map(str::to_string),
        memory_token(spec),
        spec.memory_type.clone(),
    ])
}

/// `[brand] [model] [family] [N GB]` for the integrated part; always computed.
///
/// Brand and family are dropped when the model already spells them out. The
/// family is also dropped when it merely repeats the brand (`Intel` / `Intel`).
pub fn format_integrated_gpu(spec: &GpuSpec) -> String {
    let model = spec.model.as_deref();
    let brand = spec.brand.as_deref().filter(|b| !redundant_in(Some(*b), model));
    let family = spec.family.as_deref().filter(|f| {
        !redundant_in(Some(*f), model) && !redundant_in(Some(*f), spec.brand.as_deref())
    });

    clean_join([
        brand.map(str::to_string),
        model.map(str::to_string),
        family.map(str::to_string),
        memory_token(spec),
    ])
}
