use crate::config::FormatOptions;
use crate::model::StorageSpec;
use crate::parse::{display_number, present};
use crate::text::clean_join;

/// Storage name with the default 1024 GB terabyte threshold.
pub fn format_storage(spec: &StorageSpec) -> String {
    format_storage_with(spec, &FormatOptions::default())
}

/// `[capacity] [media] [NVMe] [form factor]`.
pub fn format_storage_with(spec: &StorageSpec, options: &FormatOptions) -> String {
    let capacity = present(spec.capacity_gb).map(|gb| format_capacity(gb, options));
    let nvme = spec.is_nvme.then(|| "NVMe".to_string());

    clean_join([capacity, spec.media.clone(), nvme, spec.form_factor.clone()])
}

/// `512GB`, or `1TB` / `1.5TB` once the threshold is reached.
///
/// TB values are rendered with one decimal and a trailing `.0` is dropped, so
/// 10240 GB is `10TB` (never `1TB` from a careless `.0` strip).
pub fn format_capacity(capacity_gb: f64, options: &FormatOptions) -> String {
    if capacity_gb >= options.terabyte_threshold_gb {
        let tb = format!("{:.1}", capacity_gb / 1024.0);
        let tb = tb.strip_suffix(".0").unwrap_or(&tb);
        format!("{tb}TB")
    } else {
        format!("{}GB", display_number(capacity_gb))
    }
}
