use crate::config::FormatOptions;
use crate::model::ScreenSpec;
use crate::parse::{display_number, present};
use crate::resolution::map_resolution;
use crate::text::{clean_join, eq_ignore_case};

/// Screen name with the default 60 Hz refresh baseline.
pub fn format_screen(spec: &ScreenSpec) -> String {
    format_screen_with(spec, &FormatOptions::default())
}

/// `[size"] [tier] [hd type] [panel] [rate Hz] [Touch]`.
///
/// The HD type is skipped when it repeats the tier (`FHD FHD`), `-Level` is
/// removed from panel names (`IPS-Level` -> `IPS`), and the refresh rate only
/// shows above the configured baseline.
pub fn format_screen_with(spec: &ScreenSpec, options: &FormatOptions) -> String {
    let size = present(spec.diagonal_inches).map(|d| format!("{}\"", display_number(d)));
    let label = map_resolution(spec.resolution.as_deref());
    let hd_type = spec
        .hd_type
        .as_deref()
        .filter(|hd| label.map_or(true, |l| !eq_ignore_case(hd.trim(), l.as_str())));
    let panel = spec.panel_type.as_deref().map(|p| p.replace("-Level", ""));
    let refresh = present(spec.refresh_rate_hz)
        .filter(|hz| *hz > options.refresh_baseline_hz)
        .map(|hz| format!("{}Hz", display_number(hz)));
    let touch = spec.is_touch.then(|| "Touch".to_string());

    clean_join([
        size,
        label.map(|l| l.as_str().to_string()),
        hd_type.map(str::to_string),
        panel,
        refresh,
        touch,
    ])
}
