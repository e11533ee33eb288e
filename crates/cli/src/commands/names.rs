use anyhow::{Context, Result};
use specname_core::sheet::{parse_sheets, FullNames, SpecSheet};
use specname_core::FormatOptions;
use tracing::info;

use crate::commands::{display_or_none, read_input, resolve_format};

/// Load one or many spec sheets from a file (or `-` for stdin).
pub fn load_sheets_from(source: &str, format: Option<&str>) -> Result<Vec<SpecSheet>> {
    let format = resolve_format(source, format)?;
    let body = read_input(source)?;
    parse_sheets(&body, format)
        .with_context(|| format!("Failed to parse spec sheets from {}", source))
}

/// Derive full names for every sheet, optionally enriching feed data first.
pub fn derive_full_names(
    sheets: Vec<SpecSheet>,
    options: &FormatOptions,
    enrich: bool,
) -> Vec<FullNames> {
    sheets
        .into_iter()
        .map(|sheet| if enrich { sheet.enrich() } else { sheet })
        .map(|sheet| sheet.full_names(options))
        .collect()
}

/// Human-readable listing, one block per sheet.
pub fn render_full_names_text(names: &[FullNames]) -> String {
    let mut out = String::new();
    for (idx, sheet) in names.iter().enumerate() {
        match &sheet.sku {
            Some(sku) => out.push_str(&format!("Sheet {} ({}):\n", idx + 1, sku)),
            None => out.push_str(&format!("Sheet {}:\n", idx + 1)),
        }
        for (label, value) in sheet.entries() {
            out.push_str(&format!("  {label}: {}\n", display_or_none(value)));
        }
    }
    if names.is_empty() {
        out.push_str("Sheets: (none)\n");
    }
    out
}

/// Print the full names of every sheet found in `source`.
pub fn names_command(
    source: &str,
    format: Option<&str>,
    json: bool,
    enrich: bool,
    options: &FormatOptions,
) -> Result<()> {
    let sheets = load_sheets_from(source, format)?;
    info!(source, count = sheets.len(), enrich, "deriving full names");
    let names = derive_full_names(sheets, options, enrich);

    if json {
        let serialized =
            serde_json::to_string_pretty(&names).context("Failed to serialize full names to JSON")?;
        println!("{}", serialized);
    } else {
        print!("{}", render_full_names_text(&names));
    }

    Ok(())
}
