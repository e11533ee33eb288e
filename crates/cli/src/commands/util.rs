use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use specname_core::document::DocumentFormat;
use specname_core::FormatOptions;

/// Read a document body from a path, or from stdin when `source` is `-`.
pub fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body).context("Failed to read from stdin")?;
        return Ok(body);
    }
    fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
}

/// Resolve the document format: an explicit `--format` wins, then the file
/// extension. Stdin without `--format` is treated as JSON.
pub fn resolve_format(source: &str, explicit: Option<&str>) -> Result<DocumentFormat> {
    if let Some(name) = explicit {
        return DocumentFormat::from_name(name).context("Invalid --format");
    }
    if source == "-" {
        return Ok(DocumentFormat::Json);
    }
    DocumentFormat::from_path(Path::new(source))
        .with_context(|| format!("Cannot infer document format of {}", source))
}

/// Load formatter options from `--config`, or defaults when not given.
pub fn load_options(config: Option<&Path>) -> Result<FormatOptions> {
    FormatOptions::load_or_default(config).with_context(|| match config {
        Some(path) => format!("Failed to load config {}", path.display()),
        None => "Failed to build default config".to_string(),
    })
}

/// Placeholder shown for components that produced no name.
pub fn display_or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}
