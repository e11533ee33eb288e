use std::path::Path;

use anyhow::{anyhow, Context, Result};
use specname_core::document::{render_document, write_document, DocumentFormat};
use specname_core::FormatOptions;

/// Write a default formatter config to `path` (JSON or YAML by extension).
pub fn init_config_command(path: &str, force: bool) -> Result<()> {
    let path = Path::new(path);
    if path.exists() && !force {
        return Err(anyhow!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }

    let options = FormatOptions::default();
    write_document(path, &options)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    println!("Wrote default config:");
    println!("  Path: {}", path.display());
    println!("  Refresh baseline: {} Hz", options.refresh_baseline_hz);
    println!("  Terabyte threshold: {} GB", options.terabyte_threshold_gb);
    println!("  Processor details: {}", options.processor_details);

    Ok(())
}

/// Print the effective configuration (defaults merged with `--config`).
pub fn show_config_command(options: &FormatOptions, json: bool) -> Result<()> {
    let format = if json { DocumentFormat::Json } else { DocumentFormat::Yaml };
    let rendered = render_document(options, format).context("Failed to render config")?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
