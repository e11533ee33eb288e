use anyhow::Result;
use specname_core::map_resolution;

/// Print the tier label for a resolution string, or `(none)`.
pub fn resolution_command(text: &str) -> Result<()> {
    match map_resolution(Some(text)) {
        Some(label) => println!("{}", label),
        None => println!("(none)"),
    }
    Ok(())
}
