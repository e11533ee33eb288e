use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use specname::commands::{
    format_command, init_config_command, join_command, load_options, names_command,
    resolution_command, show_config_command, ComponentKind,
};
use specname::init_tracing;

/// Full-name derivation for laptop component specs.
///
/// This CLI is a thin wrapper around `specname-core` (exposed in code as
/// `specname_core`). The naming rules live in the library so they can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "specname",
    version,
    about = "Derive display names for laptop component specs",
    long_about = None
)]
struct Cli {
    /// Formatter config file (JSON or YAML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full names of every component in one or more spec sheets.
    ///
    /// The sheet file may hold a single sheet object or a list of them.
    Names {
        /// Path to a .json/.yaml/.yml sheet file, or `-` for stdin.
        #[arg(long)]
        sheet: String,

        /// Override the format inferred from the file extension (json, yaml).
        #[arg(long)]
        format: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Clean up product-feed data first (trademarks, generation, GPU brand).
        #[arg(long, default_value_t = false)]
        enrich: bool,
    },

    /// Derive the full name of a single component from an inline JSON spec.
    Format {
        /// Which formatter to apply.
        #[arg(value_enum)]
        kind: ComponentKind,

        /// Component spec as a JSON object, e.g. '{"capacity_gb": 512, "media": "SSD"}'.
        spec: String,
    },

    /// Show the resolution tier label (FHD, 2K, ..., 8K) for a resolution string.
    Resolution {
        /// Free text such as `1920x1080`.
        text: String,
    },

    /// Join tokens the way full names are joined (empties dropped, adjacent repeats collapsed).
    Join {
        tokens: Vec<String>,
    },

    /// Write a default formatter config file.
    InitConfig {
        /// Destination path; the extension picks JSON or YAML.
        #[arg(long, default_value = "specname.json")]
        path: String,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print the effective formatter config.
    ShowConfig {
        /// Emit JSON instead of YAML.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Names { sheet, format, json, enrich } => {
            let options = load_options(cli.config.as_deref())?;
            names_command(&sheet, format.as_deref(), json, enrich, &options)?
        }
        Command::Format { kind, spec } => {
            let options = load_options(cli.config.as_deref())?;
            format_command(kind, &spec, &options)?
        }
        Command::Resolution { text } => resolution_command(&text)?,
        Command::Join { tokens } => join_command(&tokens)?,
        Command::InitConfig { path, force } => init_config_command(&path, force)?,
        Command::ShowConfig { json } => {
            let options = load_options(cli.config.as_deref())?;
            show_config_command(&options, json)?
        }
    }

    Ok(())
}
