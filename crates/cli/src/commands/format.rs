use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use specname_core::formatters::{
    format_discrete_gpu, format_integrated_gpu, format_processor, format_processor_extended,
    FullName,
};
use specname_core::{FormatOptions, GpuSpec, ProcessorSpec, RamSpec, ScreenSpec, StorageSpec};

/// Component kinds accepted by `specname format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComponentKind {
    Processor,
    ProcessorExtended,
    Screen,
    DiscreteGpu,
    IntegratedGpu,
    Storage,
    Ram,
}

fn parse_spec<T: DeserializeOwned>(kind: ComponentKind, spec_json: &str) -> Result<T> {
    serde_json::from_str(spec_json)
        .with_context(|| format!("Failed to parse {:?} spec JSON", kind))
}

/// Derive the full name of a single component from an inline JSON object.
pub fn format_component(
    kind: ComponentKind,
    spec_json: &str,
    options: &FormatOptions,
) -> Result<String> {
    let name = match kind {
        ComponentKind::Processor => format_processor(&parse_spec::<ProcessorSpec>(kind, spec_json)?),
        ComponentKind::ProcessorExtended => {
            format_processor_extended(&parse_spec::<ProcessorSpec>(kind, spec_json)?)
        }
        ComponentKind::Screen => parse_spec::<ScreenSpec>(kind, spec_json)?.full_name(options),
        ComponentKind::DiscreteGpu => format_discrete_gpu(&parse_spec::<GpuSpec>(kind, spec_json)?),
        ComponentKind::IntegratedGpu => {
            format_integrated_gpu(&parse_spec::<GpuSpec>(kind, spec_json)?)
        }
        ComponentKind::Storage => parse_spec::<StorageSpec>(kind, spec_json)?.full_name(options),
        ComponentKind::Ram => parse_spec::<RamSpec>(kind, spec_json)?.full_name(options),
    };
    Ok(name)
}

/// Print the full name of one component. An empty name prints an empty line.
pub fn format_command(kind: ComponentKind, spec_json: &str, options: &FormatOptions) -> Result<()> {
    println!("{}", format_component(kind, spec_json, options)?);
    Ok(())
}
