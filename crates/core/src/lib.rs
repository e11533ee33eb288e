//! specname-core
//!
//! Derives the human-readable "full name" of laptop components (processor,
//! screen, GPU, storage, RAM) from their structured attributes.
//!
//! The formatters are pure: the catalog UI reads its form fields, calls the
//! matching formatter and writes the result back into the full-name field.
//! Loading sheets and configuration from disk is kept in separate modules so
//! the naming rules stay free of I/O.

pub mod config;
pub mod document;
pub mod formatters;
pub mod infer;
pub mod model;
pub mod parse;
pub mod resolution;
pub mod sheet;
pub mod text;

pub use config::FormatOptions;
pub use formatters::{
    format_discrete_gpu, format_integrated_gpu, format_processor, format_processor_extended,
    format_ram, format_screen, format_storage, FullName,
};
pub use model::{GpuSpec, ProcessorSpec, RamSpec, ScreenSpec, StorageSpec};
pub use resolution::{map_resolution, ResolutionLabel};
pub use sheet::{FullNames, SpecSheet};
pub use text::clean_join;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
