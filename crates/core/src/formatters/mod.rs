//! Full-name formatters, one module per component kind.
//!
//! Every formatter is a pure function of its spec (plus options where a
//! threshold is configurable): it builds an ordered token list and hands it to
//! [`crate::text::clean_join`]. Nothing here fails or logs.

pub mod gpu;
pub mod processor;
pub mod ram;
pub mod screen;
pub mod storage;

pub use gpu::{format_discrete_gpu, format_integrated_gpu};
pub use processor::{format_processor, format_processor_extended};
pub use ram::format_ram;
pub use screen::{format_screen, format_screen_with};
pub use storage::{format_capacity, format_storage, format_storage_with};

use crate::config::FormatOptions;
use crate::model::{ProcessorSpec, RamSpec, ScreenSpec, StorageSpec};

/// Implemented by component records that have a single canonical full name.
///
/// GPUs are not included: the same [`crate::model::GpuSpec`] shape is named
/// differently depending on whether it describes the discrete or the
/// integrated part, so callers pick the formatter explicitly.
pub trait FullName {
    fn full_name(&self, options: &FormatOptions) -> String;
}

impl FullName for ProcessorSpec {
    fn full_name(&self, options: &FormatOptions) -> String {
        if options.processor_details {
            format_processor_extended(self)
        } else {
            format_processor(self)
        }
    }
}

impl FullName for ScreenSpec {
    fn full_name(&self, options: &FormatOptions) -> String {
        format_screen_with(self, options)
    }
}

impl FullName for StorageSpec {
    fn full_name(&self, options: &FormatOptions) -> String {
        format_storage_with(self, options)
    }
}

impl FullName for RamSpec {
    fn full_name(&self, _options: &FormatOptions) -> String {
        format_ram(self)
    }
}
