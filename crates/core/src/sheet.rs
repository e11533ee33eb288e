//! Laptop spec sheets: one record per component plus the derived full names.
//!
//! A sheet is what the catalog form (or a product-data import) produces for a
//! single laptop. `full_names` is the functional core the UI calls whenever a
//! field changes; `enrich` is the clean-up applied to imported feed data
//! before naming.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::FormatOptions;
use crate::document::{self, DocumentFormat, DocumentResult};
use crate::formatters::{format_discrete_gpu, format_integrated_gpu, FullName};
use crate::infer::{infer_gpu_brand, infer_processor_generation, is_placeholder_gpu_model};
use crate::model::{lenient, GpuSpec, ProcessorSpec, RamSpec, ScreenSpec, StorageSpec};
use crate::text::normalize_text;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecSheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "lenient::component")]
    pub processor: ProcessorSpec,
    #[serde(deserialize_with = "lenient::component")]
    pub screen: ScreenSpec,
    #[serde(deserialize_with = "lenient::component")]
    pub discrete_gpu: GpuSpec,
    #[serde(deserialize_with = "lenient::component")]
    pub integrated_gpu: GpuSpec,
    #[serde(deserialize_with = "lenient::component")]
    pub storage: StorageSpec,
    #[serde(deserialize_with = "lenient::component")]
    pub ram: RamSpec,
}

/// Derived display names for every component of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FullNames {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub processor: String,
    pub screen: String,
    pub discrete_gpu: String,
    pub integrated_gpu: String,
    pub storage: String,
    pub ram: String,
}

impl FullNames {
    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("processor", self.processor.as_str()),
            ("screen", self.screen.as_str()),
            ("discrete_gpu", self.discrete_gpu.as_str()),
            ("integrated_gpu", self.integrated_gpu.as_str()),
            ("storage", self.storage.as_str()),
            ("ram", self.ram.as_str()),
        ]
    }
}

/// A document holds either a single sheet or a list of sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetDocument {
    Many(Vec<SpecSheet>),
    One(Box<SpecSheet>),
}

impl SheetDocument {
    pub fn into_sheets(self) -> Vec<SpecSheet> {
        match self {
            SheetDocument::Many(sheets) => sheets,
            SheetDocument::One(sheet) => vec![*sheet],
        }
    }
}

impl SpecSheet {
    pub fn full_names(&self, options: &FormatOptions) -> FullNames {
        FullNames {
            sku: self.sku.clone(),
            processor: self.processor.full_name(options),
            screen: self.screen.full_name(options),
            discrete_gpu: format_discrete_gpu(&self.discrete_gpu),
            integrated_gpu: format_integrated_gpu(&self.integrated_gpu),
            storage: self.storage.full_name(options),
            ram: self.ram.full_name(options),
        }
    }

    /// Tidy feed data before naming.
    ///
    /// - Trademark symbols and stray whitespace are removed from processor and GPU text.
    /// - A missing processor generation is inferred from the model number.
    /// - Placeholder discrete models (`None`, `No disponible`) are cleared.
    /// - A missing discrete brand is inferred from the model.
    ///
    /// `has_discrete` is left untouched.
    pub fn enrich(mut self) -> Self {
        let proc = &mut self.processor;
        for field in [&mut proc.manufacturer, &mut proc.family, &mut proc.generation, &mut proc.model]
        {
            normalize_field(field);
        }
        if proc.generation.is_none() {
            proc.generation = infer_processor_generation(
                proc.manufacturer.as_deref(),
                proc.family.as_deref(),
                proc.model.as_deref(),
            );
            trace!(generation = ?proc.generation, model = ?proc.model, "inferred processor generation");
        }

        for gpu in [&mut self.discrete_gpu, &mut self.integrated_gpu] {
            for field in [&mut gpu.brand, &mut gpu.model, &mut gpu.family] {
                normalize_field(field);
            }
        }

        let discrete = &mut self.discrete_gpu;
        if discrete.model.as_deref().is_some_and(is_placeholder_gpu_model) {
            trace!(model = ?discrete.model, "clearing placeholder discrete GPU model");
            discrete.model = None;
        }
        if discrete.brand.is_none() {
            discrete.brand =
                discrete.model.as_deref().and_then(infer_gpu_brand).map(str::to_string);
            trace!(brand = ?discrete.brand, "inferred discrete GPU brand");
        }

        self
    }
}

/// Normalize in place; a value that normalizes to nothing becomes absent.
fn normalize_field(field: &mut Option<String>) {
    *field = field.take().map(|s| normalize_text(&s)).filter(|s| !s.is_empty());
}

/// Parse one or many sheets from a string in the given format.
pub fn parse_sheets(body: &str, format: DocumentFormat) -> DocumentResult<Vec<SpecSheet>> {
    let doc: SheetDocument = document::parse_document(body, format)?;
    Ok(doc.into_sheets())
}

/// Load one or many sheets from a `.json`/`.yaml`/`.yml` file.
pub fn load_sheets(path: &Path) -> DocumentResult<Vec<SpecSheet>> {
    let doc: SheetDocument = document::load_document(path)?;
    let sheets = doc.into_sheets();
    debug!(path = %path.display(), count = sheets.len(), "loaded spec sheets");
    Ok(sheets)
}
