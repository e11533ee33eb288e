//! JSON/YAML document loading for spec sheets and configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for reading and writing documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension (or requested format name) we do not know how to read.
    #[error("Unsupported document format '{0}'. Allowed: json, yaml, yml")]
    UnsupportedFormat(String),
}

/// Convenience result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Parse a format name (`json`, `yaml`, `yml`), ignoring case.
    pub fn from_name(name: &str) -> DocumentResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => Err(DocumentError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> DocumentResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        Self::from_name(ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

pub fn parse_document<T: DeserializeOwned>(body: &str, format: DocumentFormat) -> DocumentResult<T> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(body)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(body)?),
    }
}

/// Read and parse a document, choosing the format from its extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> DocumentResult<T> {
    let format = DocumentFormat::from_path(path)?;
    let body = fs::read_to_string(path)
        .map_err(|source| DocumentError::Io { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), format = format.as_str(), bytes = body.len(), "loading document");
    parse_document(&body, format)
}

pub fn render_document<T: Serialize>(value: &T, format: DocumentFormat) -> DocumentResult<String> {
    match format {
        DocumentFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        DocumentFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}

/// Serialize `value` and write it to `path` in the format implied by the extension.
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> DocumentResult<()> {
    let format = DocumentFormat::from_path(path)?;
    let body = render_document(value, format)?;
    fs::write(path, body).map_err(|source| DocumentError::Io { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), format = format.as_str(), "wrote document");
    Ok(())
}
