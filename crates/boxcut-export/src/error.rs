//! Error types for exporters.

use thiserror::Error;

/// Errors that can occur while writing a drawing.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Underlying write failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The output path has an extension no exporter handles.
    #[error("unsupported output format: {0:?} (expected .svg or .dxf)")]
    UnsupportedFormat(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
