//! Error types for net layout.

use boxcut_units::UnitError;
use thiserror::Error;

/// Errors that can occur while laying out a net.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A panel would come out with zero or negative size.
    #[error("degenerate geometry: {panel} would be {size:.3}mm")]
    DegenerateGeometry {
        /// Which panel or span failed.
        panel: &'static str,
        /// The computed size in millimeters.
        size: f64,
    },

    /// A raw dimension could not be read.
    #[error(transparent)]
    Units(#[from] UnitError),
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
