#![warn(missing_docs)]

//! Vector output for boxcut nets.
//!
//! - **SVG**: cut lines black, fold lines green, sized in millimeters
//! - **DXF R12**: cut lines on layer `CUT`, fold lines on layer `BEND`
//!
//! # Example
//!
//! ```no_run
//! use boxcut_export::export_drawing;
//! use boxcut_layout::{layout, BoxSpec};
//!
//! let drawing = layout(&BoxSpec::new(50.0, 75.0, 100.0)).unwrap();
//! export_drawing(&drawing, "box.svg").unwrap();
//! ```

pub mod dxf;
pub mod error;
pub mod svg;

use std::path::Path;

use boxcut_layout::Drawing;
use tracing::info;

pub use dxf::DxfDocument;
pub use error::{ExportError, Result};
pub use svg::SvgDocument;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Scalable Vector Graphics.
    Svg,
    /// AutoCAD DXF R12.
    Dxf,
}

impl ExportFormat {
    /// Pick a format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "dxf" => Ok(ExportFormat::Dxf),
            _ => Err(ExportError::UnsupportedFormat(ext.to_string())),
        }
    }
}

/// Write `drawing` to `path`, choosing the format by extension.
pub fn export_drawing(drawing: &Drawing, path: impl AsRef<Path>) -> Result<ExportFormat> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    match format {
        ExportFormat::Svg => SvgDocument::from_drawing(drawing).export(path)?,
        ExportFormat::Dxf => DxfDocument::from_drawing(drawing).export(path)?,
    }
    info!(
        path = %path.display(),
        format = ?format,
        edges = drawing.edges.len(),
        "Exported drawing"
    );
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxcut_layout::{layout, BoxSpec};
    use std::fs;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.svg")).unwrap(), ExportFormat::Svg);
        assert_eq!(ExportFormat::from_path(Path::new("B.DXF")).unwrap(), ExportFormat::Dxf);
        assert!(matches!(
            ExportFormat::from_path(Path::new("box.pdf")),
            Err(ExportError::UnsupportedFormat(ext)) if ext == "pdf"
        ));
        assert!(ExportFormat::from_path(Path::new("box")).is_err());
    }

    #[test]
    fn test_export_drawing_writes_file() {
        let drawing = layout(&BoxSpec::new(50.0, 75.0, 100.0)).unwrap();
        let path = std::env::temp_dir().join("boxcut_test_export.svg");
        let format = export_drawing(&drawing, &path).unwrap();
        assert_eq!(format, ExportFormat::Svg);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("stroke=\"green\""));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unsupported_writes_nothing() {
        let drawing = layout(&BoxSpec::new(50.0, 75.0, 100.0)).unwrap();
        let path = std::env::temp_dir().join("boxcut_test_export.png");
        assert!(export_drawing(&drawing, &path).is_err());
        assert!(!path.exists());
    }
}
