//! SVG export.
//!
//! Cut lines are collected into a single black `<path>` so cutters trace
//! them in one job; fold lines are written as individual green `<line>`
//! elements. The document is sized in millimeters with a matching viewBox,
//! so one user unit is one millimeter.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use boxcut_layout::{Drawing, PanelEdge};

/// Stroke color for cut lines.
pub const CUT_COLOR: &str = "black";
/// Stroke color for fold lines.
pub const FOLD_COLOR: &str = "green";
/// Stroke width for cut lines (mm).
pub const CUT_STROKE_WIDTH: f64 = 0.5;
/// Stroke width for fold lines (mm).
pub const FOLD_STROKE_WIDTH: f64 = 1.0;

/// SVG document builder for box nets.
pub struct SvgDocument {
    width: f64,
    height: f64,
    cuts: Vec<PanelEdge>,
    folds: Vec<PanelEdge>,
}

impl SvgDocument {
    /// Build a document from a drawing.
    pub fn from_drawing(drawing: &Drawing) -> Self {
        Self {
            width: drawing.total_width(),
            height: drawing.total_height(),
            cuts: drawing.cut_edges().copied().collect(),
            folds: drawing.fold_edges().copied().collect(),
        }
    }

    /// Render the whole document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let (w, h) = (self.width, self.height);

        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        let _ = writeln!(
            out,
            "<svg width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\"\n     \
             xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">"
        );

        if !self.cuts.is_empty() {
            let data: Vec<String> = self
                .cuts
                .iter()
                .map(|e| format!("M {},{} L {},{}", e.start.x, e.start.y, e.end.x, e.end.y))
                .collect();
            let _ = writeln!(
                out,
                "  <path d=\"{}\" fill=\"none\" stroke=\"{CUT_COLOR}\" stroke-width=\"{CUT_STROKE_WIDTH}\"/>",
                data.join(" ")
            );
        }

        for e in &self.folds {
            let _ = writeln!(
                out,
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{FOLD_COLOR}\" stroke-width=\"{FOLD_STROKE_WIDTH}\" />",
                e.start.x, e.start.y, e.end.x, e.end.y
            );
        }

        out.push_str("</svg>\n");
        out
    }

    /// Export to a writer.
    pub fn export_to_writer(&self, mut writer: impl Write) -> std::io::Result<()> {
        writer.write_all(self.to_svg_string().as_bytes())
    }

    /// Export to SVG file.
    pub fn export(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.export_to_writer(&mut writer)?;
        writer.flush()
    }

    /// Number of cut segments in the path.
    pub fn num_cut(&self) -> usize {
        self.cuts.len()
    }

    /// Number of fold lines.
    pub fn num_fold(&self) -> usize {
        self.folds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxcut_layout::{layout, BoxSpec};

    fn sample_svg() -> (Drawing, String) {
        let drawing = layout(&BoxSpec::new(50.0, 75.0, 100.0)).unwrap();
        let svg = SvgDocument::from_drawing(&drawing).to_svg_string();
        (drawing, svg)
    }

    #[test]
    fn test_svg_header() {
        let (_, svg) = sample_svg();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width=\"262mm\""));
        assert!(svg.contains("height=\"302mm\""));
        assert!(svg.contains("viewBox=\"0 0 262 302\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_single_black_path() {
        let (drawing, svg) = sample_svg();
        assert_eq!(svg.matches("<path ").count(), 1);
        assert!(svg.contains("stroke=\"black\""));
        assert_eq!(svg.matches("M ").count(), drawing.cut_edges().count());
    }

    #[test]
    fn test_green_line_per_fold() {
        let (drawing, svg) = sample_svg();
        assert_eq!(svg.matches("<line ").count(), drawing.fold_edges().count());
        assert_eq!(svg.matches("stroke=\"green\"").count(), 9);
        // flap hinge from the golden net
        assert!(svg.contains("<line x1=\"106\" y1=\"15\" x2=\"156\" y2=\"15\""));
    }

    #[test]
    fn test_export_to_writer_matches_string() {
        let drawing = layout(&BoxSpec::new(20.0, 30.0, 40.0)).unwrap();
        let doc = SvgDocument::from_drawing(&drawing);
        let mut buf = Vec::new();
        doc.export_to_writer(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), doc.to_svg_string());
        assert_eq!(doc.num_fold(), 9);
        assert_eq!(doc.num_cut() + doc.num_fold(), drawing.edges.len());
    }
}
