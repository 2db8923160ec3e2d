//! DXF export for laser cutting and forming services.
//!
//! Writes DXF R12 with two layers:
//! - CUT: continuous lines, color 7 (white/black)
//! - BEND: dashed lines, color 3 (green)
//!
//! DXF's Y axis points up, so coordinates are flipped against the drawing
//! height to keep the same orientation as the SVG output.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use boxcut_layout::{Drawing, EdgeKind};

/// Layer for cut lines.
pub const CUT_LAYER: &str = "CUT";
/// Layer for fold lines.
pub const BEND_LAYER: &str = "BEND";

/// One layer plus the line type it is drawn with.
struct LayerStyle {
    name: &'static str,
    color: u8,
    linetype: &'static str,
    description: &'static str,
    /// Dash lengths, gaps negative. Empty for a solid line.
    pattern: &'static [f64],
}

const LAYERS: [LayerStyle; 2] = [
    LayerStyle {
        name: CUT_LAYER,
        color: 7,
        linetype: "CONTINUOUS",
        description: "Solid line",
        pattern: &[],
    },
    LayerStyle {
        name: BEND_LAYER,
        color: 3,
        linetype: "DASHED",
        description: "Dashed line",
        pattern: &[4.0, -2.0],
    },
];

fn layer_for(kind: EdgeKind) -> &'static str {
    match kind {
        EdgeKind::Cut => CUT_LAYER,
        EdgeKind::Fold => BEND_LAYER,
    }
}

/// Write one group code / value pair.
fn pair(writer: &mut impl Write, code: u16, value: impl Display) -> std::io::Result<()> {
    writeln!(writer, "{code}")?;
    writeln!(writer, "{value}")
}

struct DxfLine {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    kind: EdgeKind,
}

/// DXF document builder for box nets.
pub struct DxfDocument {
    lines: Vec<DxfLine>,
}

impl DxfDocument {
    /// Build a document from a drawing.
    pub fn from_drawing(drawing: &Drawing) -> Self {
        let top = drawing.bounds.max_y;
        let lines = drawing
            .edges
            .iter()
            .map(|e| DxfLine {
                x1: e.start.x,
                y1: top - e.start.y,
                x2: e.end.x,
                y2: top - e.end.y,
                kind: e.kind,
            })
            .collect();
        Self { lines }
    }

    /// Export to DXF file.
    pub fn export(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.export_to_writer(&mut writer)?;
        writer.flush()
    }

    /// Export to a writer.
    pub fn export_to_writer(&self, mut writer: impl Write) -> std::io::Result<()> {
        let w = &mut writer;

        section(w, "HEADER")?;
        pair(w, 9, "$ACADVER")?;
        pair(w, 1, "AC1009")?; // R12
        pair(w, 9, "$INSUNITS")?;
        pair(w, 70, 4)?; // millimeters
        pair(w, 0, "ENDSEC")?;

        section(w, "TABLES")?;
        write_ltype_table(w)?;
        write_layer_table(w)?;
        pair(w, 0, "ENDSEC")?;

        section(w, "ENTITIES")?;
        for line in &self.lines {
            pair(w, 0, "LINE")?;
            pair(w, 8, layer_for(line.kind))?;
            pair(w, 10, format_args!("{:.6}", line.x1))?;
            pair(w, 20, format_args!("{:.6}", line.y1))?;
            pair(w, 11, format_args!("{:.6}", line.x2))?;
            pair(w, 21, format_args!("{:.6}", line.y2))?;
        }
        pair(w, 0, "ENDSEC")?;

        pair(w, 0, "EOF")
    }

    /// Number of lines on the cut layer.
    pub fn num_cut(&self) -> usize {
        self.lines.iter().filter(|l| l.kind == EdgeKind::Cut).count()
    }

    /// Number of lines on the bend layer.
    pub fn num_bend(&self) -> usize {
        self.lines.iter().filter(|l| l.kind == EdgeKind::Fold).count()
    }
}

fn section(w: &mut impl Write, name: &str) -> std::io::Result<()> {
    pair(w, 0, "SECTION")?;
    pair(w, 2, name)
}

fn write_ltype_table(w: &mut impl Write) -> std::io::Result<()> {
    pair(w, 0, "TABLE")?;
    pair(w, 2, "LTYPE")?;
    pair(w, 70, LAYERS.len())?;
    for style in &LAYERS {
        pair(w, 0, "LTYPE")?;
        pair(w, 2, style.linetype)?;
        pair(w, 70, 0)?;
        pair(w, 3, style.description)?;
        pair(w, 72, 65)?; // alignment 'A'
        pair(w, 73, style.pattern.len())?;
        let total: f64 = style.pattern.iter().map(|d| d.abs()).sum();
        pair(w, 40, format_args!("{total:.1}"))?;
        for dash in style.pattern {
            pair(w, 49, format_args!("{dash:.1}"))?;
        }
    }
    pair(w, 0, "ENDTAB")
}

fn write_layer_table(w: &mut impl Write) -> std::io::Result<()> {
    pair(w, 0, "TABLE")?;
    pair(w, 2, "LAYER")?;
    pair(w, 70, LAYERS.len())?;
    for style in &LAYERS {
        pair(w, 0, "LAYER")?;
        pair(w, 2, style.name)?;
        pair(w, 70, 0)?;
        pair(w, 62, style.color)?;
        pair(w, 6, style.linetype)?;
    }
    pair(w, 0, "ENDTAB")
}
