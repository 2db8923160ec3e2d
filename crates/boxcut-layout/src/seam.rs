//! Seam classification: turns panel outlines into cut and fold edges.
//!
//! Outlines of neighbouring panels overlap where the panels touch. Every
//! axis-aligned outline segment is split at the endpoints of the segments
//! collinear with it, and each resulting piece is classified by which panels
//! own it:
//!
//! - two panels joined by a hinge: [`EdgeKind::Fold`]
//! - anything else: [`EdgeKind::Cut`], emitted once even when two panels
//!   share the boundary
//!
//! Diagonal segments never coincide in a box net and are always cut.

use std::cmp::Ordering;

use crate::types::{EdgeKind, Panel, PanelEdge, Point2D};

/// Distance below which coordinates are treated as equal (mm).
pub const TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Part of a panel outline lying on an axis-aligned line.
#[derive(Debug, Clone, Copy)]
struct Run {
    coord: f64,
    lo: f64,
    hi: f64,
    panel: usize,
}

impl Run {
    fn covers(&self, a: f64, b: f64) -> bool {
        self.lo <= a + TOLERANCE && self.hi >= b - TOLERANCE
    }
}

/// Classify the outlines of `panels`. `hinges` lists pairs of panel indices
/// the assembler folds against each other.
pub fn classify_edges(panels: &[Panel], hinges: &[(usize, usize)]) -> Vec<PanelEdge> {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();
    let mut diagonal = Vec::new();

    for (index, panel) in panels.iter().enumerate() {
        for (p, q) in panel.edges() {
            if (p.y - q.y).abs() < TOLERANCE {
                horizontal.push(Run {
                    coord: p.y,
                    lo: p.x.min(q.x),
                    hi: p.x.max(q.x),
                    panel: index,
                });
            } else if (p.x - q.x).abs() < TOLERANCE {
                vertical.push(Run {
                    coord: p.x,
                    lo: p.y.min(q.y),
                    hi: p.y.max(q.y),
                    panel: index,
                });
            } else {
                diagonal.push(PanelEdge::new(p, q, EdgeKind::Cut));
            }
        }
    }

    let is_hinged = |a: usize, b: usize| {
        hinges
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    };

    let mut edges = split_runs(horizontal, Axis::Horizontal, &is_hinged);
    edges.extend(split_runs(vertical, Axis::Vertical, &is_hinged));
    edges.extend(diagonal);
    edges
}

fn split_runs(
    mut runs: Vec<Run>,
    axis: Axis,
    is_hinged: &impl Fn(usize, usize) -> bool,
) -> Vec<PanelEdge> {
    runs.sort_by(|a, b| match a.coord.total_cmp(&b.coord) {
        Ordering::Equal => a.lo.total_cmp(&b.lo),
        other => other,
    });

    let mut edges = Vec::new();
    let mut start = 0;
    while start < runs.len() {
        let coord = runs[start].coord;
        let mut end = start + 1;
        while end < runs.len() && (runs[end].coord - coord).abs() < TOLERANCE {
            end += 1;
        }
        split_line(&runs[start..end], coord, axis, is_hinged, &mut edges);
        start = end;
    }
    edges
}

/// Split the runs of a single line into elementary pieces and classify them.
fn split_line(
    runs: &[Run],
    coord: f64,
    axis: Axis,
    is_hinged: &impl Fn(usize, usize) -> bool,
    out: &mut Vec<PanelEdge>,
) {
    let mut breaks: Vec<f64> = runs.iter().flat_map(|r| [r.lo, r.hi]).collect();
    breaks.sort_by(f64::total_cmp);
    breaks.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);

    // (lo, hi, kind) of the piece currently being extended
    let mut current: Option<(f64, f64, EdgeKind)> = None;

    for pair in breaks.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let owners: Vec<usize> = runs
            .iter()
            .filter(|r| r.covers(a, b))
            .map(|r| r.panel)
            .collect();
        if owners.is_empty() {
            if let Some(piece) = current.take() {
                out.push(to_edge(piece, coord, axis));
            }
            continue;
        }

        let kind = match owners.as_slice() {
            [x, y] if is_hinged(*x, *y) => EdgeKind::Fold,
            _ => EdgeKind::Cut,
        };

        current = match current {
            Some((lo, hi, k)) if k == kind && (hi - a).abs() < TOLERANCE => Some((lo, b, k)),
            Some(piece) => {
                out.push(to_edge(piece, coord, axis));
                Some((a, b, kind))
            }
            None => Some((a, b, kind)),
        };
    }

    if let Some(piece) = current {
        out.push(to_edge(piece, coord, axis));
    }
}

fn to_edge((lo, hi, kind): (f64, f64, EdgeKind), coord: f64, axis: Axis) -> PanelEdge {
    match axis {
        Axis::Horizontal => PanelEdge::new(Point2D::new(lo, coord), Point2D::new(hi, coord), kind),
        Axis::Vertical => PanelEdge::new(Point2D::new(coord, lo), Point2D::new(coord, hi), kind),
    }
}
