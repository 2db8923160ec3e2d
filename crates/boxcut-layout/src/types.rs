//! Core types for flat box nets.

use serde::{Deserialize, Serialize};

/// A 2D point in millimeters. Y grows downward, matching SVG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// How an edge is treated when the net is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Material is separated along this edge.
    Cut,
    /// Material is bent along this edge.
    Fold,
}

/// A classified line segment of the net.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelEdge {
    /// Start point.
    pub start: Point2D,
    /// End point.
    pub end: Point2D,
    /// Cut or fold.
    pub kind: EdgeKind,
}

impl PanelEdge {
    /// Create a new edge.
    pub fn new(start: Point2D, end: Point2D, kind: EdgeKind) -> Self {
        Self { start, end, kind }
    }

    /// Length of the edge.
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Whether this edge is a fold line.
    pub fn is_fold(&self) -> bool {
        self.kind == EdgeKind::Fold
    }
}

/// 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl BoundingBox2D {
    /// Create an empty bounding box.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Bounding box of a set of points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2D>) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.include_point(*p);
        }
        bounds
    }

    /// Expand the bounding box to include a point.
    pub fn include_point(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if the bounding box is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}

/// Which edge of the base a wall hangs off, as seen in the flat net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Width-side wall above the base.
    Top,
    /// Width-side wall below the base.
    Bottom,
    /// Length-side wall left of the base.
    Left,
    /// Length-side wall right of the base.
    Right,
}

/// Which end of a length-side wall a tab sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabEnd {
    /// The end nearer the top wall.
    Start,
    /// The end nearer the bottom wall.
    End,
}

/// Role of a panel in the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    /// The floor of the box.
    Base,
    /// One of the four walls.
    Wall(Side),
    /// Corner tab on a length-side wall.
    Tab(Side, TabEnd),
    /// Tapered closure flap.
    Flap,
}

/// A flat region of the net.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Role of this panel.
    pub kind: PanelKind,
    /// Closed outline, vertices in order.
    pub outline: Vec<Point2D>,
}

impl Panel {
    /// Axis-aligned rectangle from two opposite corners.
    pub fn rectangle(kind: PanelKind, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            kind,
            outline: vec![
                Point2D::new(x0, y0),
                Point2D::new(x1, y0),
                Point2D::new(x1, y1),
                Point2D::new(x0, y1),
            ],
        }
    }

    /// Bounding box of the outline.
    pub fn bounds(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(&self.outline)
    }

    /// Outline edges as point pairs, closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.outline.len();
        (0..n).map(move |i| (self.outline[i], self.outline[(i + 1) % n]))
    }
}

/// The finished net: classified edges, panels and overall size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// All edges, in a deterministic order.
    pub edges: Vec<PanelEdge>,
    /// Panels the edges were derived from.
    pub panels: Vec<Panel>,
    /// Bounding box of the whole net.
    pub bounds: BoundingBox2D,
}

impl Drawing {
    /// Overall width of the net in millimeters.
    pub fn total_width(&self) -> f64 {
        self.bounds.width()
    }

    /// Overall height of the net in millimeters.
    pub fn total_height(&self) -> f64 {
        self.bounds.height()
    }

    /// Edges to be cut.
    pub fn cut_edges(&self) -> impl Iterator<Item = &PanelEdge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Cut)
    }

    /// Edges to be folded.
    pub fn fold_edges(&self) -> impl Iterator<Item = &PanelEdge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Fold)
    }

    /// Look up a panel by role.
    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// Total length of cut lines, useful for laser time estimates.
    pub fn cut_length(&self) -> f64 {
        self.cut_edges().map(PanelEdge::length).sum()
    }

    /// Total length of fold lines.
    pub fn fold_length(&self) -> f64 {
        self.fold_edges().map(PanelEdge::length).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_bounds() {
        let panel = Panel::rectangle(PanelKind::Base, 2.0, 3.0, 12.0, 8.0);
        let bounds = panel.bounds();
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 5.0);
        assert_eq!(panel.edges().count(), 4);
    }

    #[test]
    fn test_empty_bounds_invalid() {
        assert!(!BoundingBox2D::empty().is_valid());
        let b = BoundingBox2D::from_points(&[Point2D::new(1.0, 1.0)]);
        assert!(b.is_valid());
        assert_eq!(b.width(), 0.0);
    }

    #[test]
    fn test_edge_length() {
        let e = PanelEdge::new(Point2D::ORIGIN, Point2D::new(3.0, 4.0), EdgeKind::Cut);
        assert_eq!(e.length(), 5.0);
        assert!(!e.is_fold());
    }
}
