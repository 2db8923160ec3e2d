//! Cross-shaped net construction.
//!
//! The base sits in the middle with a wall on each edge. The width-side walls
//! (top and bottom in the drawing) span the full outer width of the base;
//! the length-side walls (left and right) span only the cavity length and
//! carry a tab at each end that fills the corner strip the width-side walls
//! stand on. The closure flap hangs off the rim of the top wall.
//!
//! ```text
//!            +-------------+            flap
//!          +-+-------------+-+
//!          |                 |          top wall
//!     +----+-----------------+----+
//!     | tab|                 |tab |
//!     +----+                 +----+
//!     |    |                 |    |
//!     |left|      base       |right
//!     |    |                 |    |
//!     +----+                 +----+
//!     | tab|                 |tab |
//!     +----+-----------------+----+
//!          |                 |          bottom wall
//!          +-----------------+
//! ```

use tracing::debug;

use crate::boxspec::BoxSpec;
use crate::error::Result;
use crate::seam::classify_edges;
use crate::types::{BoundingBox2D, Drawing, Panel, PanelKind, Point2D, Side, TabEnd};

/// Lay out the flat net for `spec`.
///
/// The box is validated first; no geometry is produced when any
/// panel would have zero or negative size.
pub fn layout(spec: &BoxSpec) -> Result<Drawing> {
    spec.validate()?;

    let t = spec.thickness;
    let depth = spec.wall_depth();
    let flap = spec.flap_length;

    // Base corners
    let bx0 = depth;
    let bx1 = bx0 + spec.width + 2.0 * t;
    let by0 = flap + depth;
    let by1 = by0 + spec.length + 2.0 * t;

    debug!(
        base_w = bx1 - bx0,
        base_l = by1 - by0,
        wall_depth = depth,
        "Computed net dimensions"
    );

    let mut panels = Vec::with_capacity(10);
    let mut hinges = Vec::with_capacity(9);

    let base = push(&mut panels, Panel::rectangle(PanelKind::Base, bx0, by0, bx1, by1));

    let top = push(
        &mut panels,
        Panel::rectangle(PanelKind::Wall(Side::Top), bx0, flap, bx1, by0),
    );
    let bottom = push(
        &mut panels,
        Panel::rectangle(PanelKind::Wall(Side::Bottom), bx0, by1, bx1, by1 + depth),
    );
    let left = push(
        &mut panels,
        Panel::rectangle(PanelKind::Wall(Side::Left), 0.0, by0 + t, bx0, by1 - t),
    );
    let right = push(
        &mut panels,
        Panel::rectangle(PanelKind::Wall(Side::Right), bx1, by0 + t, bx1 + depth, by1 - t),
    );
    for wall in [top, bottom, left, right] {
        hinges.push((base, wall));
    }

    // Tabs stop `t` short of the rim so they clear the width-side wall's edge.
    let tabs = [
        (left, Side::Left, TabEnd::Start, t, by0, bx0, by0 + t),
        (left, Side::Left, TabEnd::End, t, by1 - t, bx0, by1),
        (right, Side::Right, TabEnd::Start, bx1, by0, bx1 + depth - t, by0 + t),
        (right, Side::Right, TabEnd::End, bx1, by1 - t, bx1 + depth - t, by1),
    ];
    for (wall, side, end, x0, y0, x1, y1) in tabs {
        let tab = push(
            &mut panels,
            Panel::rectangle(PanelKind::Tab(side, end), x0, y0, x1, y1),
        );
        hinges.push((wall, tab));
    }

    // The flap's hinge spans the cavity width; its free edge is narrower by
    // one thickness per side so it slides into the mouth.
    let flap_panel = push(
        &mut panels,
        Panel {
            kind: PanelKind::Flap,
            outline: vec![
                Point2D::new(bx0 + 2.0 * t, 0.0),
                Point2D::new(bx1 - 2.0 * t, 0.0),
                Point2D::new(bx1 - t, flap),
                Point2D::new(bx0 + t, flap),
            ],
        },
    );
    hinges.push((top, flap_panel));

    let edges = classify_edges(&panels, &hinges);
    let bounds = BoundingBox2D::from_points(panels.iter().flat_map(|p| &p.outline));

    debug!(
        panels = panels.len(),
        edges = edges.len(),
        total_width = bounds.width(),
        total_height = bounds.height(),
        "Laid out net"
    );

    Ok(Drawing {
        edges,
        panels,
        bounds,
    })
}

fn push(panels: &mut Vec<Panel>, panel: Panel) -> usize {
    panels.push(panel);
    panels.len() - 1
}
