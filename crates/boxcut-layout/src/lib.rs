#![warn(missing_docs)]

//! Flat net layout for folded boxes.
//!
//! Given the internal dimensions of a box plus material thickness and a
//! closure flap length, this crate computes every panel of a single-piece
//! net and classifies each edge as a cut or a fold. Panel sizes are
//! compensated for material thickness so the assembled box has exactly the
//! requested internal cavity.
//!
//! # Example
//!
//! ```
//! use boxcut_layout::{layout, BoxSpec, PanelKind};
//!
//! let spec = BoxSpec::new(50.0, 75.0, 100.0).with_thickness(2.0);
//! let drawing = layout(&spec).unwrap();
//!
//! let base = drawing.panel(PanelKind::Base).unwrap().bounds();
//! assert_eq!((base.width(), base.height()), (54.0, 79.0));
//!
//! for edge in drawing.fold_edges() {
//!     println!("fold: ({}, {}) -> ({}, {})",
//!         edge.start.x, edge.start.y, edge.end.x, edge.end.y);
//! }
//! ```

pub mod boxspec;
pub mod error;
pub mod net;
pub mod seam;
pub mod types;

pub use boxspec::{
    assign_roles, BoxSpec, RoleAssignment, DEFAULT_FLAP_LENGTH, DEFAULT_THICKNESS,
};
pub use error::{LayoutError, Result};
pub use net::layout;
pub use seam::classify_edges;
pub use types::{
    BoundingBox2D, Drawing, EdgeKind, Panel, PanelEdge, PanelKind, Point2D, Side, TabEnd,
};
