#![warn(missing_docs)]

//! Length parsing and unit normalization for boxcut.
//!
//! Every length the tool accepts is a magnitude with an optional unit
//! suffix. Lengths are carried as [`Dimension`] values and normalized to
//! millimeters before any geometry is computed.
//!
//! # Example
//!
//! ```
//! use boxcut_units::{normalize, parse};
//!
//! let d = parse("2in").unwrap();
//! assert_eq!(normalize(d), 50.8);
//! ```

pub mod dimension;
pub mod error;

pub use dimension::{normalize, parse, parse_mm, Dimension, Unit};
pub use error::{Result, UnitError};
