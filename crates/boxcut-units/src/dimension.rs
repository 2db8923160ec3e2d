//! Magnitude + unit values and their text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnitError};

/// Length unit accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    /// Millimeters (the internal unit).
    #[default]
    Millimeter,
    /// Centimeters.
    Centimeter,
    /// Inches.
    Inch,
}

impl Unit {
    /// Millimeters in one of this unit.
    pub fn mm_per_unit(&self) -> f64 {
        match self {
            Unit::Millimeter => 1.0,
            Unit::Centimeter => 10.0,
            Unit::Inch => 25.4,
        }
    }

    /// Short suffix used when printing.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Inch => "in",
        }
    }

    /// Look up a unit by suffix, ignoring case. Long forms are accepted.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Some(Unit::Millimeter),
            "cm" | "centimeter" | "centimeters" => Some(Unit::Centimeter),
            "in" | "inch" | "inches" => Some(Unit::Inch),
            _ => None,
        }
    }
}

/// A positive length in some unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    magnitude: f64,
    unit: Unit,
}

impl Dimension {
    /// Create a dimension, rejecting non-positive or non-finite magnitudes.
    pub fn new(magnitude: f64, unit: Unit) -> Result<Self> {
        if !magnitude.is_finite() || magnitude <= 0.0 {
            return Err(UnitError::invalid(
                &format!("{magnitude}{}", unit.suffix()),
                "magnitude must be a positive number",
            ));
        }
        Ok(Self { magnitude, unit })
    }

    /// Create a dimension in millimeters.
    pub fn mm(magnitude: f64) -> Result<Self> {
        Self::new(magnitude, Unit::Millimeter)
    }

    /// The magnitude as entered.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The unit as entered.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Length in millimeters.
    pub fn to_mm(&self) -> f64 {
        self.magnitude * self.unit.mm_per_unit()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.suffix())
    }
}

impl FromStr for Dimension {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Parse text such as `50`, `2.5cm`, `1 in` or `3 Millimeters`.
///
/// A missing suffix means millimeters.
pub fn parse(raw: &str) -> Result<Dimension> {
    let text = raw.trim();

    let number_end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (number, rest) = text.split_at(number_end);
    if number.is_empty() {
        return Err(UnitError::invalid(raw, "expected a number"));
    }
    let magnitude: f64 = number
        .parse()
        .map_err(|_| UnitError::invalid(raw, format!("{number:?} is not a number")))?;

    let rest = rest.trim_start();
    let suffix_end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let (suffix, trailing) = rest.split_at(suffix_end);
    if !trailing.is_empty() {
        return Err(UnitError::invalid(
            raw,
            format!("unexpected {trailing:?} after the unit"),
        ));
    }

    let unit = if suffix.is_empty() {
        Unit::Millimeter
    } else {
        Unit::from_suffix(suffix)
            .ok_or_else(|| UnitError::invalid(raw, format!("unknown unit {suffix:?}")))?
    };

    if !magnitude.is_finite() || magnitude <= 0.0 {
        return Err(UnitError::invalid(raw, "magnitude must be greater than zero"));
    }

    Ok(Dimension { magnitude, unit })
}

/// Convert a dimension to millimeters.
pub fn normalize(d: Dimension) -> f64 {
    d.to_mm()
}

/// Parse and normalize in one step.
pub fn parse_mm(raw: &str) -> Result<f64> {
    parse(raw).map(normalize)
}
