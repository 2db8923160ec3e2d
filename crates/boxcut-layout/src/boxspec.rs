//! Box parameters and role assignment.

use boxcut_units::parse_mm;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::seam::TOLERANCE;

/// Material thickness used when none is given.
pub const DEFAULT_THICKNESS: &str = "3mm";

/// Closure flap length used when none is given.
pub const DEFAULT_FLAP_LENGTH: &str = "15mm";

/// How the three entered dimensions map onto width, length and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleAssignment {
    /// First is width, second is length, third is height.
    #[default]
    AsEntered,
    /// Smallest is width, middle is length, largest is height.
    ByMagnitude,
}

/// Assign width, length and height from three millimeter values.
pub fn assign_roles(dims: [f64; 3], policy: RoleAssignment) -> (f64, f64, f64) {
    let mut dims = dims;
    if policy == RoleAssignment::ByMagnitude {
        dims.sort_by(f64::total_cmp);
    }
    (dims[0], dims[1], dims[2])
}

/// Internal box dimensions plus material parameters, all in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Internal width (along the width-side walls).
    pub width: f64,
    /// Internal length (along the length-side walls).
    pub length: f64,
    /// Internal height.
    pub height: f64,
    /// Material thickness.
    pub thickness: f64,
    /// Length of the closure flap.
    pub flap_length: f64,
}

impl BoxSpec {
    /// Internal dimensions with the default thickness (3mm) and flap length (15mm).
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
            thickness: 3.0,
            flap_length: 15.0,
        }
    }

    /// Override the material thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Override the closure flap length.
    pub fn with_flap_length(mut self, flap_length: f64) -> Self {
        self.flap_length = flap_length;
        self
    }

    /// Build from raw text such as `"5cm"`, assigning roles by `policy`.
    pub fn parse(
        dims: [&str; 3],
        thickness: &str,
        flap_length: &str,
        policy: RoleAssignment,
    ) -> Result<Self> {
        let mm = [parse_mm(dims[0])?, parse_mm(dims[1])?, parse_mm(dims[2])?];
        let (width, length, height) = assign_roles(mm, policy);
        let spec = Self {
            width,
            length,
            height,
            thickness: parse_mm(thickness)?,
            flap_length: parse_mm(flap_length)?,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Wall depth from fold line to rim: the cavity height plus the base under it.
    pub fn wall_depth(&self) -> f64 {
        self.height + self.thickness
    }

    /// Check that every panel of the net has positive size.
    ///
    /// Sizes within [`TOLERANCE`] of zero are rejected too: edge
    /// classification would merge the lines bounding such a panel.
    pub fn validate(&self) -> Result<()> {
        for (panel, size) in [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
            ("thickness", self.thickness),
            ("flap", self.flap_length),
        ] {
            if !size.is_finite() || size <= TOLERANCE {
                return Err(LayoutError::DegenerateGeometry { panel, size });
            }
        }

        // Each cavity span has to clear the two walls standing against it.
        let t2 = 2.0 * self.thickness;
        for (panel, size) in [
            ("flap free edge", self.width - t2),
            ("side wall inner span", self.length - t2),
            ("wall height after compensation", self.height - t2),
        ] {
            if size <= TOLERANCE {
                return Err(LayoutError::DegenerateGeometry { panel, size });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxcut_units::UnitError;

    #[test]
    fn test_roles_as_entered() {
        assert_eq!(
            assign_roles([100.0, 50.0, 75.0], RoleAssignment::AsEntered),
            (100.0, 50.0, 75.0)
        );
    }

    #[test]
    fn test_roles_by_magnitude() {
        assert_eq!(
            assign_roles([100.0, 50.0, 75.0], RoleAssignment::ByMagnitude),
            (50.0, 75.0, 100.0)
        );
    }

    #[test]
    fn test_parse_mixed_units() {
        let spec = BoxSpec::parse(
            ["5cm", "75", "0.5in"],
            DEFAULT_THICKNESS,
            DEFAULT_FLAP_LENGTH,
            RoleAssignment::AsEntered,
        )
        .unwrap();
        assert_eq!(spec.width, 50.0);
        assert_eq!(spec.length, 75.0);
        assert_eq!(spec.height, 12.7);
        assert_eq!(spec.thickness, 3.0);
        assert_eq!(spec.flap_length, 15.0);
    }

    #[test]
    fn test_parse_reports_bad_unit() {
        let err = BoxSpec::parse(
            ["50", "75ft", "100"],
            DEFAULT_THICKNESS,
            DEFAULT_FLAP_LENGTH,
            RoleAssignment::AsEntered,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Units(UnitError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_defaults_match_text_defaults() {
        let spec = BoxSpec::new(50.0, 75.0, 100.0);
        assert_eq!(Ok(spec.thickness), boxcut_units::parse_mm(DEFAULT_THICKNESS));
        assert_eq!(Ok(spec.flap_length), boxcut_units::parse_mm(DEFAULT_FLAP_LENGTH));
    }

    #[test]
    fn test_thick_material_is_degenerate() {
        let spec = BoxSpec::new(100.0, 100.0, 50.0).with_thickness(40.0);
        let err = spec.validate().unwrap_err();
        assert_eq!(
            err,
            LayoutError::DegenerateGeometry {
                panel: "wall height after compensation",
                size: -30.0,
            }
        );
    }

    #[test]
    fn test_zero_flap_is_degenerate() {
        let spec = BoxSpec::new(50.0, 75.0, 100.0).with_flap_length(0.0);
        assert!(matches!(
            spec.validate(),
            Err(LayoutError::DegenerateGeometry { panel: "flap", .. })
        ));
    }

    #[test]
    fn test_thickness_exactly_half_is_degenerate() {
        let spec = BoxSpec::new(6.0, 75.0, 100.0).with_thickness(3.0);
        assert!(matches!(
            spec.validate(),
            Err(LayoutError::DegenerateGeometry {
                panel: "flap free edge",
                ..
            })
        ));
    }

    #[test]
    fn test_sub_tolerance_thickness_is_degenerate() {
        let spec = BoxSpec::new(50.0, 75.0, 100.0).with_thickness(1e-7);
        assert_eq!(
            spec.validate(),
            Err(LayoutError::DegenerateGeometry {
                panel: "thickness",
                size: 1e-7,
            })
        );
    }

    #[test]
    fn test_span_within_tolerance_is_degenerate() {
        let spec = BoxSpec::new(6.0 + 5e-7, 75.0, 100.0).with_thickness(3.0);
        assert!(matches!(
            spec.validate(),
            Err(LayoutError::DegenerateGeometry {
                panel: "flap free edge",
                ..
            })
        ));
    }

    #[test]
    fn test_thin_material_still_valid() {
        let spec = BoxSpec::new(50.0, 75.0, 100.0).with_thickness(1e-3);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_serde_policy_names() {
        let json = serde_json::to_string(&RoleAssignment::ByMagnitude).unwrap();
        assert_eq!(json, "\"by_magnitude\"");
    }
}
