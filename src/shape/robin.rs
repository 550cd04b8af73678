use crate::math::{Real, DEFAULT_EPSILON};
use crate::shape::superquadric::{
    superquadric_value, EXPONENT_COEFFS, HALF_HEIGHT_COEFFS, HALF_WIDTH_COEFFS,
    VERTICAL_OFFSET_COEFFS,
};
use crate::shape::CrossSection;

/// The two components of the ROBIN reference geometry.
///
/// Both bodies share the same analytic description: a family of superquadric
/// cross-sections whose parameters vary along the body axis, split into axial
/// sections with their own coefficient rows.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum RobinBody {
    /// The main fuselage, spanning axial stations `0.0..=2.0`.
    Fuselage,
    /// The engine pylon on top of the fuselage, spanning `0.4..=1.018`.
    Pylon,
}

/// Errors that can occur while sampling the ROBIN analytic surface.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SamplingError {
    /// An axial station fell outside the sampled body's modeled domain.
    ///
    /// The coefficient tables and the axial sampling bounds are maintained
    /// together; a station outside every known section means they have
    /// drifted apart, so generation aborts instead of guessing a section.
    #[error("axial station {station} is outside the modeled domain [{begin}, {end}]")]
    StationOutOfRange {
        /// The offending axial station.
        station: Real,
        /// Start of the body's axial domain.
        begin: Real,
        /// End of the body's axial domain.
        end: Real,
    },
    /// A subdivision count was zero.
    #[error("subdivision counts must be positive (got nx = {nx}, nt = {nt})")]
    InvalidSubdivisions {
        /// Requested number of lengthwise elements.
        nx: u32,
        /// Requested number of circumferential elements.
        nt: u32,
    },
}

impl RobinBody {
    /// The axial extent `[begin, end]` of this body.
    #[inline]
    pub fn axial_range(self) -> [Real; 2] {
        match self {
            RobinBody::Fuselage => [0.0, 2.0],
            RobinBody::Pylon => [0.4, 1.018],
        }
    }

    /// The coefficient-table row for the axial station `x`.
    ///
    /// Fuselage stations map to rows 0–3 (breakpoints 0.4, 0.8, 1.9), pylon
    /// stations to rows 4–5 (breakpoint 0.8); a station exactly on a
    /// breakpoint resolves to the upper section. Stations outside the body's
    /// axial domain are rejected with
    /// [`SamplingError::StationOutOfRange`].
    pub fn section_row(self, x: Real) -> Result<usize, SamplingError> {
        let [begin, end] = self.axial_range();
        if x < begin - DEFAULT_EPSILON || x > end + DEFAULT_EPSILON {
            return Err(SamplingError::StationOutOfRange {
                station: x,
                begin,
                end,
            });
        }

        Ok(match self {
            RobinBody::Pylon => {
                if x < 0.8 {
                    4
                } else {
                    5
                }
            }
            RobinBody::Fuselage => {
                if x < 0.4 {
                    0
                } else if x < 0.8 {
                    1
                } else if x < 1.9 {
                    2
                } else {
                    3
                }
            }
        })
    }

    /// Evaluates the cross-section of this body at the axial station `x`.
    pub fn cross_section(self, x: Real) -> Result<CrossSection, SamplingError> {
        let row = self.section_row(x)?;
        Ok(CrossSection::new(
            superquadric_value(x, &HALF_HEIGHT_COEFFS[row]),
            superquadric_value(x, &HALF_WIDTH_COEFFS[row]),
            superquadric_value(x, &VERTICAL_OFFSET_COEFFS[row]),
            superquadric_value(x, &EXPONENT_COEFFS[row]),
        ))
    }
}
