use crate::math::{Point, Real, DEFAULT_EPSILON};

/// A single superquadric cross-section of a ROBIN body.
///
/// The section lives in the plane orthogonal to the body axis; its outline is
/// the superellipse with half-axes derived from `half_height`/`half_width`
/// and roundness exponent `exponent`, shifted vertically by
/// `vertical_offset`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct CrossSection {
    /// The section height parameter `H`.
    pub half_height: Real,
    /// The section width parameter `W`.
    pub half_width: Real,
    /// The vertical offset `Z0` of the section center.
    pub vertical_offset: Real,
    /// The superellipse roundness exponent `N`.
    pub exponent: Real,
}

impl CrossSection {
    /// Creates a new cross-section from the four shape parameters.
    #[inline]
    pub fn new(
        half_height: Real,
        half_width: Real,
        vertical_offset: Real,
        exponent: Real,
    ) -> CrossSection {
        CrossSection {
            half_height,
            half_width,
            vertical_offset,
            exponent,
        }
    }

    /// The superellipse polar radius at the circumferential angle `theta`.
    ///
    /// Computes `0.25·H·W / [(0.5·H·|sin θ|)^N + (0.5·W·|cos θ|)^N]^(1/N)`.
    /// The denominator vanishes for degenerate sections (the body tips, where
    /// both half-axes are zero); it is then replaced by `1.0` before the
    /// outer exponentiation so the radius stays finite.
    pub fn radius(&self, theta: Real) -> Real {
        let numer = 0.25 * self.half_height * self.half_width;
        let mut denom = (0.5 * self.half_height * theta.sin().abs()).powf(self.exponent)
            + (0.5 * self.half_width * theta.cos().abs()).powf(self.exponent);

        if denom.abs() < DEFAULT_EPSILON {
            denom = 1.0;
        }

        numer / denom.powf(1.0 / self.exponent)
    }

    /// The surface point of this section at axial station `x` and
    /// circumferential angle `theta`, with `theta = 0` pointing toward `+z`.
    pub fn surface_point(&self, x: Real, theta: Real) -> Point<Real> {
        let r = self.radius(theta);
        Point::new(x, r * theta.sin(), r * theta.cos() + self.vertical_offset)
    }
}
