mod torus_knot;

pub use torus_knot::TorusKnot;

use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns the width of the domain.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Maps a normalized fraction `u` in `[0, 1]` onto the domain.
    #[must_use]
    pub fn lerp(&self, u: f64) -> f64 {
        self.t_min + self.span() * u
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Computes the unit tangent vector at parameter `t`.
    fn tangent(&self, t: f64) -> Vector3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
