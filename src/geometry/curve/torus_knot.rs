use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// A `(p, q)` torus knot lying on a torus centered at the origin with its
/// symmetry axis along +Z.
///
/// The knot winds `p` times around the symmetry axis and `q` times through
/// the tube while `t` sweeps `[0, 2*pi)`:
///
/// `x = r * (2 + cos(q*t)) * cos(p*t) / 2`
/// `y = r * (2 + cos(q*t)) * sin(p*t) / 2`
/// `z = r * sin(q*t) / 2`
#[derive(Debug, Clone, PartialEq)]
pub struct TorusKnot {
    radius: f64,
    p: u32,
    q: u32,
}

impl TorusKnot {
    /// Creates a new torus knot.
    ///
    /// # Arguments
    ///
    /// * `radius` - Overall scale of the knot (must be finite and positive)
    /// * `p` - Windings around the symmetry axis (at least 1)
    /// * `q` - Windings through the torus tube (at least 1)
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] for a non-positive radius
    /// or a zero winding number.
    pub fn new(radius: f64, p: u32, q: u32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                parameter: "radius",
                value: radius,
                constraint: "must be finite and positive",
            }
            .into());
        }
        if p == 0 {
            return Err(GeometryError::InvalidParameter {
                parameter: "p",
                value: f64::from(p),
                constraint: "must be at least 1",
            }
            .into());
        }
        if q == 0 {
            return Err(GeometryError::InvalidParameter {
                parameter: "q",
                value: f64::from(q),
                constraint: "must be at least 1",
            }
            .into());
        }
        Ok(Self { radius, p, q })
    }

    /// Returns the knot radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the winding number around the symmetry axis.
    #[must_use]
    pub fn p(&self) -> u32 {
        self.p
    }

    /// Returns the winding number through the tube.
    #[must_use]
    pub fn q(&self) -> u32 {
        self.q
    }

    fn angles(&self, t: f64) -> (f64, f64) {
        (f64::from(self.p) * t, f64::from(self.q) * t)
    }
}

impl Curve for TorusKnot {
    fn evaluate(&self, t: f64) -> Point3 {
        let (pt, qt) = self.angles(t);
        let ring = self.radius * (2.0 + qt.cos()) * 0.5;
        Point3::new(
            ring * pt.cos(),
            ring * pt.sin(),
            self.radius * qt.sin() * 0.5,
        )
    }

    fn tangent(&self, t: f64) -> Vector3 {
        let (pt, qt) = self.angles(t);
        let p = f64::from(self.p);
        let q = f64::from(self.q);
        let half = self.radius * 0.5;

        // d(ring)/dt and ring * d(angle)/dt; the latter never vanishes
        let ring_rate = -half * q * qt.sin();
        let sweep = half * (2.0 + qt.cos()) * p;

        let derivative = Vector3::new(
            ring_rate * pt.cos() - sweep * pt.sin(),
            ring_rate * pt.sin() + sweep * pt.cos(),
            half * q * qt.cos(),
        );
        derivative.normalize()
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
