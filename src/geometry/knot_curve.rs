use crate::error::{GeometryError, Result};
use crate::math::{gcd, Point3, Vector3};

use super::arc_length::ArcLengthTable;
use super::curve::{Curve, TorusKnot};
use super::polyline::Polyline;

/// Shape parameters of a torus-knot curve.
///
/// Changing any field requires regenerating the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    /// Overall knot scale.
    pub radius: f64,
    /// Sampling density of [`KnotCurve::tubular_points`]; does not affect
    /// the mathematical curve.
    pub tubular_segments: u32,
    /// Windings around the symmetry axis.
    pub p: u32,
    /// Windings through the torus tube.
    pub q: u32,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            radius: 1.0,
            tubular_segments: 64,
            p: 2,
            q: 3,
        }
    }
}

impl CurveParameters {
    /// Minimum accepted `tubular_segments`.
    pub const MIN_TUBULAR_SEGMENTS: u32 = 3;

    /// Creates a parameter set.
    #[must_use]
    pub fn new(radius: f64, tubular_segments: u32, p: u32, q: u32) -> Self {
        Self {
            radius,
            tubular_segments,
            p,
            q,
        }
    }

    /// Checks every field, returning the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] if `radius` is not a
    /// positive finite number, `tubular_segments < 3`, or `p`/`q` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                parameter: "radius",
                value: self.radius,
                constraint: "must be finite and positive",
            }
            .into());
        }
        if self.tubular_segments < Self::MIN_TUBULAR_SEGMENTS {
            return Err(GeometryError::InvalidParameter {
                parameter: "tubular_segments",
                value: f64::from(self.tubular_segments),
                constraint: "must be at least 3",
            }
            .into());
        }
        // winding numbers are checked by the knot itself
        TorusKnot::new(self.radius, self.p, self.q).map(|_| ())
    }

    /// Returns `true` if `p` and `q` are coprime, i.e. the knot is a single
    /// component without repeated sub-loops.
    #[must_use]
    pub fn is_coprime(&self) -> bool {
        gcd(self.p, self.q) == 1
    }
}

/// A closed torus-knot curve with arc-length parameterization.
///
/// Read-only after construction; share it between followers with
/// [`std::sync::Arc`].
#[derive(Debug, Clone, PartialEq)]
pub struct KnotCurve {
    parameters: CurveParameters,
    knot: TorusKnot,
    table: ArcLengthTable,
}

impl KnotCurve {
    pub(crate) fn from_knot(parameters: CurveParameters, knot: TorusKnot, divisions: usize) -> Self {
        let table = ArcLengthTable::build(&knot, divisions);
        Self {
            parameters,
            knot,
            table,
        }
    }

    /// Returns the parameters the curve was generated from.
    #[must_use]
    pub fn parameters(&self) -> &CurveParameters {
        &self.parameters
    }

    /// Returns the underlying parametric knot.
    #[must_use]
    pub fn knot(&self) -> &TorusKnot {
        &self.knot
    }

    /// Returns the arc-length table.
    #[must_use]
    pub fn arc_length_table(&self) -> &ArcLengthTable {
        &self.table
    }

    /// Returns the total arc length of the closed curve.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.table.total_length()
    }

    /// Wraps `distance` into `[0, total_length)`; negative distances wrap
    /// backwards from the end.
    #[must_use]
    pub fn wrap_distance(&self, distance: f64) -> f64 {
        let total = self.total_length();
        let wrapped = distance.rem_euclid(total);
        // rem_euclid rounds tiny negative inputs up to `total` itself
        if wrapped >= total {
            0.0
        } else {
            wrapped
        }
    }

    /// Resolves a distance along the curve to a position and unit forward
    /// tangent. The distance wraps modulo [`Self::total_length`].
    #[must_use]
    pub fn point_and_tangent_at(&self, distance: f64) -> (Point3, Vector3) {
        let t = self.table.parameter_at(self.wrap_distance(distance));
        (self.knot.evaluate(t), self.knot.tangent(t))
    }

    /// Resolves a distance along the curve to a position.
    #[must_use]
    pub fn point_at(&self, distance: f64) -> Point3 {
        self.point_and_tangent_at(distance).0
    }

    /// Samples `samples` points evenly spaced in arc length, starting at
    /// distance zero. The end point is omitted since it repeats the start.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self, samples: usize) -> Vec<Point3> {
        let total = self.total_length();
        (0..samples)
            .map(|i| self.point_at(total * i as f64 / samples as f64))
            .collect()
    }

    /// Samples `tubular_segments` points evenly spaced in the curve
    /// parameter.
    #[must_use]
    pub fn tubular_points(&self) -> Vec<Point3> {
        let segments = self.parameters.tubular_segments;
        let domain = self.knot.domain();
        (0..segments)
            .map(|i| {
                self.knot
                    .evaluate(domain.lerp(f64::from(i) / f64::from(segments)))
            })
            .collect()
    }

    /// Builds a closed outline of the curve from `samples` points, for debug
    /// drawing.
    #[must_use]
    pub fn outline(&self, samples: usize) -> Polyline {
        Polyline::new(self.points(samples), true)
    }
}
