use crate::error::{GeometryError, Result};
use crate::geometry::arc_length::{DEFAULT_ARC_LENGTH_DIVISIONS, MIN_ARC_LENGTH_DIVISIONS};
use crate::geometry::{CurveParameters, KnotCurve, TorusKnot};
use crate::math::TOLERANCE;

/// Chord segments required per winding so samples cannot alias onto a
/// shorter loop.
const DIVISIONS_PER_WINDING: usize = 8;

/// Upper bound on arc-length divisions when refining a collapsed table.
const MAX_ARC_LENGTH_DIVISIONS: usize = 1 << 20;

/// Generates a closed torus-knot curve from shape parameters.
pub struct GenerateCurve {
    parameters: CurveParameters,
    arc_length_divisions: usize,
}

impl GenerateCurve {
    /// Creates a new `GenerateCurve` operation.
    ///
    /// * `radius` - Overall knot scale (must be positive).
    /// * `tubular_segments` - Parameter-space sampling density (at least 3).
    /// * `p`, `q` - Winding numbers (at least 1). Non-coprime values are
    ///   accepted and produce a knot with repeated sub-loops.
    #[must_use]
    pub fn new(radius: f64, tubular_segments: u32, p: u32, q: u32) -> Self {
        Self::from_parameters(CurveParameters::new(radius, tubular_segments, p, q))
    }

    /// Creates a new `GenerateCurve` operation from a parameter set.
    #[must_use]
    pub fn from_parameters(parameters: CurveParameters) -> Self {
        Self {
            parameters,
            arc_length_divisions: DEFAULT_ARC_LENGTH_DIVISIONS,
        }
    }

    /// Sets the number of chord segments used for arc-length lookup.
    ///
    /// Raised to at least 3 here, and on execution to 8 per winding of the
    /// larger of `p` and `q`.
    #[must_use]
    pub fn with_arc_length_divisions(mut self, divisions: usize) -> Self {
        self.arc_length_divisions = divisions.max(MIN_ARC_LENGTH_DIVISIONS);
        self
    }

    /// Executes the operation, returning the curve.
    ///
    /// Deterministic: identical inputs always yield identical curves.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::InvalidParameter`] if any shape
    /// parameter is out of domain. No partial curve is produced, and the
    /// returned curve always has a positive total length.
    pub fn execute(&self) -> Result<KnotCurve> {
        let params = self.parameters;
        params.validate()?;
        if !params.is_coprime() {
            tracing::debug!(
                p = params.p,
                q = params.q,
                "winding numbers share a factor; knot repeats sub-loops"
            );
        }

        let knot = TorusKnot::new(params.radius, params.p, params.q)?;
        let windings = usize::try_from(params.p.max(params.q)).unwrap_or(usize::MAX);
        let mut divisions = self
            .arc_length_divisions
            .max(MIN_ARC_LENGTH_DIVISIONS)
            .max(windings.saturating_mul(DIVISIONS_PER_WINDING))
            .min(MAX_ARC_LENGTH_DIVISIONS);

        let mut curve = KnotCurve::from_knot(params, knot.clone(), divisions);
        while curve.total_length() <= TOLERANCE {
            if divisions >= MAX_ARC_LENGTH_DIVISIONS {
                return Err(GeometryError::InvalidParameter {
                    parameter: "arc_length_divisions",
                    value: f64::from(u32::try_from(divisions).unwrap_or(u32::MAX)),
                    constraint: "curve collapsed to zero length",
                }
                .into());
            }
            divisions = (divisions * 2).min(MAX_ARC_LENGTH_DIVISIONS);
            tracing::debug!(divisions, "arc-length table collapsed; refining");
            curve = KnotCurve::from_knot(params, knot.clone(), divisions);
        }
        tracing::debug!(
            radius = params.radius,
            tubular_segments = params.tubular_segments,
            p = params.p,
            q = params.q,
            total_length = curve.total_length(),
            "generated torus-knot curve"
        );
        Ok(curve)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::animation::CurveFollower;
    use crate::error::KnotflowError;
    use crate::math::{Point3, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn generate_is_deterministic() {
        let a = GenerateCurve::new(1.0, 64, 3, 4).execute().unwrap();
        let b = GenerateCurve::new(1.0, 64, 3, 4).execute().unwrap();
        assert_eq!(a.total_length(), b.total_length());
        assert_eq!(a.points(300), b.points(300));
        assert_eq!(a, b);
    }

    #[test]
    fn point_at_zero_matches_formula() {
        let curve = GenerateCurve::new(1.0, 64, 3, 4).execute().unwrap();
        let (point, tangent) = curve.point_and_tangent_at(0.0);
        assert!((point - Point3::new(1.5, 0.0, 0.0)).norm() < TOLERANCE);
        assert_relative_eq!(tangent, Vector3::new(0.0, 9.0, 4.0).normalize(), epsilon = 1e-9);
    }

    #[test]
    fn curve_is_closed() {
        let curve = GenerateCurve::new(1.0, 64, 3, 4).execute().unwrap();
        let start = curve.point_at(0.0);
        let end = curve.point_at(curve.total_length());
        assert!((start - end).norm() < 1e-9);
    }

    #[test]
    fn lookup_is_periodic() {
        let curve = GenerateCurve::new(1.0, 64, 3, 4).execute().unwrap();
        let total = curve.total_length();
        for &d in &[0.1, 1.7, 5.3, total - 0.01, -2.4] {
            let (p0, t0) = curve.point_and_tangent_at(d);
            let (p1, t1) = curve.point_and_tangent_at(d + total);
            assert!((p0 - p1).norm() < 1e-9, "d = {d}");
            assert!((t0 - t1).norm() < 1e-9, "d = {d}");
        }
    }

    #[test]
    fn tangent_is_unit_length() {
        let curve = GenerateCurve::new(2.0, 64, 2, 5).execute().unwrap();
        for i in 0..50 {
            let (_, tangent) = curve.point_and_tangent_at(f64::from(i) * 0.37);
            assert_relative_eq!(tangent.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn more_divisions_converge_on_longer_length() {
        let coarse = GenerateCurve::new(1.0, 64, 3, 4)
            .with_arc_length_divisions(20)
            .execute()
            .unwrap();
        let fine = GenerateCurve::new(1.0, 64, 3, 4)
            .with_arc_length_divisions(2000)
            .execute()
            .unwrap();
        // chord sums underestimate arc length
        assert!(fine.total_length() > coarse.total_length());
    }

    #[test]
    fn single_division_is_not_degenerate() {
        let curve = GenerateCurve::new(1.0, 64, 3, 4)
            .with_arc_length_divisions(1)
            .execute()
            .unwrap();
        assert!(curve.total_length() > 1.0);
        assert!(curve.arc_length_table().divisions() >= 3);

        let mut follower = CurveFollower::new(Arc::new(curve));
        let moved = follower.advance(1.0, 0.15);
        assert!((moved.position - Point3::new(1.5, 0.0, 0.0)).norm() > 1e-3);
    }

    #[test]
    fn high_windings_do_not_alias() {
        // every 200th sample lands on the start point for p = q = 200
        let curve = GenerateCurve::new(1.0, 64, 200, 200).execute().unwrap();
        assert!(curve.arc_length_table().divisions() >= 1600);
        assert!(curve.total_length() > 1.0);
        let moved = curve.point_at(0.15);
        assert!((moved - Point3::new(1.5, 0.0, 0.0)).norm() > 1e-3);
    }

    #[test]
    fn non_coprime_still_closed() {
        let curve = GenerateCurve::new(1.0, 64, 2, 4).execute().unwrap();
        let start = curve.point_at(0.0);
        let end = curve.point_at(curve.total_length());
        assert!((start - end).norm() < 1e-9);
    }

    #[test]
    fn zero_radius_rejected() {
        let err = GenerateCurve::new(0.0, 64, 3, 4).execute().unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn too_few_tubular_segments_rejected() {
        let err = GenerateCurve::new(1.0, 2, 3, 4).execute().unwrap_err();
        match err {
            KnotflowError::Geometry(GeometryError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "tubular_segments");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_winding_rejected() {
        let err = GenerateCurve::new(1.0, 64, 0, 4).execute().unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn negative_radius_rejected() {
        assert!(GenerateCurve::new(-1.0, 64, 3, 4).execute().is_err());
    }
}
