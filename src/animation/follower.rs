use std::sync::Arc;

use crate::geometry::KnotCurve;
use crate::math::Vector3;

use super::Transform;

/// Moves a point along a [`KnotCurve`] by arc length, one step per frame.
///
/// `position` starts at zero and is always kept in `[0, total_length)`.
/// There is no paused or stopped state; stop calling [`Self::advance`] to
/// stop the motion.
///
/// The default up vector is the knot's symmetry axis (+Z), which the knot
/// tangent never lines up with. A custom up vector colinear with the tangent
/// yields an undefined orientation.
#[derive(Debug, Clone)]
pub struct CurveFollower {
    curve: Arc<KnotCurve>,
    position: f64,
    up: Vector3,
}

impl CurveFollower {
    /// Creates a follower at the start of `curve`.
    ///
    /// The curve must have non-zero length.
    #[must_use]
    pub fn new(curve: Arc<KnotCurve>) -> Self {
        Self {
            curve,
            position: 0.0,
            up: Vector3::z(),
        }
    }

    /// Sets the up vector used to roll the orientation.
    #[must_use]
    pub fn with_up(mut self, up: Vector3) -> Self {
        self.up = up;
        self
    }

    /// Returns the current offset along the curve.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns the followed curve.
    #[must_use]
    pub fn curve(&self) -> &Arc<KnotCurve> {
        &self.curve
    }

    /// Advances by `delta * speed` along the curve, wrapping at the ends, and
    /// returns the resulting transform.
    ///
    /// `delta` is the frame time in seconds and is not clamped. A negative
    /// `speed` moves backwards.
    pub fn advance(&mut self, delta: f64, speed: f64) -> Transform {
        self.position = self.curve.wrap_distance(self.position + delta * speed);
        self.transform()
    }

    /// Advances like [`Self::advance`] and writes the result onto `target`.
    pub fn advance_onto(&mut self, delta: f64, speed: f64, target: &mut Transform) {
        *target = self.advance(delta, speed);
    }

    /// Returns the transform at the current position without advancing.
    #[must_use]
    pub fn transform(&self) -> Transform {
        let (point, tangent) = self.curve.point_and_tangent_at(self.position);
        Transform::looking_along(point, &tangent, &self.up)
    }
}
