use std::f64::consts::TAU;

use crate::math::{Point3, UnitQuaternion, Vector3};
use crate::scene::Camera;

/// Orbit controls reduced to their autonomous part: auto-rotation of the
/// camera about the world +Y axis around a target.
///
/// At `auto_rotate_speed = 2.0` a full orbit takes 30 seconds; negative
/// speeds orbit the other way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    /// Point the camera orbits around and stays aimed at.
    pub target: Point3,
    /// Whether [`Self::update`] moves the camera at all.
    pub auto_rotate: bool,
    /// Orbits per 60 seconds. Positive values decrease the camera azimuth
    /// `atan2(x, z)`.
    pub auto_rotate_speed: f64,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Point3::origin(),
            auto_rotate: false,
            auto_rotate_speed: 2.0,
        }
    }
}

impl OrbitControls {
    /// Creates auto-rotating controls around `target`.
    #[must_use]
    pub fn auto_rotating(target: Point3, auto_rotate_speed: f64) -> Self {
        Self {
            target,
            auto_rotate: true,
            auto_rotate_speed,
        }
    }

    /// Rotation angle applied for a frame of `delta` seconds.
    #[must_use]
    pub fn rotation_angle(&self, delta: f64) -> f64 {
        TAU / 60.0 * self.auto_rotate_speed * delta
    }

    /// Orbits `camera` for one frame and re-aims it at the target.
    pub fn update(&self, camera: &mut Camera, delta: f64) {
        camera.target = self.target;
        if !self.auto_rotate {
            return;
        }
        // positive speed decreases the azimuth
        let rotation =
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -self.rotation_angle(delta));
        let offset = camera.position - self.target;
        camera.position = self.target + rotation * offset;
    }
}
