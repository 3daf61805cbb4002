use crate::math::{Isometry3, Matrix4, Point3, Vector3};

/// Perspective camera aimed at a target point, with world +Y as up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space eye position.
    pub position: Point3,
    /// Point the camera looks at.
    pub target: Point3,
    /// Vertical field of view in degrees.
    pub fov: f64,
    /// Near clipping distance.
    pub near: f64,
    /// Far clipping distance.
    pub far: f64,
}

impl Camera {
    /// Creates a camera at `position` looking at the origin.
    #[must_use]
    pub fn new(position: Point3, fov: f64) -> Self {
        Self {
            position,
            target: Point3::origin(),
            fov,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Returns the world-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        Isometry3::look_at_rh(&self.position, &self.target, &Vector3::y()).to_homogeneous()
    }

    /// Returns the perspective projection for a viewport aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f64) -> Matrix4 {
        Matrix4::new_perspective(aspect, self.fov.to_radians(), self.near, self.far)
    }

    /// Returns the distance from the camera to its target.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.position - self.target).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn view_matrix_puts_target_in_front() {
        let cam = Camera::new(Point3::new(10.0, 0.0, 0.0), 30.0);
        let p = cam.view_matrix().transform_point(&Point3::origin());
        // right-handed view space looks down -Z
        assert_relative_eq!(p, Point3::new(0.0, 0.0, -10.0), epsilon = 1e-12);
    }

    #[test]
    fn distance_to_target() {
        let cam = Camera::new(Point3::new(3.0, 4.0, 0.0), 30.0);
        assert_relative_eq!(cam.distance(), 5.0);
    }

    #[test]
    fn projection_uses_fov_in_degrees() {
        let cam = Camera::new(Point3::new(10.0, 0.0, 0.0), 90.0);
        let m = cam.projection_matrix(1.0);
        // cot(45 deg) = 1
        assert_relative_eq!(m[(1, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[(0, 0)], 1.0, epsilon = 1e-12);
    }
}
