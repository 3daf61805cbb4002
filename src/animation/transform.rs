use crate::math::{Isometry3, Matrix4, Point3, Rotation3, UnitQuaternion, Vector3};

/// Position and orientation written onto a renderable object each frame.
///
/// The object's local +X axis is its forward direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Point3,
    /// Rotation from local axes into world space.
    pub orientation: UnitQuaternion,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl Transform {
    /// Creates a transform.
    #[must_use]
    pub fn new(position: Point3, orientation: UnitQuaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Creates a transform at `position` whose forward (+X) axis points
    /// along `forward`, rolled so that its +Y axis leans toward `up`.
    ///
    /// The result is undefined (NaN) when `forward` is colinear with `up`.
    #[must_use]
    pub fn looking_along(position: Point3, forward: &Vector3, up: &Vector3) -> Self {
        let x = forward.normalize();
        let y = (up - x * up.dot(&x)).normalize();
        let z = x.cross(&y);
        let rotation = Rotation3::from_basis_unchecked(&[x, y, z]);
        Self::new(position, UnitQuaternion::from_rotation_matrix(&rotation))
    }

    /// Returns the world-space forward (+X) direction.
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        self.orientation * Vector3::x()
    }

    /// Returns the world-space up (+Y) direction.
    #[must_use]
    pub fn up(&self) -> Vector3 {
        self.orientation * Vector3::y()
    }

    /// Converts to a rigid isometry.
    #[must_use]
    pub fn to_isometry(&self) -> Isometry3 {
        Isometry3::from_parts(self.position.coords.into(), self.orientation)
    }

    /// Returns the model matrix with a uniform scale applied before rotation.
    #[must_use]
    pub fn to_homogeneous(&self, scale: f64) -> Matrix4 {
        self.to_isometry().to_homogeneous() * Matrix4::new_scaling(scale)
    }
}
