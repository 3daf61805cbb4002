/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Unit quaternion used for orientations.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// 3x3 rotation matrix.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Rigid transform (rotation followed by translation).
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Greatest common divisor of two unsigned integers.
#[must_use]
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
