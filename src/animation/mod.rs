mod follower;
mod orbit;
mod transform;

pub use follower::CurveFollower;
pub use orbit::OrbitControls;
pub use transform::Transform;
