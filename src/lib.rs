pub mod animation;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;

pub use animation::{CurveFollower, OrbitControls, Transform};
pub use error::{KnotflowError, Result};
pub use geometry::{CurveParameters, KnotCurve};
pub use operations::creation::GenerateCurve;
pub use scene::{Scene, SceneConfig};
