use crate::error::{Result, SceneError};
use crate::geometry::CurveParameters;
use crate::math::Point3;

use super::environment::{Backdrop, EnvironmentPreset};

/// Camera placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Initial eye position; the camera always aims at the origin.
    pub position: Point3,
    /// Vertical field of view in degrees.
    pub fov: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Point3::new(10.0, 0.0, 0.0),
            fov: 30.0,
        }
    }
}

/// Orbit-control auto-rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    pub auto_rotate: bool,
    /// See [`crate::animation::OrbitControls::auto_rotate_speed`].
    pub auto_rotate_speed: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: 2.0,
        }
    }
}

impl OrbitConfig {
    /// Auto-rotation counter to a pencil moving at `speed`: `-60 * speed / 2`.
    #[must_use]
    pub fn countering(speed: f64) -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: -60.0 * speed / 2.0,
        }
    }
}

/// The pencil following the knot.
#[derive(Debug, Clone, PartialEq)]
pub struct PencilConfig {
    /// Knot shape; regenerated on [`super::CurvyPencil::set_curve_parameters`].
    pub curve: CurveParameters,
    /// Signed traversal rate in curve-length units per second.
    pub speed: f64,
    pub model_uri: String,
    /// Uniform scale applied to the loaded model.
    pub model_scale: f64,
    /// Draw a closed outline of the curve.
    pub debug: bool,
    /// Outline sample count, independent of `curve.tubular_segments`.
    pub debug_samples: usize,
}

impl Default for PencilConfig {
    fn default() -> Self {
        Self {
            curve: CurveParameters::default(),
            speed: 0.2,
            model_uri: "pencil.glb".to_owned(),
            model_scale: 7.0,
            debug: false,
            debug_samples: 300,
        }
    }
}

impl PencilConfig {
    /// Sets the knot winding numbers.
    #[must_use]
    pub fn with_windings(mut self, p: u32, q: u32) -> Self {
        self.curve.p = p;
        self.curve.q = q;
        self
    }

    /// Sets the full curve parameter set.
    #[must_use]
    pub fn with_curve(mut self, curve: CurveParameters) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the traversal speed.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Enables or disables the debug outline.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Checks the non-curve settings; curve parameters are checked when the
    /// curve is generated.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidConfig`] for a non-finite speed, a
    /// non-positive model scale, or a debug outline with zero samples.
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() {
            return Err(SceneError::InvalidConfig(format!(
                "speed must be finite, got {}",
                self.speed
            ))
            .into());
        }
        if !self.model_scale.is_finite() || self.model_scale <= 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "model scale must be positive, got {}",
                self.model_scale
            ))
            .into());
        }
        if self.debug && self.debug_samples == 0 {
            return Err(SceneError::InvalidConfig(
                "debug outline needs at least one sample".to_owned(),
            )
            .into());
        }
        Ok(())
    }
}

/// Full scene description.
///
/// The default reproduces the looping pencil scene: a (3, 4) knot at speed
/// 0.15 with the camera orbiting against it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    pub environment: EnvironmentPreset,
    pub backdrop: Backdrop,
    pub pencil: PencilConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let pencil = PencilConfig::default().with_windings(3, 4).with_speed(0.15);
        Self {
            camera: CameraConfig::default(),
            orbit: OrbitConfig::countering(pencil.speed),
            environment: EnvironmentPreset::Warehouse,
            backdrop: Backdrop::default(),
            pencil,
        }
    }
}

impl SceneConfig {
    /// Replaces the pencil settings.
    #[must_use]
    pub fn with_pencil(mut self, pencil: PencilConfig) -> Self {
        self.pencil = pencil;
        self
    }

    /// Replaces the camera settings.
    #[must_use]
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    /// Replaces the orbit settings.
    #[must_use]
    pub fn with_orbit(mut self, orbit: OrbitConfig) -> Self {
        self.orbit = orbit;
        self
    }

    /// Replaces the environment preset.
    #[must_use]
    pub fn with_environment(mut self, environment: EnvironmentPreset) -> Self {
        self.environment = environment;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn pencil_defaults() {
        let pencil = PencilConfig::default();
        assert_eq!((pencil.curve.p, pencil.curve.q), (2, 3));
        assert!((pencil.speed - 0.2).abs() < f64::EPSILON);
        assert_eq!(pencil.debug_samples, 300);
        assert!(!pencil.debug);
    }

    #[test]
    fn scene_defaults() {
        let config = SceneConfig::default();
        assert_eq!((config.pencil.curve.p, config.pencil.curve.q), (3, 4));
        assert!((config.pencil.speed - 0.15).abs() < f64::EPSILON);
        assert!((config.orbit.auto_rotate_speed + 4.5).abs() < 1e-12);
        assert!(config.orbit.auto_rotate);
        assert_eq!(config.camera.position, Point3::new(10.0, 0.0, 0.0));
        assert_eq!(config.environment, EnvironmentPreset::Warehouse);
    }

    #[test]
    fn non_finite_speed_rejected() {
        let pencil = PencilConfig::default().with_speed(f64::INFINITY);
        assert!(pencil.validate().is_err());
    }

    #[test]
    fn negative_speed_accepted() {
        let pencil = PencilConfig::default().with_speed(-0.3);
        assert!(pencil.validate().is_ok());
    }

    #[test]
    fn debug_outline_needs_samples() {
        let mut pencil = PencilConfig::default().with_debug(true);
        pencil.debug_samples = 0;
        assert!(pencil.validate().is_err());
        pencil.debug = false;
        assert!(pencil.validate().is_ok());
    }
}
