//! Explicit construction of the looping pencil scene.
//!
//! The scene is a fixed object graph built once from a [`SceneConfig`]:
//! camera, orbit controls, environment, backdrop, and a [`CurvyPencil`].
//! The host render loop drives it by calling [`Scene::tick`] once per frame.

mod camera;
mod config;
mod environment;
mod model;
mod pencil;

pub use camera::Camera;
pub use config::{CameraConfig, OrbitConfig, PencilConfig, SceneConfig};
pub use environment::{Backdrop, EnvironmentPreset, Rgb};
pub use model::{Model, ModelLoader};
pub use pencil::CurvyPencil;

use crate::animation::{OrbitControls, Transform};
use crate::error::Result;

/// The composed scene.
#[derive(Debug, Clone)]
pub struct Scene<A> {
    camera: Camera,
    controls: OrbitControls,
    environment: EnvironmentPreset,
    backdrop: Backdrop,
    pencil: CurvyPencil<A>,
    elapsed: f64,
    frames: u64,
}

impl<A> Scene<A> {
    /// Builds the scene, loading the pencil model through `loader` first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SceneError::AssetLoad`] if the model fails to
    /// load, [`crate::error::SceneError::InvalidConfig`] for bad pencil
    /// settings, or [`crate::error::GeometryError::InvalidParameter`] for bad
    /// curve parameters.
    pub fn build<L>(config: &SceneConfig, loader: &L) -> Result<Self>
    where
        L: ModelLoader<Asset = A>,
    {
        config.pencil.validate()?;
        let asset = model::load_model(loader, &config.pencil.model_uri)?;
        let pencil = CurvyPencil::new(&config.pencil, asset)?;

        let camera = Camera::new(config.camera.position, config.camera.fov);
        let controls = OrbitControls {
            target: camera.target,
            auto_rotate: config.orbit.auto_rotate,
            auto_rotate_speed: config.orbit.auto_rotate_speed,
        };

        tracing::info!(
            p = config.pencil.curve.p,
            q = config.pencil.curve.q,
            speed = config.pencil.speed,
            environment = %config.environment,
            curve_length = pencil.curve().total_length(),
            "scene built"
        );

        Ok(Self {
            camera,
            controls,
            environment: config.environment,
            backdrop: config.backdrop,
            pencil,
            elapsed: 0.0,
            frames: 0,
        })
    }

    /// Frame callback: orbits the camera, advances the pencil, and returns
    /// the pencil's new transform.
    ///
    /// `delta` is the time since the previous frame in seconds.
    pub fn tick(&mut self, delta: f64) -> Transform {
        self.controls.update(&mut self.camera, delta);
        let transform = self.pencil.tick(delta);
        self.elapsed += delta;
        self.frames += 1;
        tracing::trace!(
            frame = self.frames,
            position = self.pencil.follower().position(),
            "tick"
        );
        transform
    }

    /// Returns the camera, as last moved by the orbit controls.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the orbit controls driving the camera.
    #[must_use]
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    /// Returns the environment lighting preset.
    #[must_use]
    pub fn environment(&self) -> EnvironmentPreset {
        self.environment
    }

    /// Returns the background gradient.
    #[must_use]
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// Returns the pencil that follows the knot.
    #[must_use]
    pub fn pencil(&self) -> &CurvyPencil<A> {
        &self.pencil
    }

    /// Returns the pencil mutably, e.g. to change its curve or speed.
    pub fn pencil_mut(&mut self) -> &mut CurvyPencil<A> {
        &mut self.pencil
    }

    /// Total time driven through [`Self::tick`].
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of frames ticked.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
