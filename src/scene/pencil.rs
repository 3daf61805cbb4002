use std::sync::Arc;

use crate::animation::{CurveFollower, Transform};
use crate::error::Result;
use crate::geometry::{CurveParameters, KnotCurve, Polyline};
use crate::operations::creation::GenerateCurve;

use super::config::PencilConfig;
use super::model::Model;

/// Scene node: a model riding a torus-knot curve, with an optional debug
/// outline of the curve.
#[derive(Debug, Clone)]
pub struct CurvyPencil<A> {
    follower: CurveFollower,
    speed: f64,
    debug_samples: Option<usize>,
    outline: Option<Polyline>,
    model: Model<A>,
}

impl<A> CurvyPencil<A> {
    /// Builds the node around an already loaded model asset.
    ///
    /// # Errors
    ///
    /// Returns an error if the pencil settings or curve parameters are
    /// invalid.
    pub fn new(config: &PencilConfig, asset: A) -> Result<Self> {
        config.validate()?;
        let curve = Arc::new(GenerateCurve::from_parameters(config.curve).execute()?);
        let debug_samples = config.debug.then_some(config.debug_samples);
        let follower = CurveFollower::new(curve);

        let model = Model {
            asset,
            uri: config.model_uri.clone(),
            scale: config.model_scale,
            transform: follower.transform(),
        };

        let mut pencil = Self {
            follower,
            speed: config.speed,
            debug_samples,
            outline: None,
            model,
        };
        pencil.rebuild_outline();
        Ok(pencil)
    }

    /// Per-frame update: moves the model `delta * speed` along the curve.
    pub fn tick(&mut self, delta: f64) -> Transform {
        self.follower
            .advance_onto(delta, self.speed, &mut self.model.transform);
        self.model.transform
    }

    /// Regenerates the curve from new shape parameters.
    ///
    /// The follower restarts at the beginning of the new curve. On error the
    /// node is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::InvalidParameter`] for
    /// out-of-domain parameters.
    pub fn set_curve_parameters(&mut self, parameters: CurveParameters) -> Result<()> {
        if *self.curve().parameters() == parameters {
            return Ok(());
        }
        let curve = Arc::new(GenerateCurve::from_parameters(parameters).execute()?);
        self.follower = CurveFollower::new(curve);
        self.model.transform = self.follower.transform();
        self.rebuild_outline();
        Ok(())
    }

    fn rebuild_outline(&mut self) {
        self.outline = self
            .debug_samples
            .map(|samples| self.follower.curve().outline(samples));
    }

    /// Returns the curve being followed.
    #[must_use]
    pub fn curve(&self) -> &Arc<KnotCurve> {
        self.follower.curve()
    }

    /// Returns the follower state.
    #[must_use]
    pub fn follower(&self) -> &CurveFollower {
        &self.follower
    }

    /// Returns the traversal speed.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Sets the traversal speed; takes effect on the next tick.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Returns the debug outline, if enabled.
    #[must_use]
    pub fn outline(&self) -> Option<&Polyline> {
        self.outline.as_ref()
    }

    /// Returns the placed model.
    #[must_use]
    pub fn model(&self) -> &Model<A> {
        &self.model
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn model_starts_at_curve_origin() {
        let pencil = CurvyPencil::new(&PencilConfig::default(), ()).unwrap();
        assert_relative_eq!(
            pencil.model().transform.position,
            Point3::new(1.5, 0.0, 0.0),
            epsilon = 1e-10
        );
        assert!(pencil.outline().is_none());
    }

    #[test]
    fn tick_writes_model_transform() {
        let config = PencilConfig::default().with_windings(3, 4).with_speed(0.15);
        let mut pencil = CurvyPencil::new(&config, ()).unwrap();
        let t = pencil.tick(1.0);
        assert_eq!(pencil.model().transform, t);
        assert_relative_eq!(pencil.follower().position(), 0.15, epsilon = 1e-15);
    }

    #[test]
    fn model_matrix_tracks_follower() {
        let config = PencilConfig::default().with_windings(3, 4).with_speed(0.15);
        let mut pencil = CurvyPencil::new(&config, ()).unwrap();
        let t = pencil.tick(1.0);
        let matrix = pencil.model().matrix();
        let origin = matrix.transform_point(&Point3::origin());
        let tip = matrix.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(origin, t.position, epsilon = 1e-12);
        assert_relative_eq!(tip - origin, t.forward() * config.model_scale, epsilon = 1e-9);
    }

    #[test]
    fn debug_outline_uses_its_own_sample_count() {
        let config = PencilConfig::default().with_debug(true);
        let pencil = CurvyPencil::new(&config, ()).unwrap();
        let outline = pencil.outline().unwrap();
        assert_eq!(outline.points.len(), 300);
        assert!(outline.closed);
        assert_eq!(pencil.curve().tubular_points().len(), 64);
    }

    #[test]
    fn invalid_curve_fails_construction() {
        let mut config = PencilConfig::default();
        config.curve.tubular_segments = 2;
        let err = CurvyPencil::new(&config, ()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn new_parameters_restart_follower() {
        let config = PencilConfig::default().with_debug(true);
        let mut pencil = CurvyPencil::new(&config, ()).unwrap();
        pencil.tick(2.0);
        assert!(pencil.follower().position() > 0.0);

        pencil
            .set_curve_parameters(CurveParameters::new(2.0, 64, 3, 4))
            .unwrap();
        assert!(pencil.follower().position().abs() < f64::EPSILON);
        assert_eq!(pencil.curve().parameters().p, 3);
        assert_relative_eq!(
            pencil.model().transform.position,
            Point3::new(3.0, 0.0, 0.0),
            epsilon = 1e-10
        );
        assert_eq!(pencil.outline().unwrap().points.len(), 300);
    }

    #[test]
    fn rejected_parameters_leave_node_unchanged() {
        let mut pencil = CurvyPencil::new(&PencilConfig::default(), ()).unwrap();
        pencil.tick(1.0);
        let before = pencil.follower().position();
        assert!(pencil
            .set_curve_parameters(CurveParameters::new(0.0, 64, 3, 4))
            .is_err());
        assert!((pencil.follower().position() - before).abs() < f64::EPSILON);
        assert_eq!(pencil.curve().parameters().q, 3);
    }
}
