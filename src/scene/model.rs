use std::fmt::Display;

use crate::animation::Transform;
use crate::error::SceneError;
use crate::math::Matrix4;

/// Loads a renderable model asset from a URI.
///
/// Loading happens once, before the first frame; the scene never references
/// an asset that failed or is still pending.
pub trait ModelLoader {
    /// Opaque asset handle owned by the rendering engine.
    type Asset;
    /// Loader-specific failure.
    type Error: Display;

    /// Loads the asset at `uri`, blocking until it resolves.
    ///
    /// # Errors
    ///
    /// Returns the loader's error if the asset cannot be loaded.
    fn load(&self, uri: &str) -> Result<Self::Asset, Self::Error>;
}

impl<F, A, E> ModelLoader for F
where
    F: Fn(&str) -> Result<A, E>,
    E: Display,
{
    type Asset = A;
    type Error = E;

    fn load(&self, uri: &str) -> Result<A, E> {
        self(uri)
    }
}

/// Loads `uri` through `loader`, mapping failures to [`SceneError::AssetLoad`].
pub(crate) fn load_model<L: ModelLoader>(loader: &L, uri: &str) -> Result<L::Asset, SceneError> {
    tracing::info!(uri, "loading model");
    loader.load(uri).map_err(|e| {
        tracing::warn!(uri, error = %e, "model failed to load");
        SceneError::AssetLoad {
            uri: uri.to_owned(),
            reason: e.to_string(),
        }
    })
}

/// A loaded model placed in the scene.
#[derive(Debug, Clone)]
pub struct Model<A> {
    /// Handle returned by the [`ModelLoader`].
    pub asset: A,
    /// URI the asset was loaded from.
    pub uri: String,
    /// Uniform scale baked into the model geometry.
    pub scale: f64,
    /// Placement, rewritten every frame by the follower.
    pub transform: Transform,
}

impl<A> Model<A> {
    /// Returns the model matrix (scale, then orientation, then position).
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        self.transform.to_homogeneous(self.scale)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, UnitQuaternion, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn matrix_scales_then_places_model() {
        let model = Model {
            asset: (),
            uri: "pencil.glb".to_owned(),
            scale: 7.0,
            transform: Transform::new(
                Point3::new(1.5, 0.0, 0.0),
                UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2),
            ),
        };
        // unit +X tip is scaled to 7, turned onto +Y, then offset
        let tip = model.matrix().transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(tip, Point3::new(1.5, 7.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn closure_loader_returns_asset() {
        let loader = |uri: &str| Ok::<_, String>(uri.len());
        assert_eq!(load_model(&loader, "pencil.glb").unwrap(), 10);
    }

    #[test]
    fn failed_load_maps_to_asset_error() {
        let loader = |_: &str| Err::<(), _>("404 not found");
        let err = load_model(&loader, "missing.glb").unwrap_err();
        match err {
            SceneError::AssetLoad { uri, reason } => {
                assert_eq!(uri, "missing.glb");
                assert_eq!(reason, "404 not found");
            }
            other @ SceneError::InvalidConfig(_) => panic!("unexpected error: {other}"),
        }
    }
}
