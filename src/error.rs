use thiserror::Error;

/// Top-level error type for knotflow.
#[derive(Debug, Error)]
pub enum KnotflowError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors raised while building curves.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid parameter {parameter} = {value}: {constraint}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

/// Errors raised while composing a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to load asset {uri}: {reason}")]
    AssetLoad { uri: String, reason: String },

    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),
}

impl KnotflowError {
    /// Returns `true` if this is a curve [`GeometryError::InvalidParameter`].
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::Geometry(GeometryError::InvalidParameter { .. })
        )
    }
}

/// Convenience type alias for results using [`KnotflowError`].
pub type Result<T> = std::result::Result<T, KnotflowError>;
