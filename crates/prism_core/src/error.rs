//! Errors raised while building a scene.

use prism_math::Vec3;
use thiserror::Error;

/// Errors that can occur while constructing or loading scene data.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Refraction index must be positive and finite, got {0}")]
    InvalidRefractionIndex(f32),

    #[error("Material parameter {index} must lie in [0, 1], got {value}")]
    WeightOutOfRange { index: usize, value: f32 },

    #[error("Specular highlight exponent must be finite and not negative, got {0}")]
    NegativeSpecularExponent(f32),

    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Light intensity must be positive and finite, got {0}")]
    InvalidIntensity(f32),

    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: Vec3 },

    #[error("Polygon has zero area")]
    DegeneratePolygon,

    #[error("Vertex index {index} out of range for {len} positions")]
    IndexOutOfRange { index: u32, len: usize },

    #[error("Index count {0} is not a multiple of three")]
    IncompleteTriangle(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene description error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;
