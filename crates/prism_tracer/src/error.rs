//! Errors raised while setting up or writing a render.

use prism_math::{IVec2, Vec3};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Eye position {0} has zero depth; camera rays would be degenerate")]
    DegenerateEye(Vec3),

    #[error("Render region {upper_left} .. {bottom_right} is empty")]
    InvalidRegion { upper_left: IVec2, bottom_right: IVec2 },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
