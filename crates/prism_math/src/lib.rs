// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod optics;
mod ray;

pub use interval::Interval;
pub use optics::{offset_origin, reflect, refract};
pub use ray::Ray;
