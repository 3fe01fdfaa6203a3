//! Prism tracer - Whitted-style CPU ray tracing
//!
//! Shades one primary ray per pixel against a [`prism_core::Scene`] of
//! triangle meshes, spheres and point lights. Secondary rays cover shadows,
//! mirror reflection, refraction and an optional stochastic diffuse bounce.
//!
//! ```ignore
//! let camera = Camera::full_frame(Vec3::new(0.0, 0.0, -400.0), 640, 480)?;
//! let tracer = Tracer::new(&scene, &camera);
//! let mut image = ImageBuffer::new(640, 480);
//! render(&tracer, &camera, &mut image, &mut rand::thread_rng(), None);
//! image.save_png("out.png")?;
//! ```

mod camera;
mod error;
mod hittable;
mod polygon;
mod renderer;
mod sampler;
mod sphere;
mod tracer;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{nearest_hit, Hit, Intersect, T_MIN};
pub use renderer::{render, render_pixel, ImageBuffer, RenderStats};
pub use sampler::{gen_f32, FixedDirections, HemisphereSampler, StratifiedHemisphere};
pub use tracer::{RenderConfig, Tracer};

/// Re-export common math types from prism_math
pub use prism_math::{Interval, Ray, Vec3};
