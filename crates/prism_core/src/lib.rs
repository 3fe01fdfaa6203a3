//! Prism Core - scene model for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Mesh`, `Polygon`, `Sphere`, `Light`
//! - **Shading inputs**: `Material`, `Rgb`
//! - **Scene descriptions**: JSON loading via `SceneDescription`
//!
//! # Example
//!
//! ```ignore
//! use prism_core::SceneDescription;
//!
//! let description = SceneDescription::load("scene.json")?;
//! let scene = description.build_scene()?;
//! println!("Loaded {} faces, {} spheres",
//!     scene.polygon_count(),
//!     scene.spheres().len());
//! ```

pub mod color;
pub mod description;
pub mod error;
pub mod material;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use color::Rgb;
pub use description::SceneDescription;
pub use error::{SceneError, SceneResult};
pub use material::Material;
pub use mesh::{Mesh, Polygon};
pub use scene::{Light, Scene, Sphere};
