//! Scene model: the primitives, lights and materials a render reads from.
//!
//! A `Scene` is populated once before rendering and is only borrowed
//! immutably while pixels are being shaded.

use prism_math::Vec3;

use crate::{Material, Mesh, Rgb, SceneError, SceneResult};

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> SceneResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(SceneError::NonFinite {
                what: "Sphere center",
                value: center,
            });
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// Arbitrary positive scale
    pub intensity: f32,
    pub color: Rgb,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32, color: Rgb) -> SceneResult<Self> {
        if !(intensity > 0.0 && intensity.is_finite()) {
            return Err(SceneError::InvalidIntensity(intensity));
        }
        if !position.is_finite() {
            return Err(SceneError::NonFinite {
                what: "Light position",
                value: position,
            });
        }
        Ok(Self {
            position,
            intensity,
            color,
        })
    }

    /// A white light.
    pub fn white(position: Vec3, intensity: f32) -> SceneResult<Self> {
        Self::new(position, intensity, Rgb::WHITE)
    }
}

/// Everything a render can see.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh. Meshes are searched in insertion order.
    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    /// Add a sphere. Spheres are searched after all meshes.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Builder: add a mesh.
    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.add_mesh(mesh);
        self
    }

    /// Builder: add a sphere.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add_sphere(sphere);
        self
    }

    /// Builder: add a light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Total number of faces across all meshes.
    pub fn polygon_count(&self) -> usize {
        self.meshes.iter().map(Mesh::len).sum()
    }

    /// Check if the scene has no geometry.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.meshes.iter().all(Mesh::is_empty)
    }
}
