//! JSON scene descriptions.
//!
//! A description holds plain arrays rather than math types so files stay
//! easy to write by hand:
//!
//! ```json
//! {
//!   "image": { "width": 320, "height": 240 },
//!   "camera": { "eye": [0, 0, -400], "diffuse_sampling": false },
//!   "spheres": [
//!     { "center": [0, 0, 300], "radius": 100,
//!       "material": { "color": [200, 40, 40], "parameters": [0, 0.5, 0, 0],
//!                     "refraction_index": 1.0, "specular_highlight": 30 } }
//!   ],
//!   "lights": [ { "position": [200, -200, 0], "intensity": 1.0, "color": [255, 255, 255] } ]
//! }
//! ```

use std::path::Path;

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{Light, Material, Mesh, Rgb, Scene, SceneResult, Sphere};

/// Output surface size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescription {
    pub width: u32,
    pub height: u32,
}

/// Viewpoint and render region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub eye: [f32; 3],

    /// Upper-left corner of the render region (defaults to the image origin)
    #[serde(default)]
    pub upper_left: Option<[i32; 2]>,

    /// Bottom-right corner of the render region (defaults to the image size)
    #[serde(default)]
    pub bottom_right: Option<[i32; 2]>,

    #[serde(default)]
    pub diffuse_sampling: bool,

    /// Recursion depth override
    #[serde(default)]
    pub max_depth: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshDescription {
    pub material: Material,
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: Material,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: [f32; 3],
    pub intensity: f32,
    #[serde(default = "default_light_color")]
    pub color: Rgb,
}

fn default_light_color() -> Rgb {
    Rgb::WHITE
}

/// A complete render setup as stored on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub image: ImageDescription,
    pub camera: CameraDescription,
    #[serde(default)]
    pub meshes: Vec<MeshDescription>,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

impl SceneDescription {
    /// Read a description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Read scene description {} ({} bytes)", path.display(), text.len());
        Self::from_json_str(&text)
    }

    /// Parse a description from a JSON string.
    pub fn from_json_str(text: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every entry and build the scene.
    pub fn build_scene(&self) -> SceneResult<Scene> {
        let mut scene = Scene::new();

        for mesh in &self.meshes {
            mesh.material.validate()?;
            let positions: Vec<Vec3> = mesh
                .positions
                .iter()
                .copied()
                .map(Vec3::from_array)
                .collect();
            scene.add_mesh(Mesh::from_indexed(&positions, &mesh.indices, mesh.material)?);
        }

        for sphere in &self.spheres {
            sphere.material.validate()?;
            scene.add_sphere(Sphere::new(
                Vec3::from_array(sphere.center),
                sphere.radius,
                sphere.material,
            )?);
        }

        for light in &self.lights {
            scene.add_light(Light::new(
                Vec3::from_array(light.position),
                light.intensity,
                light.color,
            )?);
        }

        log::info!(
            "Built scene: {} meshes ({} faces), {} spheres, {} lights",
            scene.meshes().len(),
            scene.polygon_count(),
            scene.spheres().len(),
            scene.lights().len()
        );

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SceneError;

    const SCENE: &str = r#"{
        "image": { "width": 64, "height": 48 },
        "camera": { "eye": [0, 0, -100], "upper_left": [8, 8], "diffuse_sampling": true },
        "meshes": [{
            "material": { "color": [10, 20, 30], "parameters": [0, 0, 0.5, 0],
                          "refraction_index": 1.0, "specular_highlight": 0 },
            "positions": [[-1, -1, 5], [1, -1, 5], [0, 1, 5]],
            "indices": [0, 1, 2]
        }],
        "spheres": [{
            "center": [0, 0, 50], "radius": 10,
            "material": { "color": [200, 0, 0], "parameters": [0, 0.2, 0, 0],
                          "refraction_index": 1.0, "specular_highlight": 20 }
        }],
        "lights": [{ "position": [0, -50, 0], "intensity": 1.5 }]
    }"#;

    #[test]
    fn test_parse_description() {
        let description = SceneDescription::from_json_str(SCENE).unwrap();

        assert_eq!(description.image, ImageDescription { width: 64, height: 48 });
        assert_eq!(description.camera.upper_left, Some([8, 8]));
        assert_eq!(description.camera.bottom_right, None);
        assert!(description.camera.diffuse_sampling);
        assert_eq!(description.camera.max_depth, None);
        assert_eq!(description.meshes[0].material.color, Rgb::new(10, 20, 30));
        assert_eq!(description.lights[0].color, Rgb::WHITE);
    }

    #[test]
    fn test_build_scene() {
        let _ = env_logger::builder().is_test(true).try_init();

        let scene = SceneDescription::from_json_str(SCENE)
            .unwrap()
            .build_scene()
            .unwrap();

        assert_eq!(scene.polygon_count(), 1);
        assert_eq!(scene.spheres()[0].radius, 10.0);
        assert_eq!(scene.lights()[0].intensity, 1.5);
    }

    #[test]
    fn test_build_rejects_invalid_material() {
        let mut description = SceneDescription::from_json_str(SCENE).unwrap();
        description.spheres[0].material.refraction_index = 0.0;

        assert!(matches!(
            description.build_scene(),
            Err(SceneError::InvalidRefractionIndex(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SceneDescription::from_json_str("{ \"image\": 3 }"),
            Err(SceneError::Json(_))
        ));
    }

    #[test]
    fn test_serialize_keeps_colors_as_arrays() {
        let description = SceneDescription::from_json_str(SCENE).unwrap();
        let text = description.to_json_string().unwrap();

        assert!(!text.contains("\"r\""));
        assert_eq!(SceneDescription::from_json_str(&text).unwrap(), description);
    }
}
