//! Surface materials.

use prism_math::Interval;
use serde::{Deserialize, Serialize};

use crate::{Rgb, SceneError, SceneResult};

/// Index of the diffuse bounce weight in [`Material::parameters`].
pub const DIFFUSE: usize = 0;
/// Index of the specular highlight weight.
pub const SPECULAR: usize = 1;
/// Index of the mirror reflectivity.
pub const REFLECTIVITY: usize = 2;
/// Index of the transmission weight.
pub const TRANSMISSION: usize = 3;

/// How a surface responds to light.
///
/// The four weights in `parameters` are independent; nothing forces them
/// to sum to one, so callers pick plausible combinations themselves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base surface color
    pub color: Rgb,

    /// `[diffuse, specular, reflectivity, transmission]`, each in [0, 1]
    pub parameters: [f32; 4],

    /// Index of refraction for transmitted rays (1.0 = air, 1.5 = glass)
    pub refraction_index: f32,

    /// Phong exponent controlling highlight sharpness
    pub specular_highlight: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Rgb::new(128, 128, 128), // Grey default
            parameters: [0.0; 4],
            refraction_index: 1.0,
            specular_highlight: 0.0,
        }
    }
}

impl Material {
    /// Create a validated material.
    pub fn new(
        color: Rgb,
        parameters: [f32; 4],
        refraction_index: f32,
        specular_highlight: f32,
    ) -> SceneResult<Self> {
        let material = Self {
            color,
            parameters,
            refraction_index,
            specular_highlight,
        };
        material.validate()?;
        Ok(material)
    }

    /// A purely lit surface with no highlight, mirror or transmission.
    pub fn matte(color: Rgb) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// A perfect mirror.
    pub fn mirror() -> Self {
        Self {
            color: Rgb::WHITE,
            parameters: [0.0, 0.0, 1.0, 0.0],
            ..Default::default()
        }
    }

    /// A clear dielectric with a small mirror term and a sharp highlight.
    pub fn glass(refraction_index: f32) -> SceneResult<Self> {
        Self::new(Rgb::WHITE, [0.0, 0.3, 0.1, 0.9], refraction_index, 200.0)
    }

    /// Builder: set the diffuse bounce weight.
    pub fn with_diffuse(mut self, weight: f32) -> Self {
        self.parameters[DIFFUSE] = weight;
        self
    }

    /// Builder: set the specular weight and exponent.
    pub fn with_specular(mut self, weight: f32, highlight: f32) -> Self {
        self.parameters[SPECULAR] = weight;
        self.specular_highlight = highlight;
        self
    }

    /// Builder: set the mirror reflectivity.
    pub fn with_reflectivity(mut self, weight: f32) -> Self {
        self.parameters[REFLECTIVITY] = weight;
        self
    }

    /// Check the invariants the shader relies on.
    pub fn validate(&self) -> SceneResult<()> {
        if !(self.refraction_index > 0.0 && self.refraction_index.is_finite()) {
            return Err(SceneError::InvalidRefractionIndex(self.refraction_index));
        }
        if !(self.specular_highlight >= 0.0 && self.specular_highlight.is_finite()) {
            return Err(SceneError::NegativeSpecularExponent(self.specular_highlight));
        }
        for (index, &value) in self.parameters.iter().enumerate() {
            if !Interval::UNIT.contains(value) {
                return Err(SceneError::WeightOutOfRange { index, value });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn diffuse(&self) -> f32 {
        self.parameters[DIFFUSE]
    }

    #[inline]
    pub fn specular(&self) -> f32 {
        self.parameters[SPECULAR]
    }

    #[inline]
    pub fn reflectivity(&self) -> f32 {
        self.parameters[REFLECTIVITY]
    }

    #[inline]
    pub fn transmission(&self) -> f32 {
        self.parameters[TRANSMISSION]
    }
}
