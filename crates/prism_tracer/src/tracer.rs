//! Recursive shading engine.
//!
//! Implements Whitted-style ray tracing with:
//! - Hard shadows from point lights with distance falloff
//! - Phong-like specular highlights
//! - Mirror reflection and refraction through recursive rays
//! - Optional stochastic diffuse bounces
//!
//! Recursion is bounded by an explicit depth budget that is decremented on
//! every secondary ray.

use prism_core::{Rgb, Scene};
use prism_math::{offset_origin, reflect, refract, Ray, Vec3};
use rand::RngCore;

use crate::hittable::{nearest_hit, Hit};
use crate::sampler::{HemisphereSampler, StratifiedHemisphere};
use crate::Camera;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Recursion budget for primary rays
    pub max_depth: u32,
    /// Offset applied to secondary ray origins along the surface normal
    pub epsilon: f32,
    /// Reference distance of the light falloff curve
    pub falloff_distance: f32,
    /// Color of rays that leave the scene, also used as the unsampled diffuse bounce
    pub ambient: Rgb,
    /// Color returned once the recursion budget is spent
    pub void: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            epsilon: 0.001,
            falloff_distance: 800.0,
            ambient: Rgb::DARK_GRAY,
            void: Rgb::BLACK,
        }
    }
}

impl RenderConfig {
    /// Light attenuation at distance `d`: 1 at the light, decreasing with
    /// distance.
    #[inline]
    pub fn falloff(&self, d: f32) -> f32 {
        self.falloff_distance / (self.falloff_distance + d)
    }
}

/// Per-channel diffuse light and scalar specular light arriving at a hit.
struct DirectLight {
    diffuse: Vec3,
    specular: f32,
}

/// Shading engine bound to one immutable scene.
pub struct Tracer<'a> {
    scene: &'a Scene,
    config: RenderConfig,
    diffuse_sampling: bool,
    sampler: Box<dyn HemisphereSampler>,
}

impl<'a> Tracer<'a> {
    /// Create a tracer for `scene` using the camera's diffuse sampling
    /// setting and the default configuration.
    pub fn new(scene: &'a Scene, camera: &Camera) -> Self {
        log::debug!(
            "Tracer over {} faces, {} spheres, {} lights (diffuse sampling: {})",
            scene.polygon_count(),
            scene.spheres().len(),
            scene.lights().len(),
            camera.diffuse_sampling()
        );

        Self {
            scene,
            config: RenderConfig::default(),
            diffuse_sampling: camera.diffuse_sampling(),
            sampler: Box::new(StratifiedHemisphere::default()),
        }
    }

    /// Set the render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the diffuse bounce sampler.
    pub fn with_sampler(mut self, sampler: impl HemisphereSampler + 'static) -> Self {
        self.sampler = Box::new(sampler);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Compute the color seen along `ray` with `depth` levels of recursion
    /// left, sampling diffuse bounces if the tracer's camera enables them.
    ///
    /// `rng` only feeds diffuse bounce sampling; everything else is a pure
    /// function of the scene.
    pub fn shade(&self, ray: &Ray, depth: u32, rng: &mut dyn RngCore) -> Rgb {
        self.trace(ray, depth, self.diffuse_sampling, rng)
    }

    /// Like [`Tracer::shade`], but diffuse sampling follows `camera` instead
    /// of the camera the tracer was built with.
    pub fn shade_for(
        &self,
        camera: &Camera,
        ray: &Ray,
        depth: u32,
        rng: &mut dyn RngCore,
    ) -> Rgb {
        self.trace(ray, depth, camera.diffuse_sampling(), rng)
    }

    fn trace(&self, ray: &Ray, depth: u32, diffuse_sampling: bool, rng: &mut dyn RngCore) -> Rgb {
        if depth == 0 {
            return self.config.void;
        }

        debug_assert!(
            ray.direction().is_normalized(),
            "ray direction {} is not unit length",
            ray.direction()
        );

        match nearest_hit(self.scene, ray) {
            Some(hit) => {
                let channels = self.surface_color(ray, &hit, depth, diffuse_sampling, rng);
                Rgb::from_channels(channels)
            }
            None => self.config.ambient,
        }
    }

    /// Unclamped channel values at a hit.
    fn surface_color(
        &self,
        ray: &Ray,
        hit: &Hit<'_>,
        depth: u32,
        diffuse_sampling: bool,
        rng: &mut dyn RngCore,
    ) -> Vec3 {
        let material = hit.material;
        let direction = ray.direction();

        let refraction = if material.transmission() > 0.0 {
            let refracted = refract(direction, hit.normal, material.refraction_index)
                .unwrap_or_else(|| reflect(direction, hit.normal))
                .normalize();
            self.trace_secondary(hit, refracted, depth, diffuse_sampling, rng)
                .to_vec3()
                * material.transmission()
        } else {
            Vec3::ZERO
        };

        let reflection = if material.reflectivity() > 0.0 {
            let reflected = reflect(direction, hit.normal);
            self.trace_secondary(hit, reflected, depth, diffuse_sampling, rng).to_vec3()
                * material.reflectivity()
                * (1.0 - material.transmission())
        } else {
            Vec3::ZERO
        };

        let bounce = if material.diffuse() > 0.0 && diffuse_sampling {
            self.diffuse_bounce(hit, depth, rng)
        } else {
            self.config.ambient
        };

        let light = self.direct_light(ray, hit);

        let lit = material.color.to_vec3()
            * (1.0 - material.diffuse())
            * light.diffuse
            * (1.0 - material.reflectivity())
            * (1.0 - material.transmission())
            + bounce.to_vec3() * material.diffuse();
        let specular = 255.0 * light.specular * material.specular();

        lit + Vec3::splat(specular) + reflection + refraction
    }

    /// Recurse along `direction` from just off the hit surface.
    fn trace_secondary(
        &self,
        hit: &Hit<'_>,
        direction: Vec3,
        depth: u32,
        diffuse_sampling: bool,
        rng: &mut dyn RngCore,
    ) -> Rgb {
        let origin = offset_origin(hit.point, hit.normal, direction, self.config.epsilon);
        self.trace(&Ray::new(origin, direction), depth - 1, diffuse_sampling, rng)
    }

    /// Average color of a batch of hemisphere rays, truncated per channel.
    fn diffuse_bounce(&self, hit: &Hit<'_>, depth: u32, rng: &mut dyn RngCore) -> Rgb {
        let directions = self.sampler.sample(hit.normal, rng);
        let Some(&first) = directions.first() else {
            return self.config.ambient;
        };

        // All samples share the first one's side of the surface
        let origin = offset_origin(hit.point, hit.normal, first, self.config.epsilon);

        let mut sum = [0u32; 3];
        for &direction in &directions {
            let color = self.trace(&Ray::new(origin, direction), depth - 1, true, rng);
            sum[0] += color.r as u32;
            sum[1] += color.g as u32;
            sum[2] += color.b as u32;
        }

        let count = directions.len() as u32;
        Rgb::new(
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
        )
    }

    /// Sum the unoccluded contribution of every light.
    fn direct_light(&self, ray: &Ray, hit: &Hit<'_>) -> DirectLight {
        let mut total = DirectLight {
            diffuse: Vec3::ZERO,
            specular: 0.0,
        };

        for light in self.scene.lights() {
            let to_light = light.position - hit.point;
            let light_distance = to_light.length();
            // A light sitting on the surface has no direction
            let Some(light_dir) = to_light.try_normalize() else {
                continue;
            };

            let shadow_origin =
                offset_origin(hit.point, hit.normal, light_dir, self.config.epsilon);
            if self.is_occluded(shadow_origin, light_dir, light_distance) {
                continue;
            }

            let intensity = self.config.falloff(light_distance)
                * light.intensity
                * light_dir.dot(hit.normal).max(0.0);
            total.diffuse += light.color.to_vec3() / 255.0 * intensity;

            let highlight = reflect(light_dir, hit.normal)
                .dot(ray.direction())
                .max(0.0)
                .powf(hit.material.specular_highlight);
            total.specular += highlight * light.intensity;
        }

        total
    }

    /// Whether anything lies between `origin` and a light `light_distance` away.
    fn is_occluded(&self, origin: Vec3, light_dir: Vec3, light_distance: f32) -> bool {
        nearest_hit(self.scene, &Ray::new(origin, light_dir))
            .is_some_and(|blocker| blocker.point.distance(origin) < light_distance)
    }
}
