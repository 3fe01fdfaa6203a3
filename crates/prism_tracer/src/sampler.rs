//! Hemisphere sampling for diffuse bounces.

use std::f32::consts::TAU;

use prism_math::Vec3;
use rand::{Rng, RngCore};

/// Uniform random float in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Source of diffuse bounce directions.
pub trait HemisphereSampler: Send + Sync {
    /// Produce a batch of unit directions in the hemisphere around the unit
    /// `normal` (every direction `d` satisfies `d . normal > 0`).
    fn sample(&self, normal: Vec3, rng: &mut dyn RngCore) -> Vec<Vec3>;
}

/// Stratified sampler: the azimuth is split into equal sectors and each
/// sector receives the same number of jittered directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StratifiedHemisphere {
    pub azimuth_steps: u32,
    pub samples_per_step: u32,
}

impl Default for StratifiedHemisphere {
    fn default() -> Self {
        Self {
            azimuth_steps: 4,
            samples_per_step: 8,
        }
    }
}

impl StratifiedHemisphere {
    pub fn new(azimuth_steps: u32, samples_per_step: u32) -> Self {
        Self {
            azimuth_steps,
            samples_per_step,
        }
    }

    /// Number of directions produced per call.
    pub fn sample_count(&self) -> usize {
        (self.azimuth_steps * self.samples_per_step) as usize
    }
}

impl HemisphereSampler for StratifiedHemisphere {
    fn sample(&self, normal: Vec3, rng: &mut dyn RngCore) -> Vec<Vec3> {
        let mut directions = Vec::with_capacity(self.sample_count());
        let sectors = self.azimuth_steps as f32;

        for step in 0..self.azimuth_steps {
            for _ in 0..self.samples_per_step {
                let phi = TAU * (step as f32 + gen_f32(rng)) / sectors;
                // (0, 1] keeps grazing directions off the tangent plane
                let cos_theta = 1.0 - gen_f32(rng);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
                let local = Vec3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta);
                directions.push(to_world(local, normal));
            }
        }

        directions
    }
}

/// A fixed set of directions given in a local frame where +Z is the normal.
///
/// Deterministic; mostly useful in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDirections {
    local: Vec<Vec3>,
}

impl FixedDirections {
    pub fn new(local: Vec<Vec3>) -> Self {
        Self {
            local: local.into_iter().map(Vec3::normalize).collect(),
        }
    }
}

impl HemisphereSampler for FixedDirections {
    fn sample(&self, normal: Vec3, _rng: &mut dyn RngCore) -> Vec<Vec3> {
        self.local.iter().map(|&d| to_world(d, normal)).collect()
    }
}

/// Map a direction from the normal's local frame (+Z up) to world space.
fn to_world(local: Vec3, normal: Vec3) -> Vec3 {
    let (tangent, bitangent) = normal.any_orthonormal_pair();
    (tangent * local.x + bitangent * local.y + normal * local.z).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_stratified_directions_in_hemisphere() {
        let sampler = StratifiedHemisphere::default();
        let mut rng = StdRng::seed_from_u64(42);

        for normal in [Vec3::Z, Vec3::NEG_Y, Vec3::new(1.0, -2.0, 0.5).normalize()] {
            let directions = sampler.sample(normal, &mut rng);

            assert_eq!(directions.len(), 32);
            for d in directions {
                assert!((d.length() - 1.0).abs() < 1e-4);
                assert!(d.dot(normal) > 0.0, "{:?} not above {:?}", d, normal);
            }
        }
    }

    #[test]
    fn test_stratified_covers_every_sector() {
        let sampler = StratifiedHemisphere::new(4, 2);
        let mut rng = StdRng::seed_from_u64(7);
        let directions = sampler.sample(Vec3::Z, &mut rng);
        let (tangent, bitangent) = Vec3::Z.any_orthonormal_pair();

        let mut hits = [0; 4];
        for d in directions {
            let phi = d.dot(bitangent).atan2(d.dot(tangent)).rem_euclid(TAU);
            hits[(phi / (TAU / 4.0)) as usize % 4] += 1;
        }
        assert_eq!(hits, [2, 2, 2, 2]);
    }

    #[test]
    fn test_fixed_directions_follow_normal() {
        let sampler = FixedDirections::new(vec![Vec3::Z, Vec3::new(1.0, 0.0, 1.0)]);
        let mut rng = StdRng::seed_from_u64(0);

        let directions = sampler.sample(Vec3::NEG_X, &mut rng);
        assert!((directions[0] - Vec3::NEG_X).length() < 1e-6);
        assert!((directions[1].dot(Vec3::NEG_X) - 0.5_f32.sqrt()).abs() < 1e-5);
    }
}
