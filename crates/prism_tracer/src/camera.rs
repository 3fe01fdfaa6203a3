//! Camera for primary ray generation.

use std::ops::Range;

use prism_math::{IVec2, Ray, Vec3};

use crate::{RenderError, RenderResult};

/// Pinhole camera looking along the Z axis.
///
/// The screen plane sits at the eye's depth, so a pixel's ray direction is
/// `(x - w/2, y - h/2, -eye.z)` normalized. The camera also selects which
/// part of the output surface is rendered and whether diffuse bounces are
/// sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    eye: Vec3,
    upper_left: IVec2,
    bottom_right: IVec2,
    diffuse_sampling: bool,
}

impl Camera {
    /// Create a camera rendering the region between two screen corners.
    ///
    /// Fails if the eye has zero depth (every center ray would be zero
    /// length) or if the region is empty.
    pub fn new(eye: Vec3, upper_left: IVec2, bottom_right: IVec2) -> RenderResult<Self> {
        if eye.z == 0.0 || !eye.is_finite() {
            return Err(RenderError::DegenerateEye(eye));
        }
        if upper_left.x >= bottom_right.x || upper_left.y >= bottom_right.y {
            return Err(RenderError::InvalidRegion {
                upper_left,
                bottom_right,
            });
        }

        Ok(Self {
            eye,
            upper_left,
            bottom_right,
            diffuse_sampling: false,
        })
    }

    /// Create a camera covering a whole `width` x `height` surface.
    pub fn full_frame(eye: Vec3, width: u32, height: u32) -> RenderResult<Self> {
        Self::new(
            eye,
            IVec2::ZERO,
            IVec2::new(width as i32, height as i32),
        )
    }

    /// Enable or disable stochastic diffuse bounces.
    pub fn with_diffuse_sampling(mut self, enabled: bool) -> Self {
        self.diffuse_sampling = enabled;
        self
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn diffuse_sampling(&self) -> bool {
        self.diffuse_sampling
    }

    pub fn upper_left(&self) -> IVec2 {
        self.upper_left
    }

    pub fn bottom_right(&self) -> IVec2 {
        self.bottom_right
    }

    /// Unit direction from the eye through pixel `(x, y)` of a
    /// `width` x `height` surface.
    pub fn ray_direction(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        let x = x as f32 - (width / 2) as f32;
        let y = y as f32 - (height / 2) as f32;
        Vec3::new(x, y, -self.eye.z).normalize()
    }

    /// Primary ray from the eye through pixel `(x, y)`.
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        Ray::new(self.eye, self.ray_direction(x, y, width, height))
    }

    /// Pixel columns and rows of the render region clipped to the surface.
    pub fn region(&self, width: u32, height: u32) -> (Range<u32>, Range<u32>) {
        (
            clip(self.upper_left.x, self.bottom_right.x, width),
            clip(self.upper_left.y, self.bottom_right.y, height),
        )
    }
}

/// Clip `[start, end)` to `[0, limit)`.
fn clip(start: i32, end: i32, limit: u32) -> Range<u32> {
    let start = start.max(0) as u32;
    let end = end.max(0) as u32;
    let end = end.min(limit);
    start.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_forward() {
        let camera = Camera::full_frame(Vec3::new(0.0, 0.0, -100.0), 100, 100).unwrap();

        let direction = camera.ray_direction(50, 50, 100, 100);
        assert!((direction - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_corner_ray() {
        let camera = Camera::full_frame(Vec3::new(0.0, 0.0, -100.0), 100, 100).unwrap();

        let direction = camera.ray_direction(0, 0, 100, 100);
        let expected = Vec3::new(-50.0, -50.0, 100.0).normalize();
        assert!((direction - expected).length() < 1e-6);
        assert!((direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_odd_size_uses_integer_half() {
        let camera = Camera::full_frame(Vec3::new(0.0, 0.0, 10.0), 5, 5).unwrap();

        // 5 / 2 == 2, so pixel 2 is the center column; eye z = 10 looks down -Z
        let direction = camera.ray_direction(2, 2, 5, 5);
        assert!((direction - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_primary_ray_starts_at_eye() {
        let eye = Vec3::new(3.0, 4.0, -50.0);
        let camera = Camera::full_frame(eye, 10, 10).unwrap();

        assert_eq!(camera.primary_ray(1, 2, 10, 10).origin(), eye);
    }

    #[test]
    fn test_rejects_zero_depth_eye() {
        assert!(matches!(
            Camera::full_frame(Vec3::new(1.0, 2.0, 0.0), 10, 10),
            Err(RenderError::DegenerateEye(_))
        ));
    }

    #[test]
    fn test_rejects_empty_region() {
        let result = Camera::new(Vec3::NEG_Z, IVec2::new(10, 0), IVec2::new(10, 5));
        assert!(matches!(result, Err(RenderError::InvalidRegion { .. })));
    }

    #[test]
    fn test_region_is_clipped_to_surface() {
        let camera = Camera::new(Vec3::NEG_Z, IVec2::new(-20, 5), IVec2::new(500, 40)).unwrap();

        assert_eq!(camera.region(100, 30), (0..100, 5..30));
        // Region entirely outside the surface
        assert_eq!(camera.region(100, 3), (0..100, 3..3));
    }

    #[test]
    fn test_diffuse_sampling_flag() {
        let camera = Camera::full_frame(Vec3::NEG_Z, 1, 1).unwrap();
        assert!(!camera.diffuse_sampling());
        assert!(camera.with_diffuse_sampling(true).diffuse_sampling());
    }
}
