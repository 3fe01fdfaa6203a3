//! Ray-triangle intersection for mesh faces.
//!
//! Uses the Möller-Trumbore algorithm.

use crate::hittable::Intersect;
use prism_core::Polygon;
use prism_math::{Interval, Ray};

impl Intersect for Polygon {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let [v0, v1, v2] = *self.vertices();
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < 1e-8 {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - v0;
        let u = f * s.dot(h);

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        ray_t.surrounds(t).then_some(t)
    }
}
