//! Intersect trait and nearest-hit search over a scene.

use prism_core::{Material, Scene};
use prism_math::{Interval, Ray, Vec3};

/// Smallest accepted ray parameter.
///
/// Hits closer than this are treated as the ray's own origin surface. It is
/// kept well below the offset applied to secondary ray origins.
pub const T_MIN: f32 = 1e-4;

/// Record of the nearest ray-scene intersection.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal at the intersection (not flipped towards the ray)
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
    /// Distance along the ray
    pub t: f32,
}

/// Trait for primitives that can be hit by rays.
pub trait Intersect {
    /// Return the ray parameter of the nearest intersection strictly inside
    /// `ray_t`, or `None` if the ray misses.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f32>;
}

/// Find the closest primitive along `ray`.
///
/// Every face of every mesh is tested in order, then every sphere. A later
/// primitive replaces the current candidate only when it is strictly
/// closer, so the first one encountered wins ties.
pub fn nearest_hit<'a>(scene: &'a Scene, ray: &Ray) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = f32::INFINITY;

    for mesh in scene.meshes() {
        for polygon in mesh.faces() {
            let interval = Interval::new(T_MIN, closest_so_far);
            if let Some(t) = polygon.intersect(ray, interval) {
                closest_so_far = t;
                closest = Some(Hit {
                    point: ray.at(t),
                    normal: polygon.normal(),
                    material: mesh.material(),
                    t,
                });
            }
        }
    }

    for sphere in scene.spheres() {
        let interval = Interval::new(T_MIN, closest_so_far);
        if let Some(t) = sphere.intersect(ray, interval) {
            closest_so_far = t;
            let point = ray.at(t);
            closest = Some(Hit {
                point,
                normal: sphere.normal_at(point),
                material: &sphere.material,
                t,
            });
        }
    }

    closest
}
