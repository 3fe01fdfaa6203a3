//! Vector formulas for mirror reflection, Snell refraction and secondary
//! ray placement.

use crate::Vec3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with index of refraction `ior`.
///
/// `n` is the outward surface normal. A ray with `v . n < 0` is entering the
/// medium (eta = 1 / ior); otherwise it is leaving it and the normal is
/// flipped (eta = ior). Returns `None` on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, ior: f32) -> Option<Vec3> {
    debug_assert!(ior > 0.0, "refraction index must be positive, got {ior}");

    let cos_i = v.dot(n).clamp(-1.0, 1.0);
    let (cos_i, eta, n) = if cos_i < 0.0 {
        (-cos_i, 1.0 / ior, n)
    } else {
        (cos_i, ior, -n)
    };

    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    Some(eta * v + (eta * cos_i - k.sqrt()) * n)
}

/// Nudge `point` off a surface by `epsilon` along `normal`, on whichever side
/// `direction` leaves from.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3, epsilon: f32) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * epsilon
    } else {
        point + normal * epsilon
    }
}
