use std::f64::consts::PI;

use super::{Point3, Vector3};

/// Angle between two unit vectors.
///
/// Uses the half-chord formulation, which stays accurate for nearly
/// parallel and nearly anti-parallel vectors where `acos(u . v)` does not.
/// Ref: <http://www.plunk.org/~hatch/rightway.html>
#[must_use]
pub fn angle(u: &Vector3, v: &Vector3) -> f64 {
    if u.dot(v) < 0.0 {
        return PI - 2.0 * (0.5 * (-v - u).norm()).asin();
    }

    2.0 * (0.5 * (v - u).norm()).asin()
}

/// Orthonormalizes `v1` against the unit vector `v0` (Gram-Schmidt).
///
/// Both inputs must be normalized.
#[must_use]
pub fn gram_schmidt(v0: &Vector3, v1: &Vector3) -> [Vector3; 2] {
    debug_assert!((v0.norm() - 1.0).abs() < 1e-12, "v0 must be normalized");
    debug_assert!((v1.norm() - 1.0).abs() < 1e-12, "v1 must be normalized");

    [*v0, (v1 - v0 * v1.dot(v0)).normalize()]
}

/// Clamps `value` to `[min, max]` only if it lies less than `tolerance`
/// outside of the range. Values further away are returned unchanged.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64, tolerance: f64) -> f64 {
    debug_assert!(min <= max && tolerance >= 0.0, "invalid arguments for clamp()");

    if value < min && value > min - tolerance {
        return min;
    }
    if value > max && value < max + tolerance {
        return max;
    }
    value
}

/// Normal of a polygon by Newell's method around a precomputed center.
///
/// Returns the unnormalized sum if its length is negligible compared to its
/// largest component (degenerate polygon).
/// Ref: Christer Ericson, Real-Time Collision Detection (2005).
#[must_use]
pub fn normal_newell(points: &[Point3], center: &Point3) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        normal += (points[i] - center).cross(&(points[(i + 1) % n] - center));
    }

    let scale = normal.amax();
    let length = normal.norm();
    if length > scale * f64::EPSILON {
        return normal / length;
    }
    normal
}
