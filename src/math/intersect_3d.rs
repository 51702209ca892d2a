use crate::geometry::{Plane, Sphere};

use super::{Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Bounding box of a set of points. Returns an inverted (empty) box for
    /// an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min = min.inf(p);
            max = max.sup(p);
        }
        Self { min, max }
    }

    /// Bounding box of a sphere.
    #[must_use]
    pub fn around_sphere(sphere: &Sphere) -> Self {
        let extent = Vector3::repeat(sphere.radius());
        Self {
            min: sphere.center() - extent,
            max: sphere.center() + extent,
        }
    }

    /// Length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).norm()
    }

    /// Whether two boxes overlap. Touching boxes count as overlapping.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }
}

/// Intersects the line `base + t * direction` with a sphere.
///
/// Returns both parameters `t0 <= t1` when the line passes through the
/// interior, only the parameter of the closest point when it touches the
/// surface and none otherwise. The line touches the sphere when its distance
/// from the center is within `tolerance * radius` of the radius.
#[must_use]
pub fn line_sphere_intersection(
    base: &Point3,
    direction: &Vector3,
    sphere: &Sphere,
    tolerance: f64,
) -> [Option<f64>; 2] {
    let a = direction.norm_squared();
    if a == 0.0 {
        return [None, None];
    }

    let r = sphere.radius();
    let origin_relative = base - sphere.center();
    let closest = -direction.dot(&origin_relative) / a;
    // measured at the closest point, which avoids the cancellation of the
    // quadratic formula for far away bases
    let distance_squared = (origin_relative + direction * closest).norm_squared();

    let outer = r * (1.0 + tolerance);
    if distance_squared > outer * outer {
        return [None, None];
    }

    let inner = r * (1.0 - tolerance);
    if distance_squared >= inner * inner {
        return [Some(closest), None];
    }

    let half_chord = ((r * r - distance_squared) / a).sqrt();
    [Some(closest - half_chord), Some(closest + half_chord)]
}

/// Point of the segment from `start` to `end` closest to `point`.
#[must_use]
pub fn closest_point_on_segment(start: &Point3, end: &Point3, point: &Point3) -> Point3 {
    let direction = end - start;
    let length_squared = direction.norm_squared();
    if length_squared == 0.0 {
        return *start;
    }

    let t = (direction.dot(&(point - start)) / length_squared).clamp(0.0, 1.0);
    start + direction * t
}

/// Whether the sphere properly crosses the plane. A plane within
/// `tolerance * radius` of the surface only touches the sphere.
#[must_use]
pub fn sphere_plane_intersects(sphere: &Sphere, plane: &Plane, tolerance: f64) -> bool {
    let proj = plane.signed_distance(sphere.center());
    proj.abs() < sphere.radius() * (1.0 - tolerance)
}
