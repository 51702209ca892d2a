//! Closed-form volumes and surface areas of spherical wedges.
//!
//! A general spherical wedge is the part of a sphere enclosed by two planes
//! whose line of intersection passes through the sphere. It is reduced to
//! regularized wedges, bounded by one plane containing the sphere center and a
//! second one through the same line.
//!
//! Ref: Strobl, S., Formella, A., Pöschel, T.: Exact calculation of the
//! overlap volume of spheres and mesh elements, J. Comput. Phys. 311 (2016).
//! Ref: Gibson, K. D., Scheraga, H. A.: Exact calculation of the volume and
//! surface area of fused hard-sphere molecules with unequal atomic radii,
//! Mol. Phys. 62 (1987).

use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::{Plane, Sphere};
use crate::math::vector_3d::{angle, clamp, gram_schmidt};
use crate::math::{Tolerances, Vector3};

/// Which quantity of a sphere region to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Enclosed volume.
    Volume,
    /// Area of the enclosed part of the sphere surface.
    Area,
}

/// Volume of a regularized spherical wedge of a sphere with radius `r`.
///
/// `d` is the distance of the intersection line from the sphere center and
/// `alpha` in `[0, pi/2]` the opening angle measured from the plane through
/// the center. Angles less than `tiny` outside the valid range are clamped.
#[must_use]
pub fn regularized_wedge(r: f64, d: f64, alpha: f64, tiny: f64) -> f64 {
    let alpha = clamp(alpha, 0.0, FRAC_PI_2, tiny);

    debug_assert!(r > 0.0, "invalid radius {r} for regularized wedge");
    debug_assert!((0.0..=r).contains(&d), "invalid distance {d} for regularized wedge");
    debug_assert!(
        (0.0..=FRAC_PI_2).contains(&alpha),
        "invalid angle {alpha} for regularized wedge"
    );

    let (sin_alpha, cos_alpha) = alpha.sin_cos();

    let a = d * sin_alpha;
    let b = (r * r - d * d).abs().sqrt();
    let c = d * cos_alpha;

    (1.0 / 3.0) * a * b * c
        + a * ((1.0 / 3.0) * a * a - r * r) * b.atan2(c)
        + (2.0 / 3.0) * r * r * r * (sin_alpha * b).atan2(cos_alpha * r)
}

/// Volume of a regularized wedge for any `alpha` in `[0, pi]`.
///
/// `z` is the signed distance of the intersection line from the plane
/// through the sphere center, negative values put the line on the far side
/// of that plane.
#[must_use]
pub fn oriented_regularized_wedge(r: f64, d: f64, alpha: f64, z: f64, tiny: f64) -> f64 {
    if z >= 0.0 {
        if alpha > FRAC_PI_2 {
            let h = r - z;
            return (PI / 3.0) * h * h * (3.0 * r - h) - regularized_wedge(r, d, PI - alpha, tiny);
        }
        return regularized_wedge(r, d, alpha, tiny);
    }

    let hemisphere = (2.0 / 3.0) * PI * r * r * r;
    if alpha > FRAC_PI_2 {
        return hemisphere - regularized_wedge(r, d, PI - alpha, tiny);
    }

    let h = r + z;
    let cap = (PI / 3.0) * h * h * (3.0 * r - h);
    hemisphere - (cap - regularized_wedge(r, d, alpha, tiny))
}

/// Outer surface area of a regularized spherical wedge, `alpha` in
/// `[0, pi]`, `z` in `[-r, r]`.
#[must_use]
pub fn regularized_wedge_area(r: f64, z: f64, alpha: f64, tiny: f64) -> f64 {
    let alpha = clamp(alpha, 0.0, PI, tiny);

    debug_assert!(r > 0.0, "invalid radius {r} for regularized wedge area");
    debug_assert!((-r..=r).contains(&z), "invalid height {z} for regularized wedge area");
    debug_assert!(
        (0.0..=PI).contains(&alpha),
        "invalid angle {alpha} for regularized wedge area"
    );

    if alpha < tiny || (r * r - z * z).abs() <= tiny {
        return 0.0;
    }

    let (sin_alpha, cos_alpha) = alpha.sin_cos();
    let factor = 1.0 / (r * r - z * z).abs().sqrt();

    // nearly degenerate wedges from vertex cones push the arguments past
    // the unit interval
    let arg0 = (r * cos_alpha * factor).clamp(-1.0, 1.0);
    let arg1 = ((z * cos_alpha * factor) / sin_alpha).clamp(-1.0, 1.0);

    2.0 * r * (r * arg0.acos() - z * arg1.acos())
}

/// Spherical wedge (volume) or lune (area) with the given dihedral angle,
/// both planes passing through the sphere center.
#[must_use]
pub fn spherical_wedge(sphere: &Sphere, angle: f64, measure: Measure) -> f64 {
    let r = sphere.radius();
    match measure {
        Measure::Area => 2.0 * r * r * angle,
        Measure::Volume => (2.0 / 3.0) * r * r * r * angle,
    }
}

/// Volume or outer surface area of the general spherical wedge cut out by
/// the inner half-spaces of two planes.
///
/// `d` points from the sphere center to the closest point of the line in
/// which the planes intersect (any point on the line gives the same result
/// for the angles involved). Both plane normals point outward.
#[must_use]
pub fn general_wedge(
    sphere: &Sphere,
    p0: &Plane,
    p1: &Plane,
    d: &Vector3,
    measure: Measure,
    tolerances: &Tolerances,
) -> f64 {
    let tiny = tolerances.tiny;
    let r = sphere.radius();
    let (n0, n1) = (p0.normal(), p1.normal());

    let dist = d.norm();
    if dist < tiny {
        // the line touches the center, only the angle matters
        return spherical_wedge(sphere, PI - angle(n0, n1), measure);
    }

    if dist >= r {
        // the planes meet on or outside the sphere surface
        return 0.0;
    }

    let s0 = d.dot(n0);
    let s1 = d.dot(n1);

    // one plane (almost) through the center: a single regularized wedge
    if s0.abs() < tiny || s1.abs() < tiny {
        let alpha = PI - angle(n0, n1);
        let z = if s0.abs() > s1.abs() { s0 } else { s1 };

        return match measure {
            Measure::Area => regularized_wedge_area(r, z, alpha, tiny),
            Measure::Volume => oriented_regularized_wedge(r, dist, alpha, z, tiny),
        };
    }

    let mut d_unit = d / dist;
    if dist < tolerances.large {
        d_unit = gram_schmidt(&n0.cross(n1).normalize(), &d_unit)[1];
    }

    // angles between the direction towards the intersection line and the
    // plane normals
    let mut alpha0 = angle(n0, &d_unit);
    let mut alpha1 = angle(n1, &d_unit);

    let on_line = sphere.center() + d;
    let dir0 = d_unit.dot(&(on_line - p0.center()));
    let dir1 = d_unit.dot(&(on_line - p1.center()));

    if s0 >= 0.0 && s1 >= 0.0 {
        alpha0 = FRAC_PI_2 - alpha0.copysign(dir0);
        alpha1 = FRAC_PI_2 - alpha1.copysign(dir1);

        return match measure {
            Measure::Area => {
                regularized_wedge_area(r, s0, alpha0, tiny) + regularized_wedge_area(r, s1, alpha1, tiny)
            }
            Measure::Volume => {
                oriented_regularized_wedge(r, dist, alpha0, s0, tiny)
                    + oriented_regularized_wedge(r, dist, alpha1, s1, tiny)
            }
        };
    }

    if s0 < 0.0 && s1 < 0.0 {
        alpha0 = FRAC_PI_2 + 1.0_f64.copysign(dir0) * (alpha0 - PI);
        alpha1 = FRAC_PI_2 + 1.0_f64.copysign(dir1) * (alpha1 - PI);

        return match measure {
            Measure::Area => {
                sphere.surface_area()
                    - (regularized_wedge_area(r, -s0, alpha0, tiny)
                        + regularized_wedge_area(r, -s1, alpha1, tiny))
            }
            Measure::Volume => {
                sphere.volume()
                    - (oriented_regularized_wedge(r, dist, alpha0, -s0, tiny)
                        + oriented_regularized_wedge(r, dist, alpha1, -s1, tiny))
            }
        };
    }

    let offset = |s: f64| if s < 0.0 { PI } else { 0.0 };
    alpha0 = FRAC_PI_2 - 1.0_f64.copysign(dir0 * s0) * (alpha0 - offset(s0));
    alpha1 = FRAC_PI_2 - 1.0_f64.copysign(dir1 * s1) * (alpha1 - offset(s1));

    let (part0, part1) = match measure {
        Measure::Area => (
            regularized_wedge_area(r, s0.abs(), alpha0, tiny),
            regularized_wedge_area(r, s1.abs(), alpha1, tiny),
        ),
        Measure::Volume => (
            oriented_regularized_wedge(r, dist, alpha0, s0.abs(), tiny),
            oriented_regularized_wedge(r, dist, alpha1, s1.abs(), tiny),
        ),
    };

    part0.max(part1) - part0.min(part1)
}
