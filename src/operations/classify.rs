use tracing::trace;

use crate::geometry::{Element, Sphere};
use crate::math::intersect_3d::Aabb;
use crate::math::Tolerances;

/// Configuration of a sphere relative to an element.
///
/// The variants are mutually exclusive and checked in declaration order, so
/// every pair falls into exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// The bounding boxes do not overlap or a face plane separates the
    /// sphere from the element. Touching counts as disjoint.
    Disjoint,
    /// The sphere lies inside the element, possibly touching faces from
    /// within.
    SphereInElement,
    /// Every vertex of the element lies inside the sphere or on its surface.
    ElementInSphere,
    /// Partial overlap, handled by the general decomposition.
    General,
}

/// Classifies a sphere/element pair with cheap bounding tests.
#[must_use]
pub fn classify(sphere: &Sphere, element: &Element) -> Regime {
    classify_with_tolerances(sphere, element, &Tolerances::default())
}

/// Classifies a sphere/element pair. Face planes and vertices within
/// `tolerances.boundary` of the sphere surface count as touching it.
#[must_use]
pub fn classify_with_tolerances(sphere: &Sphere, element: &Element, tolerances: &Tolerances) -> Regime {
    let regime = classify_inner(sphere, element, tolerances.boundary);
    trace!(?regime, kind = %element.kind(), "classified sphere/element pair");
    regime
}

fn classify_inner(sphere: &Sphere, element: &Element, band: f64) -> Regime {
    if !Aabb::around_sphere(sphere).intersects(&element.aabb()) {
        return Regime::Disjoint;
    }

    let reach = sphere.radius() * (1.0 - band);
    let mut inside_all = true;
    for face in element.faces() {
        let dist = face.plane().signed_distance(sphere.center());
        if dist >= reach {
            return Regime::Disjoint;
        }
        inside_all &= dist <= -reach;
    }

    if inside_all {
        return Regime::SphereInElement;
    }

    if element.vertices().iter().all(|v| sphere.contains_within(v, band)) {
        return Regime::ElementInSphere;
    }

    Regime::General
}
