use tracing::{debug, warn};

use crate::geometry::{Element, Sphere};
use crate::math::Tolerances;

use super::classify::{classify_with_tolerances, Regime};
use super::intersections::{edge_wedge, UnitSphereIntersections};
use super::vertex_cone::vertex_cone_correction;
use super::wedge::Measure;

/// Computes the exact volume of the intersection of a sphere and an element.
///
/// The result lies in `[0, min(sphere.volume(), element.volume())]`.
#[derive(Debug, Clone)]
pub struct OverlapVolume<'a> {
    sphere: &'a Sphere,
    element: &'a Element,
    tolerances: Tolerances,
}

impl<'a> OverlapVolume<'a> {
    /// Creates a new `OverlapVolume` operation with default tolerances.
    #[must_use]
    pub fn new(sphere: &'a Sphere, element: &'a Element) -> Self {
        Self {
            sphere,
            element,
            tolerances: Tolerances::default(),
        }
    }

    /// Sets custom tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the operation, returning the overlap volume.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let (sphere, element) = (self.sphere, self.element);

        match classify_with_tolerances(sphere, element, &self.tolerances) {
            Regime::Disjoint => 0.0,
            Regime::SphereInElement => sphere.volume(),
            Regime::ElementInSphere => element.volume(),
            Regime::General => self.general(),
        }
    }

    /// Inclusion-exclusion over the entities crossing the sphere, evaluated
    /// for the unit sphere: full sphere, minus the caps beyond every face,
    /// plus the wedges beyond every edge, minus the cones at every vertex.
    fn general(&self) -> f64 {
        let tol = &self.tolerances;
        let unit_sphere = Sphere::unit();
        let element = self.element.normalized(self.sphere);
        let hits = UnitSphereIntersections::detect(&element, tol);

        if !hits.has_faces() && element.contains_within(unit_sphere.center(), tol.boundary) {
            return self.sphere.volume();
        }
        if hits.is_empty() {
            return 0.0;
        }

        let mut result = unit_sphere.volume();

        for (idx, &hit) in hits.faces.iter().enumerate() {
            if !hit {
                continue;
            }
            let face = element.face(idx);
            let dist = face.normal().dot(&-face.center().coords);
            result -= unit_sphere.cap_volume(unit_sphere.radius() + dist);
        }

        for (idx, &hit) in hits.edges.iter().enumerate() {
            if hit {
                result += edge_wedge(&element, idx, &hits, Measure::Volume, tol);
            }
        }

        for (idx, &hit) in hits.vertices.iter().enumerate() {
            if hit {
                result -= vertex_cone_correction(&element, &hits, idx, Measure::Volume, tol);
            }
        }

        let result = (result / unit_sphere.volume()) * self.sphere.volume();

        // the error grows with the size ratio of the two bodies, so the
        // window is relative to the smaller one
        let max_volume = self.sphere.volume().min(self.element.volume());
        let limit = tol.result_clamp * max_volume;

        if result < 0.0 {
            if result < -limit {
                warn!(result, limit, "overlap volume below zero beyond tolerance");
            } else {
                debug!(result, "clamping overlap volume to zero");
            }
            return 0.0;
        }

        if result > max_volume {
            if result - max_volume < limit {
                debug!(result, max_volume, "clamping overlap volume to maximum");
            } else {
                warn!(result, max_volume, "overlap volume above maximum beyond tolerance");
            }
            return max_volume;
        }

        result
    }
}

/// Exact overlap volume of a sphere and an element with default tolerances.
#[must_use]
pub fn overlap_volume(sphere: &Sphere, element: &Element) -> f64 {
    OverlapVolume::new(sphere, element).execute()
}

/// Total overlap volume of a sphere with a sequence of elements.
#[must_use]
pub fn overlap_volume_sum<'a, I>(sphere: &Sphere, elements: I) -> f64
where
    I: IntoIterator<Item = &'a Element>,
{
    elements.into_iter().map(|element| overlap_volume(sphere, element)).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::element::tests::{p, regular_tetrahedron, unit_hexahedron};
    use crate::geometry::element::hexahedron_to_tetrahedra5;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn sphere(x: f64, y: f64, z: f64, r: f64) -> Sphere {
        Sphere::new(p(x, y, z), r).unwrap()
    }

    #[test]
    fn fast_paths() {
        let hex = unit_hexahedron(1.0);
        assert_eq!(overlap_volume(&sphere(3.0, 0.0, 0.0, 1.0), &hex), 0.0);

        let inner = sphere(0.0, 0.0, 0.0, 0.5);
        assert_eq!(overlap_volume(&inner, &hex), inner.volume());

        assert_eq!(overlap_volume(&sphere(0.0, 0.0, 0.0, 2.0), &hex), hex.volume());
    }

    #[test]
    fn sphere_at_corner() {
        let s = sphere(1.0, 1.0, 1.0, 1.0);
        let volume = overlap_volume(&s, &unit_hexahedron(1.0));
        assert_relative_eq!(volume, PI / 6.0, max_relative = 1e-12);
    }

    #[test]
    fn sphere_on_face_center() {
        let s = sphere(0.0, 0.0, 1.0, 0.5);
        let volume = overlap_volume(&s, &unit_hexahedron(1.0));
        assert_relative_eq!(volume, 0.5 * s.volume(), max_relative = 1e-12);
    }

    #[test]
    fn sphere_on_edge() {
        let s = sphere(1.0, 0.0, 1.0, 0.5);
        let volume = overlap_volume(&s, &unit_hexahedron(1.0));
        assert_relative_eq!(volume, 0.25 * s.volume(), max_relative = 1e-12);
    }

    #[test]
    fn sphere_inscribed_in_hexahedron_crossing_faces() {
        // the sphere pokes out of all six faces, 6 caps of height 0.2 are cut off
        let s = sphere(0.0, 0.0, 0.0, 1.2);
        let hex = unit_hexahedron(1.0);
        let expected = s.volume() - 6.0 * s.cap_volume(0.2);
        assert_relative_eq!(overlap_volume(&s, &hex), expected, max_relative = 1e-12);
    }

    #[test]
    fn custom_tolerances() {
        let s = sphere(1.0, 1.0, 1.0, 1.0);
        let hex = unit_hexahedron(1.0);
        let volume = OverlapVolume::new(&s, &hex)
            .with_tolerances(Tolerances { result_clamp: 1e-6, ..Tolerances::default() })
            .execute();
        assert_relative_eq!(volume, PI / 6.0, max_relative = 1e-12);
    }

    #[test]
    fn sum_over_decomposition() {
        let s = sphere(0.3, -0.2, 0.6, 0.9);
        let hex = unit_hexahedron(1.0);
        let parts = hexahedron_to_tetrahedra5(&hex).unwrap();
        assert_relative_eq!(
            overlap_volume_sum(&s, &parts),
            overlap_volume(&s, &hex),
            max_relative = 1e-10
        );
    }

    #[test]
    fn tetrahedron_bounds() {
        let tet = regular_tetrahedron();
        let s = sphere(0.0, 0.0, 0.2, 0.4);
        let volume = overlap_volume(&s, &tet);
        assert!(volume > 0.0 && volume <= tet.volume().min(s.volume()));
    }
}
