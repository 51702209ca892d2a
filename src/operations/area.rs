use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::geometry::element::topology::VERTEX_FACE_EDGES;
use crate::geometry::element::MAX_FACES;
use crate::geometry::{Element, Sphere};
use crate::math::{Point3, Tolerances, Vector3};

use super::classify::{classify_with_tolerances, Regime};
use super::intersections::{edge_wedge, UnitSphereIntersections};
use super::vertex_cone::vertex_cone_correction;
use super::wedge::Measure;

/// Surface areas shared by a sphere and an element.
///
/// Laid out as `F + 2` values for an element with `F` faces: the part of the
/// sphere surface inside the element, the part of every face inside the
/// sphere in face order, and the sum of the face parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaOverlap {
    values: [f64; MAX_FACES + 2],
    face_count: usize,
}

impl AreaOverlap {
    fn zero(face_count: usize) -> Self {
        Self {
            values: [0.0; MAX_FACES + 2],
            face_count,
        }
    }

    /// All `F + 2` values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.face_count + 2]
    }

    /// Area of the sphere surface inside the element.
    #[must_use]
    pub fn sphere_surface(&self) -> f64 {
        self.values[0]
    }

    /// Area of every face inside the sphere, in face order.
    #[must_use]
    pub fn faces(&self) -> &[f64] {
        &self.values[1..=self.face_count]
    }

    /// Area of the element surface inside the sphere.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values[self.face_count + 1]
    }

    fn faces_mut(&mut self) -> &mut [f64] {
        &mut self.values[1..=self.face_count]
    }

    fn update_total(&mut self) {
        self.values[self.face_count + 1] = self.faces().iter().sum();
    }
}

/// Computes the surface areas shared by a sphere and an element.
#[derive(Debug, Clone)]
pub struct OverlapArea<'a> {
    sphere: &'a Sphere,
    element: &'a Element,
    tolerances: Tolerances,
}

impl<'a> OverlapArea<'a> {
    /// Creates a new `OverlapArea` operation with default tolerances.
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

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self) -> AreaOverlap {
        let (sphere, element) = (self.sphere, self.element);
        let mut result = AreaOverlap::zero(element.faces().len());

        match classify_with_tolerances(sphere, element, &self.tolerances) {
            Regime::Disjoint => {}
            Regime::SphereInElement => result.values[0] = sphere.surface_area(),
            Regime::ElementInSphere => {
                for (value, face) in result.faces_mut().iter_mut().zip(element.faces()) {
                    *value = face.area();
                }
                result.update_total();
            }
            Regime::General => self.general(&mut result),
        }

        result
    }

    fn general(&self, result: &mut AreaOverlap) {
        let tol = &self.tolerances;
        let unit_sphere = Sphere::unit();
        let element = self.element.normalized(self.sphere);
        let hits = UnitSphereIntersections::detect(&element, tol);
        let topo = element.topology();

        if !hits.has_faces() && element.contains_within(unit_sphere.center(), tol.boundary) {
            result.values[0] = self.sphere.surface_area();
            return;
        }
        if hits.is_empty() {
            return;
        }

        let mut sphere_surface = unit_sphere.surface_area();
        let mut faces = [0.0; MAX_FACES];

        // caps beyond the faces and the disks they leave in the face planes
        for (idx, &hit) in hits.faces.iter().enumerate() {
            if !hit {
                continue;
            }
            let face = element.face(idx);
            let dist = face.normal().dot(&-face.center().coords);
            sphere_surface -= unit_sphere.cap_surface_area(unit_sphere.radius() + dist);
            faces[idx] = unit_sphere.disk_area(unit_sphere.radius() + dist);
        }

        // squared radius of the circle in which each face plane cuts the sphere
        let mut radius_sq = [0.0; MAX_FACES];

        // every crossing edge adds back the lune counted twice above and cuts
        // a circular segment off the disks of both adjacent faces
        for (idx, &hit) in hits.edges.iter().enumerate() {
            if !hit {
                continue;
            }

            sphere_surface += edge_wedge(&element, idx, &hits, Measure::Area, tol);

            let [c0, c1] = hits.edge_chord(&element, idx);
            let chord = c0 - c1;
            let chord_center = Point3::from((c0.coords + c1.coords) * 0.5);

            for face_idx in topo.edges[idx].faces {
                let face = element.face(face_idx);

                let cap_height = unit_sphere.radius() - face.normal().dot(&face.center().coords);
                let apothem = unit_sphere.radius() - cap_height;
                radius_sq[face_idx] = cap_height * (unit_sphere.radius() + apothem);

                let projected = face.plane().project(unit_sphere.center());
                let mut segment = circular_segment_area(radius_sq[face_idx], &chord, &(projected - chord_center));

                // the segment is the larger part of the disk if the circle
                // center and the face center lie on opposite sides of the edge
                let invert = chord
                    .cross(&(projected - chord_center))
                    .dot(&chord.cross(&(face.center() - chord_center)))
                    < 0.0;
                if invert {
                    segment = radius_sq[face_idx] * PI - segment;
                }

                faces[face_idx] -= segment;
            }
        }

        // every vertex inside the sphere removes the cone surface and
        // re-admits, per adjacent face, the corner triangle and the segment
        // cut off twice by its two edges
        for (idx, &hit) in hits.vertices.iter().enumerate() {
            if !hit {
                continue;
            }

            sphere_surface -= vertex_cone_correction(&element, &hits, idx, Measure::Area, tol);
            debug_assert!(sphere_surface < unit_sphere.surface_area() + tol.large);

            let incidence = topo.vertices[idx];
            let vertex = element.vertices()[idx];
            let relative = hits.vertex_points(&incidence);

            for (&[e0, e1], face_idx) in VERTEX_FACE_EDGES.iter().zip(incidence.faces) {
                let (p0, p1) = (relative[e0], relative[e1]);

                let triangle = 0.5 * p0.cross(&p1).norm();
                let chord_center = (p0 + p1) * 0.5;
                let face = element.face(face_idx);
                let projected = face.normal() * -face.normal().dot(&-face.center().coords);
                let circle_center = projected - vertex.coords;

                let mut segment = circular_segment_area(radius_sq[face_idx], &(p1 - p0), &(circle_center - chord_center));
                let invert = chord_center.dot(&(circle_center - chord_center)) > 0.0;
                if invert {
                    segment = radius_sq[face_idx] * PI - segment;
                }

                faces[face_idx] += triangle + segment;
            }
        }

        let scaling = self.sphere.radius() * self.sphere.radius();
        let sphere_limit = tol.result_clamp * self.sphere.surface_area();

        // the precision of the face terms degrades with the size ratio of
        // the two bodies, the sphere limit is their lower bound
        let face_limit = sphere_limit.max(tol.result_clamp * self.element.surface_area());

        result.values[0] = clamp_result(scaling * sphere_surface, self.sphere.surface_area(), sphere_limit);
        for ((value, &area), face) in result.faces_mut().iter_mut().zip(&faces).zip(self.element.faces()) {
            *value = clamp_result(scaling * area, face.area(), face_limit);
        }
        result.update_total();
    }
}

/// Area of the minor circular segment of a circle with squared radius
/// `radius_sq` cut off by `chord`. `center_offset` points from the chord
/// midpoint to the circle center.
///
/// The apothem is measured rather than derived from the radius and the chord
/// length, which would lose half the digits for chords close to a diameter.
fn circular_segment_area(radius_sq: f64, chord: &Vector3, center_offset: &Vector3) -> f64 {
    let chord_length = chord.norm();
    if chord_length == 0.0 {
        return 0.0;
    }
    let apothem = chord.cross(center_offset).norm() / chord_length;
    let theta = 2.0 * chord_length.atan2(2.0 * apothem);

    let sector = 0.5 * radius_sq * theta;
    let triangle = 0.5 * chord_length * apothem;
    sector - triangle
}

/// Clamps an area to `[0, max]`. Deviations within `limit` are expected
/// round-off, larger ones are reported.
fn clamp_result(value: f64, max: f64, limit: f64) -> f64 {
    if (0.0..=max).contains(&value) {
        return value;
    }
    if value < -limit || value > max + limit {
        warn!(value, max, limit, "overlap area out of range beyond tolerance");
    } else {
        debug!(value, max, "clamping overlap area");
    }
    value.clamp(0.0, max)
}

/// Exact overlap areas of a sphere and an element with default tolerances.
#[must_use]
pub fn overlap_area(sphere: &Sphere, element: &Element) -> AreaOverlap {
    OverlapArea::new(sphere, element).execute()
}
