use crate::geometry::element::topology::VertexIncidence;
use crate::geometry::element::{MAX_EDGES, MAX_FACES, MAX_VERTICES};
use crate::geometry::{Element, Sphere};
use crate::math::intersect_3d::{closest_point_on_segment, line_sphere_intersection, sphere_plane_intersects};
use crate::math::{Point3, Tolerances, Vector3};

use super::wedge::{general_wedge, Measure};

/// Vertices, edges and faces of a normalized element that cross the unit
/// sphere.
///
/// For every marked edge the two points where it crosses the sphere are
/// cached relative to the edge's start and end vertex respectively.
#[derive(Debug, Clone)]
pub(crate) struct UnitSphereIntersections {
    pub vertices: [bool; MAX_VERTICES],
    pub edges: [bool; MAX_EDGES],
    pub faces: [bool; MAX_FACES],
    edge_points: [[Vector3; 2]; MAX_EDGES],
}

impl UnitSphereIntersections {
    /// Detects all entities of `element` crossing the unit sphere at the
    /// origin.
    ///
    /// An entity crosses the sphere if it reaches deeper than
    /// `tolerances.boundary` into it. Entities that only touch the surface,
    /// such as a vertex on the sphere or a tangent edge, are ignored, so the
    /// marks of a vertex, its edges and their faces always agree. A vertex
    /// only counts as inside if all three of its edges cross the sphere.
    pub fn detect(element: &Element, tolerances: &Tolerances) -> Self {
        let unit_sphere = Sphere::unit();
        let band = tolerances.boundary;
        let topo = element.topology();
        let vertices = element.vertices();

        let mut result = Self {
            vertices: [false; MAX_VERTICES],
            edges: [false; MAX_EDGES],
            faces: [false; MAX_FACES],
            edge_points: [[Vector3::zeros(); 2]; MAX_EDGES],
        };

        let inside: [bool; MAX_VERTICES] =
            std::array::from_fn(|i| i < vertices.len() && unit_sphere.interior_contains(&vertices[i], band));

        for (idx, edge) in topo.edges.iter().enumerate() {
            let [start, end] = edge.vertices;
            let base = vertices[start];
            let direction = vertices[end] - base;

            let closest = closest_point_on_segment(&base, &vertices[end], unit_sphere.center());
            if !unit_sphere.interior_contains(&closest, band) {
                continue;
            }
            let [Some(t0), Some(t1)] = line_sphere_intersection(&base, &direction, &unit_sphere, band) else {
                continue;
            };

            result.vertices[start] |= inside[start];
            result.vertices[end] |= inside[end];

            result.edge_points[idx] = [t0 * direction, (t1 - 1.0) * direction];
            result.edges[idx] = true;

            // both faces sharing a crossing edge cross the sphere as well
            for &face in &edge.faces {
                result.faces[face] = true;
            }
        }

        for (idx, vertex) in topo.vertices.iter().enumerate() {
            if result.vertices[idx] && !vertex.edges.iter().all(|&e| result.edges[e]) {
                result.vertices[idx] = false;
            }
        }

        for (idx, face) in element.faces().iter().enumerate() {
            if sphere_plane_intersects(&unit_sphere, &face.plane(), band)
                && face.contains_within(unit_sphere.center(), band)
            {
                result.faces[idx] = true;
            }
        }

        result
    }

    /// Whether no entity crosses the sphere.
    pub fn is_empty(&self) -> bool {
        !(self.vertices.iter().any(|&v| v) || self.edges.iter().any(|&e| e) || self.faces.iter().any(|&f| f))
    }

    pub fn has_faces(&self) -> bool {
        self.faces.iter().any(|&f| f)
    }

    /// Crossing points of edge `edge` relative to its start and end vertex.
    pub fn edge_points(&self, edge: usize) -> &[Vector3; 2] {
        debug_assert!(self.edges[edge], "edge {edge} does not cross the sphere");
        &self.edge_points[edge]
    }

    /// Absolute crossing points of edge `edge`.
    pub fn edge_chord(&self, element: &Element, edge: usize) -> [Point3; 2] {
        let [start, end] = element.topology().edges[edge].vertices;
        let [p0, p1] = self.edge_points(edge);
        let vertices = element.vertices();
        [vertices[start] + p0, vertices[end] + p1]
    }

    /// Crossing points of the three edges at `vertex` relative to the vertex.
    pub fn vertex_points(&self, incidence: &VertexIncidence) -> [Vector3; 3] {
        std::array::from_fn(|k| self.edge_points(incidence.edges[k])[incidence.ends[k]])
    }
}

/// Spherical wedge of the unit sphere spanned by the two faces meeting at
/// edge `edge`.
pub(crate) fn edge_wedge(
    element: &Element,
    edge: usize,
    intersections: &UnitSphereIntersections,
    measure: Measure,
    tolerances: &Tolerances,
) -> f64 {
    let [f0, f1] = element.topology().edges[edge].faces;
    let [c0, c1] = intersections.edge_chord(element, edge);
    let midpoint = Point3::from((c0.coords + c1.coords) * 0.5);

    general_wedge(
        &Sphere::unit(),
        &element.face(f0).plane(),
        &element.face(f1).plane(),
        &midpoint.coords,
        measure,
        tolerances,
    )
}
