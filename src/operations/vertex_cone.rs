use crate::geometry::element::topology::VERTEX_FACE_EDGES;
use crate::geometry::{Element, Plane, Sphere};
use crate::math::precision::triangle_normal;
use crate::math::{Point3, Tolerances};

use super::intersections::{edge_wedge, UnitSphereIntersections};
use super::wedge::{general_wedge, Measure};

/// Volume or sphere surface of the cone cut out of the unit sphere by the
/// three faces meeting at vertex `vertex`.
///
/// The cone is split along the plane through the three points where the
/// vertex edges cross the sphere: the tetrahedron at the tip plus the cap
/// beyond that plane, minus the three wedges between the plane and the faces.
pub(crate) fn vertex_cone_correction(
    element: &Element,
    intersections: &UnitSphereIntersections,
    vertex: usize,
    measure: Measure,
    tolerances: &Tolerances,
) -> f64 {
    let incidence = element.topology().vertices[vertex];
    let apex = element.vertices()[vertex];

    let relative = intersections.vertex_points(&incidence);
    let points = relative.map(|r| apex + r);

    let triangle_center = Point3::from((points[0].coords + points[1].coords + points[2].coords) / 3.0);

    // relative coordinates and extended precision keep the normal accurate
    // for small cones
    let mut normal = triangle_normal(&relative[0], &relative[1], &relative[2]);

    let mut distances = relative.map(|r| r.norm_squared());
    let mut order = [0, 1, 2];
    order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));
    distances.sort_by(f64::total_cmp);

    let unit_sphere = Sphere::unit();

    if distances[1] < distances[2] * tolerances.large {
        // two crossings coincide with the vertex: the cone degenerates to the
        // wedge along the remaining edge
        return edge_wedge(element, incidence.edges[order[2]], intersections, measure, tolerances);
    }

    // orient the normal away from the element
    if normal.dot(&(element.center() - triangle_center)) > 0.0 {
        normal = -normal;
    }

    let segments = || {
        let plane = Plane::new(triangle_center, normal);
        VERTEX_FACE_EDGES
            .iter()
            .zip(incidence.faces)
            .map(|(&[e0, e1], face)| {
                let face = element.face(face);
                let chord_center = (points[e0].coords + points[e1].coords) * 0.5;
                general_wedge(
                    &unit_sphere,
                    &plane,
                    &face.plane().flipped(),
                    &chord_center,
                    measure,
                    tolerances,
                )
            })
            .sum::<f64>()
    };

    let dist = normal.dot(&-triangle_center.coords);

    match measure {
        Measure::Area => {
            let cap = unit_sphere.cap_surface_area(unit_sphere.radius() + dist);

            // corrections of tiny caps are below the attainable precision
            if cap < tolerances.large {
                return 0.0;
            }
            (cap - segments()).max(0.0)
        }
        Measure::Volume => {
            let tip = (1.0 / 6.0)
                * (-relative[2])
                    .dot(&(relative[0] - relative[2]).cross(&(relative[1] - relative[2])))
                    .abs();

            let cap = unit_sphere.cap_volume(unit_sphere.radius() + dist);
            if cap < tolerances.tiny {
                return tip;
            }
            (tip + cap - segments()).max(0.0)
        }
    }
}
