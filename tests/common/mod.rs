//! Shared fixtures of the integration tests.

#![allow(clippy::unwrap_used, dead_code)]

use overlap::geometry::element::{
    hexahedron_to_tetrahedra5, hexahedron_to_tetrahedra6, hexahedron_to_wedges,
    tetrahedron_to_tetrahedra,
};
use overlap::math::Point3;
use overlap::{overlap_area, overlap_volume, Element, Sphere};

pub fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

pub fn sphere(x: f64, y: f64, z: f64, r: f64) -> Sphere {
    Sphere::new(p(x, y, z), r).unwrap()
}

/// The hexahedron `[-s, s]^3`.
pub fn unit_hexahedron(scaling: f64) -> Element {
    let s = scaling;
    Element::hexahedron([
        p(-s, -s, -s),
        p(s, -s, -s),
        p(s, s, -s),
        p(-s, s, -s),
        p(-s, -s, s),
        p(s, -s, s),
        p(s, s, s),
        p(-s, s, s),
    ])
    .unwrap()
}

/// Regular tetrahedron with unit edges standing on the xy-plane.
pub fn regular_tetrahedron() -> Element {
    let (s3, s6) = (3.0_f64.sqrt(), 6.0_f64.sqrt());
    Element::tetrahedron([
        p(-s3 / 6.0, -0.5, 0.0),
        p(s3 / 3.0, 0.0, 0.0),
        p(-s3 / 6.0, 0.5, 0.0),
        p(0.0, 0.0, s6 / 3.0),
    ])
    .unwrap()
}

/// A measure of the overlap evaluated for a hexahedron and for each of its
/// decompositions: 2 wedges, 5 tetrahedra, 6 tetrahedra and 24 tetrahedra.
pub fn over_decompositions(hex: &Element, measure: impl Fn(&Element) -> f64) -> [f64; 5] {
    let sum = |parts: &[Element]| parts.iter().map(&measure).sum::<f64>();

    let tets6 = hexahedron_to_tetrahedra6(hex).unwrap();
    let tets24: Vec<Element> = tets6
        .iter()
        .flat_map(|tet| tetrahedron_to_tetrahedra(tet).unwrap())
        .collect();

    [
        measure(hex),
        sum(&hexahedron_to_wedges(hex).unwrap()),
        sum(&hexahedron_to_tetrahedra5(hex).unwrap()),
        sum(&tets6),
        sum(&tets24),
    ]
}

pub fn volumes(sphere: &Sphere, hex: &Element) -> [f64; 5] {
    over_decompositions(hex, |element| overlap_volume(sphere, element))
}

/// Sphere surface inside the hexahedron and inside each decomposition.
pub fn sphere_surfaces(sphere: &Sphere, hex: &Element) -> [f64; 5] {
    over_decompositions(hex, |element| overlap_area(sphere, element).sphere_surface())
}

pub fn assert_all_near(values: &[f64], expected: f64, epsilon: f64) {
    for (idx, value) in values.iter().enumerate() {
        assert!(
            (value - expected).abs() <= epsilon,
            "value {idx}: {value} differs from {expected} by more than {epsilon}"
        );
    }
}
