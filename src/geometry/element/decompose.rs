//! Decompositions of elements into smaller elements covering the same volume.

use crate::error::Result;

use super::Element;

/// Splits a tetrahedron into 4 tetrahedra sharing its center.
///
/// # Errors
///
/// Returns an error if a part fails validation, which only happens for
/// elements close to the degeneracy threshold.
pub fn tetrahedron_to_tetrahedra(tet: &Element) -> Result<[Element; 4]> {
    let v = tet.vertices();
    let c = *tet.center();
    Ok([
        Element::tetrahedron([v[0], v[1], v[2], c])?,
        Element::tetrahedron([v[0], v[1], c, v[3]])?,
        Element::tetrahedron([v[1], v[2], c, v[3]])?,
        Element::tetrahedron([v[2], v[0], c, v[3]])?,
    ])
}

/// Splits a hexahedron into 2 wedges along the diagonal plane through
/// vertices 0, 2, 4 and 6.
///
/// # Errors
///
/// Returns an error if the diagonal plane is not planar or a part fails
/// validation.
pub fn hexahedron_to_wedges(hex: &Element) -> Result<[Element; 2]> {
    let v = hex.vertices();
    Ok([
        Element::wedge([v[0], v[1], v[2], v[4], v[5], v[6]])?,
        Element::wedge([v[0], v[2], v[3], v[4], v[6], v[7]])?,
    ])
}

/// Splits a hexahedron into 5 tetrahedra.
///
/// # Errors
///
/// Returns an error if a part fails validation.
pub fn hexahedron_to_tetrahedra5(hex: &Element) -> Result<[Element; 5]> {
    let v = hex.vertices();
    Ok([
        Element::tetrahedron([v[0], v[1], v[2], v[5]])?,
        Element::tetrahedron([v[0], v[2], v[7], v[5]])?,
        Element::tetrahedron([v[0], v[2], v[3], v[7]])?,
        Element::tetrahedron([v[0], v[5], v[7], v[4]])?,
        Element::tetrahedron([v[2], v[7], v[5], v[6]])?,
    ])
}

/// Splits a hexahedron into 6 tetrahedra sharing the diagonal from vertex 1
/// to vertex 7.
///
/// # Errors
///
/// Returns an error if a part fails validation.
pub fn hexahedron_to_tetrahedra6(hex: &Element) -> Result<[Element; 6]> {
    let v = hex.vertices();
    Ok([
        Element::tetrahedron([v[0], v[5], v[7], v[4]])?,
        Element::tetrahedron([v[0], v[1], v[7], v[5]])?,
        Element::tetrahedron([v[1], v[6], v[7], v[5]])?,
        Element::tetrahedron([v[0], v[7], v[2], v[3]])?,
        Element::tetrahedron([v[0], v[7], v[1], v[2]])?,
        Element::tetrahedron([v[1], v[7], v[6], v[2]])?,
    ])
}
