use thiserror::Error;

use crate::geometry::ElementKind;

/// Top-level error type of the overlap library.
///
/// All errors are raised while constructing spheres and elements. The overlap
/// operations themselves are total over valid inputs.
#[derive(Debug, Error)]
pub enum OverlapError {
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

/// Geometrically invalid primitives.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{kind} requires {expected} vertices, got {actual}")]
    VertexCount {
        kind: ElementKind,
        expected: usize,
        actual: usize,
    },

    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("element volume must be positive, got {0} (inverted vertex order?)")]
    NonPositiveVolume(f64),

    #[error("face {face} is degenerate (area {area})")]
    DegenerateFace { face: usize, area: f64 },

    #[error("face {face} is not planar (deviation {deviation})")]
    NonPlanarFace { face: usize, deviation: f64 },
}

/// Numerically unusable inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("non-finite value in {what}")]
    NonFinite { what: &'static str },
}

/// Convenience type alias for results using [`OverlapError`].
pub type Result<T> = std::result::Result<T, OverlapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err: OverlapError = GeometryError::VertexCount {
            kind: ElementKind::Wedge,
            expected: 6,
            actual: 5,
        }
        .into();
        assert_eq!(format!("{err}"), "wedge requires 6 vertices, got 5");

        let err: OverlapError = InputError::NonFinite { what: "sphere radius" }.into();
        assert!(format!("{err}").contains("sphere radius"));

        let err: OverlapError = GeometryError::NonPositiveRadius(-1.0).into();
        assert!(matches!(
            err,
            OverlapError::InvalidGeometry(GeometryError::NonPositiveRadius(_))
        ));
    }
}
