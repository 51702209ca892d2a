pub mod intersect_3d;
pub mod precision;
pub mod vector_3d;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Four ulp at 1.0.
pub const TINY_EPSILON: f64 = 4.0 * f64::EPSILON;

/// Tolerances of the robustness layer.
///
/// The general overlap path runs on a copy of the element normalized to the
/// unit sphere, so all values except `planarity` are relative to the sphere
/// radius. `planarity` is relative to the bounding-box diagonal of the
/// element and is only consulted at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Clamping window for angles and detection of degenerate wedges and
    /// vanishing cap volumes.
    pub tiny: f64,
    /// Detection of degenerate vertex cones, near-center wedges and
    /// vanishing cap surfaces.
    pub large: f64,
    /// Maximum out-of-plane deviation of quadrilateral face vertices.
    pub planarity: f64,
    /// Relative window in which final results are clamped back into their
    /// valid range.
    pub result_clamp: f64,
    /// Width of the band around the sphere surface and the face planes in
    /// which a point counts as lying on them. An entity that reaches no
    /// deeper than this into the sphere touches it without crossing.
    pub boundary: f64,
}

impl Tolerances {
    /// Creates the default tolerance set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiny: TINY_EPSILON,
            large: TOLERANCE,
            planarity: TOLERANCE,
            result_clamp: f64::EPSILON.sqrt(),
            boundary: TOLERANCE,
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new()
    }
}
