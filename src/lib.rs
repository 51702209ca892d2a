pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{OverlapError, Result};
pub use geometry::{Element, ElementKind, Sphere};
pub use operations::{overlap_area, overlap_volume, overlap_volume_sum, AreaOverlap};
