//! Overlap of spheres with mesh elements.
//!
//! All operations are pure functions of immutable inputs. The general case is
//! evaluated on a copy of the element normalized to the unit sphere.

mod area;
mod classify;
mod intersections;
mod vertex_cone;
mod volume;
pub mod wedge;

pub use area::{overlap_area, AreaOverlap, OverlapArea};
pub use classify::{classify, classify_with_tolerances, Regime};
pub use volume::{overlap_volume, overlap_volume_sum, OverlapVolume};
