pub mod element;
mod face;
mod plane;
mod sphere;

pub use element::{Element, ElementKind};
pub use face::Face;
pub use plane::Plane;
pub use sphere::Sphere;
