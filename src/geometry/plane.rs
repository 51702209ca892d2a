use crate::math::{Point3, Vector3};

/// An infinite plane through `center` with unit normal `normal`.
///
/// Points with positive signed distance lie on the normal side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    center: Point3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane. `normal` is expected to be of unit length and is not
    /// renormalized.
    #[must_use]
    pub fn new(center: Point3, normal: Vector3) -> Self {
        Self { center, normal }
    }

    /// Returns a point on the plane.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// The same plane with the normal reversed.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            center: self.center,
            normal: -self.normal,
        }
    }

    /// Signed distance from a point to the plane.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&(point - self.center))
    }

    /// Orthogonal projection of a point onto the plane.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point3 {
        point - self.normal * self.signed_distance(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn signed_distance_and_projection() {
        let plane = Plane::new(Point3::new(0.0, 0.0, 1.0), Vector3::z());
        let point = Point3::new(2.0, 3.0, 4.0);
        assert_relative_eq!(plane.signed_distance(&point), 3.0);
        assert_relative_eq!(plane.flipped().signed_distance(&point), -3.0);
        assert_relative_eq!(plane.project(&point), Point3::new(2.0, 3.0, 1.0));
    }
}
