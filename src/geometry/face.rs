use crate::math::vector_3d::normal_newell;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::Plane;

/// A planar, convex face of a mesh element: a triangle or a quadrilateral.
///
/// Vertices are wound counter-clockwise when seen from outside the element,
/// so `normal` points outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    vertices: [Point3; 4],
    vertex_count: usize,
    center: Point3,
    normal: Vector3,
    area: f64,
}

impl Face {
    /// Creates a triangular face.
    #[must_use]
    pub fn triangle(a: Point3, b: Point3, c: Point3) -> Self {
        let vertices = [a, b, c];
        let center = Point3::from((a.coords + b.coords + c.coords) / 3.0);
        let normal = normal_newell(&vertices, &center);
        let area = 0.5 * (b - a).cross(&(c - a)).norm();

        Self {
            vertices: [a, b, c, c],
            vertex_count: 3,
            center,
            normal,
            area,
        }
    }

    /// Creates a quadrilateral face.
    ///
    /// For a quadrilateral, Newell's method reduces to the cross product of
    /// the two diagonals.
    #[must_use]
    pub fn quadrilateral(a: Point3, b: Point3, c: Point3, d: Point3) -> Self {
        let center = Point3::from((a.coords + b.coords + c.coords + d.coords) * 0.25);
        let normal = (c - a).cross(&(d - b)).normalize();
        let area = 0.5 * ((b - a).cross(&(c - a)).norm() + (c - a).cross(&(d - a)).norm());

        Self {
            vertices: [a, b, c, d],
            vertex_count: 4,
            center,
            normal,
            area,
        }
    }

    /// Creates a face from 3 or 4 points.
    pub(crate) fn from_points(points: &[Point3]) -> Self {
        match *points {
            [a, b, c] => Self::triangle(a, b, c),
            [a, b, c, d] => Self::quadrilateral(a, b, c, d),
            _ => unreachable!("faces have three or four vertices"),
        }
    }

    /// Returns the vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices[..self.vertex_count]
    }

    /// Returns the vertex average.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the unit outward normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// The supporting plane, oriented like the face.
    #[must_use]
    pub fn plane(&self) -> Plane {
        Plane::new(self.center, self.normal)
    }

    /// Largest distance of a vertex from the supporting plane.
    #[must_use]
    pub fn planarity_deviation(&self) -> f64 {
        self.vertices()
            .iter()
            .map(|v| self.normal.dot(&(v - self.center)).abs())
            .fold(0.0, f64::max)
    }

    /// Whether all vertices lie within `tolerance` of the supporting plane.
    #[must_use]
    pub fn is_planar(&self, tolerance: f64) -> bool {
        self.vertex_count == 3 || self.planarity_deviation() <= tolerance
    }

    /// Whether the projection of `point` onto the supporting plane lies
    /// inside the face or on its boundary, with a tolerance relative to the
    /// size of the face.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        self.contains_within(point, TOLERANCE * self.area.sqrt())
    }

    /// Whether the projection of `point` onto the supporting plane lies
    /// inside the face or at most `tolerance` outside of its boundary.
    #[must_use]
    pub fn contains_within(&self, point: &Point3, tolerance: f64) -> bool {
        let proj = self.plane().project(point);
        let vertices = self.vertices();
        let n = vertices.len();

        (0..n).all(|i| {
            let v0 = vertices[i];
            let v1 = vertices[(i + 1) % n];
            // outward in-plane direction, scaled by the edge length
            let dir = (v1 - v0).cross(&self.normal);
            dir.dot(&(proj - Point3::from((v0.coords + v1.coords) * 0.5))) <= tolerance * dir.norm()
        })
    }

    /// Copy of the face under `p -> scaling * (p + translation)`.
    #[must_use]
    pub(crate) fn transformed(&self, translation: &Vector3, scaling: f64) -> Self {
        let map = |p: &Point3| Point3::from((p.coords + translation) * scaling);

        let mut vertices = self.vertices;
        for v in &mut vertices {
            *v = map(v);
        }

        Self {
            vertices,
            vertex_count: self.vertex_count,
            center: map(&self.center),
            normal: self.normal,
            area: self.area * scaling * scaling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Face {
        Face::quadrilateral(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0))
    }

    #[test]
    fn triangle_properties() {
        let tri = Face::triangle(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 3.0, 0.0));
        assert_relative_eq!(tri.area(), 6.0);
        assert_relative_eq!(*tri.normal(), Vector3::z());
        assert_relative_eq!(*tri.center(), p(4.0 / 3.0, 1.0, 0.0));
        assert_eq!(tri.vertices().len(), 3);
    }

    #[test]
    fn quadrilateral_properties() {
        let quad = unit_square();
        assert_relative_eq!(quad.area(), 1.0);
        assert_relative_eq!(*quad.normal(), Vector3::z());
        assert_relative_eq!(*quad.center(), p(0.5, 0.5, 0.0));
        assert!(quad.is_planar(1e-12));
    }

    #[test]
    fn warped_quadrilateral_is_not_planar() {
        let quad = Face::quadrilateral(
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.2),
            p(0.0, 1.0, 0.0),
        );
        assert!(!quad.is_planar(1e-3));
        assert_relative_eq!(quad.planarity_deviation(), 0.1 / 4.08_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn containment_of_projected_point() {
        let quad = unit_square();
        assert!(quad.contains(&p(0.5, 0.5, 3.0)));
        assert!(quad.contains(&p(1.0, 0.5, -1.0)));
        assert!(!quad.contains(&p(1.5, 0.5, 0.0)));
    }

    #[test]
    fn containment_tolerance_is_a_distance() {
        // a long thin face: the band must not scale with the edge length
        let strip = Face::quadrilateral(p(0.0, 0.0, 0.0), p(1000.0, 0.0, 0.0), p(1000.0, 1.0, 0.0), p(0.0, 1.0, 0.0));
        assert!(strip.contains_within(&p(500.0, 1.0 + 1e-7, 2.0), 1e-6));
        assert!(!strip.contains_within(&p(500.0, 1.0 + 1e-5, 2.0), 1e-6));
        assert!(!strip.contains_within(&p(500.0, 1.0 + 1e-7, 2.0), 0.0));
    }

    #[test]
    fn transform_scales_area() {
        let quad = unit_square().transformed(&Vector3::new(1.0, 0.0, 0.0), 2.0);
        assert_relative_eq!(quad.area(), 4.0);
        assert_relative_eq!(*quad.center(), p(3.0, 1.0, 0.0));
        assert_relative_eq!(quad.vertices()[0], p(2.0, 0.0, 0.0));
    }
}
