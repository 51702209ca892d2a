mod decompose;
pub mod topology;

pub use decompose::{hexahedron_to_tetrahedra5, hexahedron_to_tetrahedra6, hexahedron_to_wedges, tetrahedron_to_tetrahedra};
pub use topology::Topology;

use std::fmt;

use crate::error::{GeometryError, InputError, Result};
use crate::math::intersect_3d::Aabb;
use crate::math::{Point3, Tolerances, Vector3, TINY_EPSILON, TOLERANCE};

use super::{Face, Sphere};

/// Maximum number of vertices of any supported element kind.
pub const MAX_VERTICES: usize = 8;

/// Maximum number of faces of any supported element kind.
pub const MAX_FACES: usize = 6;

/// Maximum number of edges of any supported element kind.
pub const MAX_EDGES: usize = 12;

/// The supported convex mesh element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 4 vertices, 4 triangular faces.
    Tetrahedron,
    /// Triangular prism: 6 vertices, 2 triangular and 3 quadrilateral faces.
    Wedge,
    /// 8 vertices, 6 quadrilateral faces.
    Hexahedron,
}

impl ElementKind {
    /// Returns the incidence tables of this kind.
    #[must_use]
    pub fn topology(self) -> &'static Topology {
        match self {
            Self::Tetrahedron => &topology::TETRAHEDRON,
            Self::Wedge => &topology::WEDGE,
            Self::Hexahedron => &topology::HEXAHEDRON,
        }
    }

    /// Number of vertices: 4, 6 or 8.
    #[must_use]
    pub fn vertex_count(self) -> usize {
        self.topology().vertices.len()
    }

    /// Number of faces: 4, 5 or 6.
    #[must_use]
    pub fn face_count(self) -> usize {
        self.topology().faces.len()
    }

    /// Number of edges: 6, 9 or 12.
    #[must_use]
    pub fn edge_count(self) -> usize {
        self.topology().edges.len()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Wedge => "wedge",
            Self::Hexahedron => "hexahedron",
        };
        f.write_str(name)
    }
}

/// A convex mesh element: tetrahedron, wedge or hexahedron.
///
/// The vertex order must match the face table of the kind, see
/// [`topology`]. Faces, center, volume and surface area are computed once at
/// construction; the element is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    vertices: [Point3; MAX_VERTICES],
    faces: [Face; MAX_FACES],
    center: Point3,
    volume: f64,
    surface_area: f64,
}

impl Element {
    /// Creates a new element of the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of vertices does not match the kind,
    /// any coordinate is not finite, a face collapses to a segment or a
    /// point, a quadrilateral face is not planar, or the vertex order yields
    /// a zero or negative volume.
    pub fn new(kind: ElementKind, vertices: &[Point3]) -> Result<Self> {
        Self::new_with_tolerances(kind, vertices, &Tolerances::default())
    }

    /// Creates a new element, checking face planarity against
    /// `tolerances.planarity`.
    ///
    /// # Errors
    ///
    /// Same as [`Element::new`].
    pub fn new_with_tolerances(kind: ElementKind, vertices: &[Point3], tolerances: &Tolerances) -> Result<Self> {
        let expected = kind.vertex_count();
        if vertices.len() != expected {
            return Err(GeometryError::VertexCount {
                kind,
                expected,
                actual: vertices.len(),
            }
            .into());
        }

        if !vertices.iter().flat_map(|v| v.iter()).all(|c| c.is_finite()) {
            return Err(InputError::NonFinite { what: "element vertices" }.into());
        }

        let element = Self::build(kind, vertices);
        let scale = Aabb::from_points(element.vertices()).diagonal();

        for (face, f) in element.faces().iter().enumerate() {
            // a collapsed face has no usable normal
            if f.area() <= TINY_EPSILON * scale * scale {
                return Err(GeometryError::DegenerateFace { face, area: f.area() }.into());
            }
            if !f.is_planar(tolerances.planarity * scale) {
                return Err(GeometryError::NonPlanarFace {
                    face,
                    deviation: f.planarity_deviation(),
                }
                .into());
            }
        }

        if element.volume <= TINY_EPSILON * scale * scale * scale {
            return Err(GeometryError::NonPositiveVolume(element.volume).into());
        }

        Ok(element)
    }

    /// Creates an element from raw coordinates, e.g. as handed over by a
    /// foreign-language binding.
    ///
    /// # Errors
    ///
    /// Same as [`Element::new`].
    pub fn from_coords(kind: ElementKind, coords: &[[f64; 3]]) -> Result<Self> {
        let mut vertices = [Point3::origin(); MAX_VERTICES];
        if coords.len() > MAX_VERTICES {
            return Err(GeometryError::VertexCount {
                kind,
                expected: kind.vertex_count(),
                actual: coords.len(),
            }
            .into());
        }
        for (v, c) in vertices.iter_mut().zip(coords) {
            *v = Point3::from(*c);
        }
        Self::new(kind, &vertices[..coords.len()])
    }

    /// Creates a tetrahedron.
    ///
    /// # Errors
    ///
    /// Same as [`Element::new`].
    pub fn tetrahedron(vertices: [Point3; 4]) -> Result<Self> {
        Self::new(ElementKind::Tetrahedron, &vertices)
    }

    /// Creates a wedge (triangular prism). Vertices `0..3` form the bottom
    /// triangle, `3..6` the top triangle above them.
    ///
    /// # Errors
    ///
    /// Same as [`Element::new`].
    pub fn wedge(vertices: [Point3; 6]) -> Result<Self> {
        Self::new(ElementKind::Wedge, &vertices)
    }

    /// Creates a hexahedron. Vertices `0..4` form the bottom quadrilateral,
    /// `4..8` the top quadrilateral above them.
    ///
    /// # Errors
    ///
    /// Same as [`Element::new`].
    pub fn hexahedron(vertices: [Point3; 8]) -> Result<Self> {
        Self::new(ElementKind::Hexahedron, &vertices)
    }

    fn build(kind: ElementKind, points: &[Point3]) -> Self {
        let topo = kind.topology();

        let mut vertices = [Point3::origin(); MAX_VERTICES];
        vertices[..points.len()].copy_from_slice(points);

        // slots past the face count repeat the last face and are never exposed
        let faces = std::array::from_fn(|i| {
            let indices = topo.faces[i.min(topo.faces.len() - 1)];
            let mut corners = [Point3::origin(); 4];
            for (corner, &idx) in corners.iter_mut().zip(indices) {
                *corner = points[idx];
            }
            Face::from_points(&corners[..indices.len()])
        });

        let sum = points.iter().fold(Vector3::zeros(), |acc, p| acc + p.coords);
        #[allow(clippy::cast_precision_loss)]
        let center = Point3::from(sum / points.len() as f64);

        let mut element = Self {
            kind,
            vertices,
            faces,
            center,
            volume: 0.0,
            surface_area: 0.0,
        };
        element.volume = element.signed_volume();
        element.surface_area = element.faces().iter().map(Face::area).sum();
        element
    }

    /// Sum of the signed volumes of the tetrahedra spanned by the center and
    /// a fan triangulation of every face.
    fn signed_volume(&self) -> f64 {
        let o = self.center;
        let mut volume = 0.0;
        for face in self.faces() {
            let v = face.vertices();
            for i in 1..v.len() - 1 {
                volume += (v[0] - o).dot(&(v[i] - o).cross(&(v[i + 1] - o)));
            }
        }
        volume / 6.0
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices[..self.kind.vertex_count()]
    }

    /// Returns the faces in face-table order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces[..self.kind.face_count()]
    }

    /// Returns face `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not smaller than the face count of the kind.
    #[must_use]
    pub fn face(&self, index: usize) -> &Face {
        &self.faces()[index]
    }

    /// Returns the average of the vertices, an interior point of the element.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    #[must_use]
    pub fn topology(&self) -> &'static Topology {
        self.kind.topology()
    }

    /// Axis-aligned bounding box of the vertices.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }

    /// Whether `point` lies inside the element or on its boundary, with a
    /// tolerance relative to the bounding-box diagonal.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        self.contains_within(point, TOLERANCE * self.aabb().diagonal())
    }

    /// Whether `point` lies inside the element or at most `tolerance` beyond
    /// any face plane.
    #[must_use]
    pub fn contains_within(&self, point: &Point3, tolerance: f64) -> bool {
        self.faces()
            .iter()
            .all(|f| f.normal().dot(&(point - f.center())) <= tolerance)
    }

    /// Copy of the element expressed in the frame of `sphere`: translated by
    /// the negated sphere center and scaled by the inverse radius, so that the
    /// sphere becomes the unit sphere.
    #[must_use]
    pub(crate) fn normalized(&self, sphere: &Sphere) -> Self {
        let translation = -sphere.center().coords;
        let scaling = 1.0 / sphere.radius();
        let map = |p: &Point3| Point3::from((p.coords + translation) * scaling);

        let mut vertices = self.vertices;
        for v in &mut vertices[..self.kind.vertex_count()] {
            *v = map(v);
        }

        let mut faces = self.faces;
        for f in &mut faces {
            *f = f.transformed(&translation, scaling);
        }

        Self {
            kind: self.kind,
            vertices,
            faces,
            center: map(&self.center),
            volume: self.volume * scaling * scaling * scaling,
            surface_area: self.surface_area * scaling * scaling,
        }
    }
}
