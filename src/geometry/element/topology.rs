//! Fixed incidence tables of the supported element kinds.
//!
//! Every vertex of every supported kind is trihedral, so each vertex lists
//! exactly three edges and three faces.

/// An edge with its two end vertices and the two faces sharing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeIncidence {
    pub vertices: [usize; 2],
    pub faces: [usize; 2],
}

/// The three edges and faces meeting at a vertex.
///
/// `ends[k]` is 0 if edge `edges[k]` starts at the vertex and 1 if it ends
/// there. The faces are ordered so that face `k` is bounded by the edge pair
/// [`VERTEX_FACE_EDGES`]`[k]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexIncidence {
    pub edges: [usize; 3],
    pub ends: [usize; 3],
    pub faces: [usize; 3],
}

/// For each vertex-local face, the two vertex-local edges bounding it.
pub const VERTEX_FACE_EDGES: [[usize; 2]; 3] = [[0, 1], [0, 2], [1, 2]];

/// Complete incidence structure of an element kind.
#[derive(Debug)]
pub struct Topology {
    pub faces: &'static [&'static [usize]],
    pub edges: &'static [EdgeIncidence],
    pub vertices: &'static [VertexIncidence],
}

const fn edge(vertices: [usize; 2], faces: [usize; 2]) -> EdgeIncidence {
    EdgeIncidence { vertices, faces }
}

const fn vertex(edges: [usize; 3], ends: [usize; 3], faces: [usize; 3]) -> VertexIncidence {
    VertexIncidence { edges, ends, faces }
}

pub static TETRAHEDRON: Topology = Topology {
    faces: &[&[2, 1, 0], &[0, 1, 3], &[1, 2, 3], &[2, 0, 3]],
    edges: &[
        edge([0, 1], [0, 1]),
        edge([1, 2], [0, 2]),
        edge([2, 0], [0, 3]),
        edge([0, 3], [1, 3]),
        edge([1, 3], [1, 2]),
        edge([2, 3], [2, 3]),
    ],
    vertices: &[
        vertex([0, 2, 3], [0, 1, 0], [0, 1, 3]),
        vertex([0, 1, 4], [1, 0, 0], [0, 1, 2]),
        vertex([1, 2, 5], [1, 0, 0], [0, 2, 3]),
        vertex([3, 4, 5], [1, 1, 1], [1, 3, 2]),
    ],
};

pub static WEDGE: Topology = Topology {
    faces: &[&[2, 1, 0], &[0, 1, 4, 3], &[1, 2, 5, 4], &[2, 0, 3, 5], &[3, 4, 5]],
    edges: &[
        edge([0, 1], [0, 1]),
        edge([1, 2], [0, 2]),
        edge([2, 0], [0, 3]),
        edge([0, 3], [1, 3]),
        edge([1, 4], [1, 2]),
        edge([2, 5], [2, 3]),
        edge([3, 4], [1, 4]),
        edge([4, 5], [2, 4]),
        edge([5, 3], [3, 4]),
    ],
    vertices: &[
        vertex([0, 2, 3], [0, 1, 0], [0, 1, 3]),
        vertex([0, 1, 4], [1, 0, 0], [0, 1, 2]),
        vertex([1, 2, 5], [1, 0, 0], [0, 2, 3]),
        vertex([3, 6, 8], [1, 0, 1], [1, 3, 4]),
        vertex([4, 6, 7], [1, 1, 0], [1, 2, 4]),
        vertex([5, 7, 8], [1, 1, 0], [2, 3, 4]),
    ],
};

pub static HEXAHEDRON: Topology = Topology {
    faces: &[
        &[3, 2, 1, 0],
        &[0, 1, 5, 4],
        &[1, 2, 6, 5],
        &[2, 3, 7, 6],
        &[3, 0, 4, 7],
        &[4, 5, 6, 7],
    ],
    edges: &[
        edge([0, 1], [0, 1]),
        edge([1, 2], [0, 2]),
        edge([2, 3], [0, 3]),
        edge([3, 0], [0, 4]),
        edge([0, 4], [1, 4]),
        edge([1, 5], [1, 2]),
        edge([2, 6], [2, 3]),
        edge([3, 7], [3, 4]),
        edge([4, 5], [1, 5]),
        edge([5, 6], [2, 5]),
        edge([6, 7], [3, 5]),
        edge([7, 4], [4, 5]),
    ],
    vertices: &[
        vertex([0, 3, 4], [0, 1, 0], [0, 1, 4]),
        vertex([0, 1, 5], [1, 0, 0], [0, 1, 2]),
        vertex([1, 2, 6], [1, 0, 0], [0, 2, 3]),
        vertex([2, 3, 7], [1, 0, 0], [0, 3, 4]),
        vertex([4, 8, 11], [1, 0, 1], [1, 4, 5]),
        vertex([5, 8, 9], [1, 1, 0], [1, 2, 5]),
        vertex([6, 9, 10], [1, 1, 0], [2, 3, 5]),
        vertex([7, 10, 11], [1, 1, 0], [3, 4, 5]),
    ],
};
