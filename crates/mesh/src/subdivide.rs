use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::{
    geometry::{midpoint, normalize},
    Facet, MeshError, TriangleMesh, Vector3,
};

/// An undirected edge between two vertices of a mesh.
///
/// The endpoints are stored smallest first so that the edge shared by two
/// facets compares and hashes the same no matter which facet produced it.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Edge(u32, u32);

impl Edge {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn endpoints(&self) -> (u32, u32) {
        (self.0, self.1)
    }
}

/// Accumulates the output of one subdivision pass.
///
/// The midpoint map only lives as long as the pass.
struct Splitter {
    vertices: Vec<Vector3>,
    midpoints: HashMap<Edge, u32>,
}

impl Splitter {
    fn new(vertices: Vec<Vector3>, edge_hint: usize) -> Self {
        let mut splitter = Self {
            vertices,
            midpoints: HashMap::with_capacity(edge_hint),
        };
        splitter.vertices.reserve(edge_hint);
        splitter
    }

    /// Returns the index of the midpoint of `a`-`b`, inserting it on first use.
    fn midpoint_index(&mut self, a: u32, b: u32) -> u32 {
        let vertices = &mut self.vertices;
        *self.midpoints.entry(Edge::new(a, b)).or_insert_with(|| {
            let mid = midpoint(vertices[a as usize], vertices[b as usize]);
            vertices.push(normalize(mid));
            (vertices.len() - 1) as u32
        })
    }
}

/// Splits every facet of `mesh` into four and projects the new vertices onto
/// the unit sphere.
///
/// The existing vertices keep their indices. One vertex is appended per
/// distinct edge, so an edge shared by two facets yields a single midpoint.
/// For a facet `(a, b, c)` with midpoints `ab`, `bc` and `ca` the output is
/// `(a, ab, ca)`, `(b, bc, ab)`, `(c, ca, bc)`, `(ab, bc, ca)`, which keeps
/// the winding of the input.
///
/// Indices are not checked. Out of range indices panic; use
/// [`checked_subdivide`] for untrusted input.
pub fn subdivide(mesh: TriangleMesh) -> TriangleMesh {
    let TriangleMesh {
        vertices,
        triangles,
    } = mesh;
    let input_vertices = vertices.len();

    // A closed mesh has 3/2 edges per facet.
    let mut splitter = Splitter::new(vertices, triangles.len() * 3 / 2);
    let mut facets = Vec::with_capacity(triangles.len() * 4);

    for t in &triangles {
        let ab = splitter.midpoint_index(t.p0, t.p1);
        let bc = splitter.midpoint_index(t.p1, t.p2);
        let ca = splitter.midpoint_index(t.p2, t.p0);

        facets.extend([
            Facet::new(t.p0, ab, ca),
            Facet::new(t.p1, bc, ab),
            Facet::new(t.p2, ca, bc),
            Facet::new(ab, bc, ca),
        ]);
    }

    debug!(
        "subdivided {} facets / {} vertices into {} facets / {} vertices",
        triangles.len(),
        input_vertices,
        facets.len(),
        splitter.vertices.len()
    );

    TriangleMesh {
        vertices: splitter.vertices,
        triangles: facets,
    }
}

/// Applies [`subdivide`] `n` times. `n == 0` returns `mesh` unchanged.
///
/// Facet count grows by 4x per pass; there is no upper bound on `n`.
pub fn subdivide_n(mesh: TriangleMesh, n: u32) -> TriangleMesh {
    trace!("subdividing {} times", n);
    (0..n).fold(mesh, |mesh, _| subdivide(mesh))
}

/// Like [`subdivide`] but validates the input first.
pub fn checked_subdivide(mesh: TriangleMesh) -> Result<TriangleMesh, MeshError> {
    if let Err(e) = mesh.validate() {
        warn!("refusing to subdivide malformed mesh: {}", e);
        return Err(e);
    }
    Ok(subdivide(mesh))
}
