use crate::{geometry::Vector3, MeshError, Triangle};

/// Geometry for a single facet.
///
/// The points are indices into the vertex list of the owning [`TriangleMesh`].
/// Storing each corner as a 4 byte index instead of a 12 byte `Vector3` is
/// what lets adjacent facets share a vertex, which subdivision depends on.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[repr(C)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

static_assertions::assert_eq_size!(Facet, [u32; 3]);

impl Facet {
    pub fn new(p0: u32, p1: u32, p2: u32) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.p0, self.p1, self.p2]
    }
}

impl From<[u32; 3]> for Facet {
    fn from([p0, p1, p2]: [u32; 3]) -> Self {
        Self { p0, p1, p2 }
    }
}

/// An indexed triangle mesh.
///
/// Every index in `triangles` is expected to be less than `vertices.len()`.
/// Meshes built by this crate also keep every vertex on the unit sphere.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct TriangleMesh {
    pub vertices: Vec<Vector3>,
    pub triangles: Vec<Facet>,
}

impl TriangleMesh {
    pub fn new(vertices: Vec<Vector3>, triangles: Vec<Facet>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Returns the number of triangles that comprises this mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Checks that every facet references three distinct, in-range vertices.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for (facet, t) in self.triangles.iter().enumerate() {
            let [a, b, c] = t.indices();
            for index in [a, b, c] {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfRange {
                        facet,
                        index,
                        vertex_count,
                    });
                }
            }
            if a == b || a == c {
                return Err(MeshError::DegenerateFacet { facet, index: a });
            }
            if b == c {
                return Err(MeshError::DegenerateFacet { facet, index: b });
            }
        }
        Ok(())
    }

    /// Iterates the facets with their corner positions resolved.
    ///
    /// Panics if a facet index is out of range; see [`TriangleMesh::validate`].
    pub fn iter_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.triangles.iter().map(|t| Triangle {
            p0: self.vertices[t.p0 as usize],
            p1: self.vertices[t.p1 as usize],
            p2: self.vertices[t.p2 as usize],
        })
    }

    /// Expands the mesh into a non-indexed vertex list, three entries per
    /// facet in facet order, ready to be drawn as a plain triangle list.
    pub fn flatten_for_rendering(&self) -> Vec<Vector3> {
        let mut verts = Vec::with_capacity(3 * self.triangles.len());
        for t in self.iter_triangles() {
            verts.extend([t.p0, t.p1, t.p2]);
        }
        verts
    }

    /// The facet indices as a flat list, for an indexed draw over `vertices`.
    pub fn index_buffer(&self) -> Vec<u32> {
        self.triangles.iter().flat_map(Facet::indices).collect()
    }

    /// Returns true if every vertex has unit length within `tolerance`.
    pub fn is_on_unit_sphere(&self, tolerance: f32) -> bool {
        use cgmath::InnerSpace;

        self.vertices
            .iter()
            .all(|v| float_eq::float_eq!(v.magnitude(), 1.0, abs <= tolerance))
    }
}
