use std::collections::HashSet;

use cgmath::Vector3 as CgVector3;
use ordered_float::OrderedFloat;

use crate::{geometry::angle_between, subdivide::Edge, TriangleMesh, Vector3};

/// A vertex position that can be hashed. Positions compare bit-for-bit, so
/// two vertices only collide if they were computed identically.
pub type OrderedVec3 = CgVector3<OrderedFloat<f32>>;

fn ordered(v: &Vector3) -> OrderedVec3 {
    CgVector3::new(OrderedFloat(v.x), OrderedFloat(v.y), OrderedFloat(v.z))
}

/// Summary of a mesh's size and how evenly its edges cover the sphere.
#[derive(Debug, PartialEq, Clone)]
pub struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    /// Number of distinct undirected edges.
    pub edges: usize,
    /// Number of distinct vertex positions. Equal to `vertices` when no
    /// vertex was inserted twice.
    pub distinct_positions: usize,
    /// Smallest angle, in degrees, subtended by an edge. Zero for an empty mesh.
    pub min_edge_angle: f32,
    /// Largest angle, in degrees, subtended by an edge. Zero for an empty mesh.
    pub max_edge_angle: f32,
}

impl MeshStats {
    /// Ratio of the longest to the shortest edge. 1.0 is perfectly uniform.
    pub fn edge_ratio(&self) -> f32 {
        if self.min_edge_angle > 0.0 {
            self.max_edge_angle / self.min_edge_angle
        } else {
            0.0
        }
    }
}

impl TriangleMesh {
    /// Computes [`MeshStats`]. Edge angles assume unit-length vertices.
    pub fn stats(&self) -> MeshStats {
        let mut edges = HashSet::with_capacity(self.triangles.len() * 3 / 2);
        for t in &self.triangles {
            edges.insert(Edge::new(t.p0, t.p1));
            edges.insert(Edge::new(t.p1, t.p2));
            edges.insert(Edge::new(t.p2, t.p0));
        }

        let (min_edge_angle, max_edge_angle) = edges
            .iter()
            .map(|e| {
                let (a, b) = e.endpoints();
                angle_between(self.vertices[a as usize], self.vertices[b as usize])
            })
            .fold(None, |acc: Option<(f32, f32)>, angle| match acc {
                Some((lo, hi)) => Some((lo.min(angle), hi.max(angle))),
                None => Some((angle, angle)),
            })
            .unwrap_or((0.0, 0.0));

        let distinct_positions = self
            .vertices
            .iter()
            .map(ordered)
            .collect::<HashSet<_>>()
            .len();

        MeshStats {
            vertices: self.vertices.len(),
            triangles: self.triangles.len(),
            edges: edges.len(),
            distinct_positions,
            min_edge_angle,
            max_edge_angle,
        }
    }
}
