use crate::{geometry::normalize, Facet, TriangleMesh, Vector3};

/// Facet table for the vertex order produced in [`generate_icosahedron`].
///
/// Five facets fan around vertex 0, ten form the middle band and the last
/// five fan around vertex 3 on the opposite side. All are wound the same way.
const FACETS: [[u32; 3]; 20] = [
    // Cap around vertex 0.
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    // Band adjacent to the first cap.
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    // Cap around vertex 3.
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    // Band adjacent to the second cap.
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Generates a regular icosahedron inscribed in the unit sphere.
///
/// The 12 vertices are the signed permutations of `(0, ±1, ±φ)`, four per
/// axis-aligned golden rectangle, each normalized.
pub fn generate_icosahedron() -> TriangleMesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let vertices = [
        // xy rectangle
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        // yz rectangle
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        // zx rectangle
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .into_iter()
    .map(|(x, y, z)| normalize(Vector3::new(x, y, z)))
    .collect();

    TriangleMesh {
        vertices,
        triangles: FACETS.into_iter().map(Facet::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::geometry::angle_between;
    use float_eq::assert_float_eq;

    #[test]
    fn icosahedron_counts() {
        let ico = generate_icosahedron();
        assert_eq!(ico.vertex_count(), 12);
        assert_eq!(ico.triangle_count(), 20);
        assert_eq!(ico.validate(), Ok(()));
        assert!(ico.is_on_unit_sphere(1e-5));
    }

    #[test]
    fn every_edge_shared_by_two_facets() {
        let ico = generate_icosahedron();
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for t in &ico.triangles {
            for (a, b) in [(t.p0, t.p1), (t.p1, t.p2), (t.p2, t.p0)] {
                *edges.entry((a.min(b), a.max(b))).or_default() += 1;
            }
        }
        assert_eq!(edges.len(), 30);
        assert!(edges.values().all(|&n| n == 2));
    }

    #[test]
    fn edges_are_equal_length() {
        // Adjacent icosahedron vertices subtend arctan(2) on the unit sphere.
        let expected = 2.0_f32.atan().to_degrees();
        let ico = generate_icosahedron();
        for t in ico.iter_triangles() {
            assert_float_eq!(angle_between(t.p0, t.p1), expected, abs <= 1e-3);
            assert_float_eq!(angle_between(t.p1, t.p2), expected, abs <= 1e-3);
            assert_float_eq!(angle_between(t.p2, t.p0), expected, abs <= 1e-3);
        }
    }
}
