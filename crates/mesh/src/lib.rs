//! Geodesic sphere generation.
//!
//! A regular icosahedron is refined by repeatedly splitting every facet into
//! four at its edge midpoints and pushing the new vertices out onto the unit
//! sphere. The result is a near-uniform triangulation of the sphere, useful
//! anywhere directions need to be sampled evenly.
//!
//! ```
//! use geodesic_mesh::{geodesic_sphere, SphereConfig};
//!
//! let mesh = geodesic_sphere(&SphereConfig { subdivisions: 2 });
//! assert_eq!(mesh.triangle_count(), 320);
//! assert_eq!(mesh.vertex_count(), 162);
//! assert!(mesh.is_on_unit_sphere(1e-5));
//! ```

mod error;
mod geometry;
mod icosahedron;
mod stats;
mod subdivide;
mod triangle_mesh;

pub use error::*;
pub use geometry::*;
pub use icosahedron::*;
pub use stats::*;
pub use subdivide::*;
pub use triangle_mesh::*;

/// Parameters for [`geodesic_sphere`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SphereConfig {
    /// Number of subdivision passes applied to the icosahedron. Each pass
    /// multiplies the facet count by four.
    pub subdivisions: u32,
}

/// Builds the icosahedron and subdivides it `config.subdivisions` times.
pub fn geodesic_sphere(config: &SphereConfig) -> TriangleMesh {
    subdivide_n(generate_icosahedron(), config.subdivisions)
}
