use thiserror::Error;

/// Ways a mesh can be rejected by the checked entry points.
///
/// The unchecked operations never produce these; they assume well-formed input.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("facet {facet} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        facet: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("facet {facet} repeats vertex {index}")]
    DegenerateFacet { facet: usize, index: u32 },

    #[error("cannot normalize zero-length vector ({x}, {y}, {z})")]
    ZeroLengthVector { x: f32, y: f32, z: f32 },
}
