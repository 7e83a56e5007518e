use std::{
    fs::File,
    io::{BufWriter, Write},
};

use anyhow::Context;
use byteorder::{LittleEndian, WriteBytesExt};
use geodesic_mesh::Vector3;

use crate::{args, build_sphere};

pub fn buffer_command(args: args::BufferArgs) -> anyhow::Result<()> {
    let mesh = build_sphere(&args.sphere);
    let verts = mesh.flatten_for_rendering();

    let f = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output))?;
    let mut w = BufWriter::new(f);
    write_vertex_buffer(&mut w, &verts)?;
    w.flush()
        .with_context(|| format!("failed to write {}", args.output))?;

    log::info!("wrote {} vertices to {}", verts.len(), args.output);
    Ok(())
}

/// Writes each vertex as three little-endian f32s, x then y then z, with no
/// header. The layout matches a tightly packed `vec3` vertex attribute.
pub fn write_vertex_buffer<W: Write>(w: &mut W, verts: &[Vector3]) -> std::io::Result<()> {
    for v in verts {
        w.write_f32::<LittleEndian>(v.x)?;
        w.write_f32::<LittleEndian>(v.y)?;
        w.write_f32::<LittleEndian>(v.z)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Seek, SeekFrom};

    use byteorder::ReadBytesExt;
    use geodesic_mesh::{generate_icosahedron, subdivide};

    use super::*;

    #[test]
    fn buffer_round_trips_through_file() {
        let mesh = subdivide(generate_icosahedron());
        let verts = mesh.flatten_for_rendering();

        let mut f = tempfile::tempfile().unwrap();
        write_vertex_buffer(&mut f, &verts).unwrap();

        f.seek(SeekFrom::Start(0)).unwrap();
        let mut bytes = Vec::new();
        f.read_to_end(&mut bytes).unwrap();
        assert_eq!(bytes.len(), 80 * 3 * 3 * 4);

        let mut r = bytes.as_slice();
        for v in &verts {
            assert_eq!(r.read_f32::<LittleEndian>().unwrap(), v.x);
            assert_eq!(r.read_f32::<LittleEndian>().unwrap(), v.y);
            assert_eq!(r.read_f32::<LittleEndian>().unwrap(), v.z);
        }
        assert!(r.is_empty());
    }

    #[test]
    fn buffer_command_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sphere.bin");
        buffer_command(args::BufferArgs {
            sphere: args::SphereArgs { subdivisions: 2 },
            output: path.to_string_lossy().into_owned(),
        })
        .unwrap();

        let len = std::fs::metadata(&path).unwrap().len();
        assert_eq!(len, 320 * 3 * 12);
    }
}
