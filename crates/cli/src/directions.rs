use std::{
    fs::File,
    io::{BufWriter, Write},
};

use anyhow::Context;
use geodesic_mesh::{vec3_to_az_el, Vector3};

use crate::{args, build_sphere};

pub fn directions_command(args: args::DirectionsArgs) -> anyhow::Result<()> {
    let mesh = build_sphere(&args.sphere);

    match args.output {
        Some(path) => {
            let f = File::create(&path).with_context(|| format!("failed to create {}", path))?;
            let mut w = BufWriter::new(f);
            write_directions(&mut w, &mesh.vertices)?;
            w.flush().with_context(|| format!("failed to write {}", path))?;
        }
        None => {
            let stdout = std::io::stdout();
            write_directions(&mut stdout.lock(), &mesh.vertices)?;
        }
    }
    Ok(())
}

/// One `azimuth elevation` line per vertex, degrees.
pub fn write_directions<W: Write>(w: &mut W, verts: &[Vector3]) -> std::io::Result<()> {
    for v in verts {
        let (az, el) = vec3_to_az_el(*v);
        writeln!(w, "{:.6} {:.6}", az, el)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use geodesic_mesh::{az_el_to_vec3, generate_icosahedron};

    use super::*;

    #[test]
    fn one_line_per_vertex() {
        let mesh = generate_icosahedron();
        let mut out = Vec::new();
        write_directions(&mut out, &mesh.vertices).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);

        for (line, v) in lines.iter().zip(&mesh.vertices) {
            let mut parts = line.split(' ').map(|p| p.parse::<f32>().unwrap());
            let (az, el) = (parts.next().unwrap(), parts.next().unwrap());
            let back = az_el_to_vec3(az, el);
            assert!((back.x - v.x).abs() < 1e-4);
            assert!((back.y - v.y).abs() < 1e-4);
            assert!((back.z - v.z).abs() < 1e-4);
        }
    }

    #[test]
    fn directions_command_writes_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_string_lossy().into_owned();
        directions_command(args::DirectionsArgs {
            sphere: args::SphereArgs { subdivisions: 1 },
            output: Some(path.clone()),
        })
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 42);
    }
}
