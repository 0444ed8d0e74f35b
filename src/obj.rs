use std::io::{self, Write};

use voxchunk_mesh_cpu::MeshBuild;

/// Writes the mesh as Wavefront OBJ.
///
/// Triangles are written in reverse order: the mesher winds front faces
/// clockwise, OBJ viewers expect counter-clockwise.
pub fn write_obj<W: Write>(mesh: &MeshBuild, mut w: W) -> io::Result<()> {
    writeln!(
        w,
        "# voxchunk mesh: {} vertices, {} triangles",
        mesh.pos.len(),
        mesh.idx.len() / 3
    )?;
    for p in &mesh.pos {
        writeln!(w, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for t in &mesh.uv {
        writeln!(w, "vt {} {}", t.x, t.y)?;
    }
    for tri in mesh.idx.chunks_exact(3) {
        let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
        writeln!(w, "f {c}/{c} {b}/{b} {a}/{a}")?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxchunk_mesh_cpu::Direction;
    use voxchunk_world::ConstantSampler;

    #[test]
    fn single_face_writes_expected_records() {
        let mut mb = MeshBuild::new();
        mb.add_face(Direction::NegZ, voxchunk_mesh_cpu::CUBE_CORNERS[7], 1.0);
        let mut out = Vec::new();
        write_obj(&mb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# voxchunk mesh: 4 vertices, 2 triangles");
        assert_eq!(lines.iter().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(lines.iter().filter(|l| l.starts_with("vt ")).count(), 4);
        assert_eq!(lines[1], "v 1 1 0");
        // [3, 2, 0] reversed and made 1-based
        assert_eq!(lines[9], "f 1/1 3/3 4/4");
        assert_eq!(lines[10], "f 1/1 2/2 3/3");
    }

    #[test]
    fn generated_chunk_round_trips_counts() {
        let params = voxchunk_world::ChunkGenParams {
            size: 2,
            ..Default::default()
        };
        let chunk = voxchunk_mesh_cpu::Chunk::generate(
            &params,
            voxchunk_world::ChunkCoord::default(),
            &ConstantSampler(1.0),
        );
        let mut out = Vec::new();
        write_obj(&chunk.mesh().build, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 48);
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 96);
    }
}
