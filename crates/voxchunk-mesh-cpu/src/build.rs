use std::time::Instant;

use voxchunk_chunk::ChunkBuf;
use voxchunk_geom::Vec3;

use crate::face::Direction;
use crate::mesh_build::MeshBuild;

/// Naive culling mesher: one quad per solid-block face whose neighbor is transparent.
///
/// Chunk borders are always open, so boundary faces are emitted even when a
/// neighboring chunk would cover them.
pub fn build_chunk_naive(buf: &ChunkBuf, scale: f32) -> MeshBuild {
    let mut mb = MeshBuild::new();
    build_chunk_naive_into(buf, scale, &mut mb);
    mb
}

/// Like [`build_chunk_naive`], reusing `out`'s allocations.
pub fn build_chunk_naive_into(buf: &ChunkBuf, scale: f32, out: &mut MeshBuild) {
    let t0 = Instant::now();
    out.clear_keep_capacity();
    let n = buf.size();
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                if buf.get(x, y, z).is_empty() {
                    continue;
                }
                let origin = Vec3::from_grid(x, y, z) * scale;
                for dir in Direction::ALL {
                    let (dx, dy, dz) = dir.delta();
                    if buf.is_transparent(x as i32 + dx, y as i32 + dy, z as i32 + dz) {
                        out.add_face(dir, origin, scale);
                    }
                }
            }
        }
    }
    log::info!(
        target: "perf",
        "ms={} mesher_naive_build n={} faces={} verts={} coord=({}, {}, {})",
        t0.elapsed().as_millis(),
        n,
        out.face_count(),
        out.vertex_count,
        buf.coord.cx,
        buf.coord.cy,
        buf.coord.cz
    );
}
