use voxchunk_chunk::{ChunkBuf, ChunkOccupancy, TerrainStats, generate_chunk_buffer};
use voxchunk_geom::{Aabb, Vec3};
use voxchunk_world::{ChunkCoord, ChunkGenParams, NoiseSampler};

use crate::build::build_chunk_naive;
use crate::mesh_build::MeshBuild;

/// Mesh handed to the renderer, in chunk-local world units.
#[derive(Clone, Debug)]
pub struct ChunkMeshCPU {
    pub coord: ChunkCoord,
    pub bbox: Aabb,
    pub build: MeshBuild,
}

/// One generated chunk: its block grid and the mesh built from it.
///
/// Only constructible from a complete grid, and the mesh is built before the
/// value exists, so the grid is never meshed half-populated.
#[derive(Clone, Debug)]
pub struct Chunk {
    scale: f32,
    buf: ChunkBuf,
    mesh: ChunkMeshCPU,
    occupancy: ChunkOccupancy,
    stats: Option<TerrainStats>,
}

impl Chunk {
    /// Generates terrain for `coord` and meshes it.
    pub fn generate<S>(params: &ChunkGenParams, coord: ChunkCoord, sampler: &S) -> Self
    where
        S: NoiseSampler + ?Sized,
    {
        let out = generate_chunk_buffer(params, coord, sampler);
        let mut chunk = Self::from_buf(out.buf, params.scale);
        chunk.stats = Some(out.stats);
        chunk
    }

    /// Meshes an already populated grid.
    ///
    /// Panics if `scale` is not positive and finite.
    pub fn from_buf(buf: ChunkBuf, scale: f32) -> Self {
        assert!(
            scale.is_finite() && scale > 0.0,
            "block scale must be positive and finite, got {scale}"
        );
        let build = build_chunk_naive(&buf, scale);
        let extent = buf.size() as f32 * scale;
        let mesh = ChunkMeshCPU {
            coord: buf.coord,
            bbox: Aabb::new(Vec3::ZERO, Vec3::new(extent, extent, extent)),
            build,
        };
        let occupancy = if buf.has_solid() {
            ChunkOccupancy::Populated
        } else {
            ChunkOccupancy::Empty
        };
        Self {
            scale,
            buf,
            mesh,
            occupancy,
            stats: None,
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.buf.coord
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.buf.size()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn blocks(&self) -> &ChunkBuf {
        &self.buf
    }

    #[inline]
    pub fn mesh(&self) -> &ChunkMeshCPU {
        &self.mesh
    }

    #[inline]
    pub fn occupancy(&self) -> ChunkOccupancy {
        self.occupancy
    }

    /// Height-field summary; `None` for chunks built with [`Chunk::from_buf`].
    #[inline]
    pub fn terrain_stats(&self) -> Option<&TerrainStats> {
        self.stats.as_ref()
    }

    /// Hands off the grid and mesh.
    pub fn into_parts(self) -> (ChunkBuf, ChunkMeshCPU) {
        (self.buf, self.mesh)
    }
}
