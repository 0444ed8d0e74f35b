//! Chunk block grid and terrain generation.
#![forbid(unsafe_code)]

use std::time::Instant;

use voxchunk_blocks::BlockType;
use voxchunk_world::{ChunkCoord, ChunkGenParams, ColumnSampler, NoiseSampler};

/// Dense cubic grid of `size³` blocks, indexed `z*size*size + y*size + x` (z is up).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkBuf {
    pub coord: ChunkCoord,
    size: usize,
    blocks: Vec<BlockType>,
}

impl ChunkBuf {
    /// All-empty grid.
    pub fn new(coord: ChunkCoord, size: usize) -> Self {
        Self::filled(coord, size, BlockType::Empty)
    }

    pub fn filled(coord: ChunkCoord, size: usize, block: BlockType) -> Self {
        ChunkBuf {
            coord,
            size,
            blocks: vec![block; size * size * size],
        }
    }

    /// Wraps existing storage laid out as [`ChunkBuf::idx`] expects.
    ///
    /// Panics unless `blocks` holds exactly `size³` entries.
    pub fn from_blocks_local(coord: ChunkCoord, size: usize, blocks: Vec<BlockType>) -> Self {
        let expect = size * size * size;
        assert_eq!(
            blocks.len(),
            expect,
            "block storage of length {} does not fit chunk of size {size}",
            blocks.len()
        );
        ChunkBuf {
            coord,
            size,
            blocks,
        }
    }

    /// Edge length in blocks.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Linear block storage, `size³` long.
    #[inline]
    pub fn blocks(&self) -> &[BlockType] {
        &self.blocks
    }

    /// Linear index of `(x, y, z)`; callers guarantee the position is in range.
    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.size + y) * self.size + x
    }

    /// Inverse of [`ChunkBuf::idx`].
    #[inline]
    pub fn coords_of(&self, index: usize) -> (usize, usize, usize) {
        let n = self.size;
        (index % n, (index / n) % n, index / (n * n))
    }

    #[inline]
    pub fn contains_local(&self, x: i32, y: i32, z: i32) -> bool {
        let n = self.size as i64;
        let inside = |v: i32| (0..n).contains(&i64::from(v));
        inside(x) && inside(y) && inside(z)
    }

    #[inline]
    fn checked_idx(&self, x: usize, y: usize, z: usize) -> usize {
        let n = self.size;
        assert!(
            x < n && y < n && z < n,
            "block ({x}, {y}, {z}) outside chunk of size {n}"
        );
        self.idx(x, y, z)
    }

    /// Panics if the position is outside the chunk.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.blocks[self.checked_idx(x, y, z)]
    }

    /// Panics if the position is outside the chunk.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: BlockType) {
        let i = self.checked_idx(x, y, z);
        self.blocks[i] = block;
    }

    #[inline]
    pub fn get_checked(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        if !self.contains_local(x, y, z) {
            return None;
        }
        self.blocks
            .get(self.idx(x as usize, y as usize, z as usize))
            .copied()
    }

    /// Whether a face bordering `(x, y, z)` is visible: the position is
    /// outside the chunk or holds `Empty`.
    #[inline]
    pub fn is_transparent(&self, x: i32, y: i32, z: i32) -> bool {
        self.get_checked(x, y, z).is_none_or(BlockType::is_empty)
    }

    #[inline]
    pub fn has_solid(&self) -> bool {
        self.blocks.iter().any(|b| !b.is_empty())
    }

    #[inline]
    pub fn is_all_empty(&self) -> bool {
        !self.has_solid()
    }

    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_empty()).count()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChunkOccupancy {
    Empty,
    Populated,
}

impl ChunkOccupancy {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, ChunkOccupancy::Empty)
    }

    #[inline]
    pub fn has_blocks(self) -> bool {
        matches!(self, ChunkOccupancy::Populated)
    }
}

/// Summary of one height-field pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainStats {
    pub min_height: usize,
    pub max_height: usize,
    pub mean_height: f32,
    pub solid_blocks: usize,
}

#[derive(Clone, Debug)]
pub struct ChunkGenerateResult {
    pub buf: ChunkBuf,
    pub occupancy: ChunkOccupancy,
    pub stats: TerrainStats,
    /// Surface height of each `(x, y)` column, indexed `y*size + x`.
    pub heights: Vec<usize>,
}

/// Fills a chunk from the height field: `fill` below each column's height, `Empty` above.
pub fn generate_chunk_buffer<S>(
    params: &ChunkGenParams,
    coord: ChunkCoord,
    sampler: &S,
) -> ChunkGenerateResult
where
    S: NoiseSampler + ?Sized,
{
    let t0 = Instant::now();
    let n = params.size;
    let origin = coord.world_origin(n, params.scale);
    let columns = ColumnSampler::new(sampler, origin, params.scale, n);
    let mut buf = ChunkBuf::new(coord, n);
    let mut heights = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let height = columns.height_for(x, y);
            for z in 0..height {
                buf.set(x, y, z, params.fill);
            }
            heights.push(height);
        }
    }
    let solid_blocks: usize = heights.iter().sum();
    let stats = TerrainStats {
        min_height: heights.iter().copied().min().unwrap_or(0),
        max_height: heights.iter().copied().max().unwrap_or(0),
        mean_height: if heights.is_empty() {
            0.0
        } else {
            solid_blocks as f32 / heights.len() as f32
        },
        solid_blocks,
    };
    log::debug!(
        target: "terrain",
        "ms={} chunk_terrain coord=({}, {}, {}) size={} heights=[{}..{}] mean={:.2} solid={}",
        t0.elapsed().as_millis(),
        coord.cx,
        coord.cy,
        coord.cz,
        n,
        stats.min_height,
        stats.max_height,
        stats.mean_height,
        stats.solid_blocks
    );
    ChunkGenerateResult {
        occupancy: if solid_blocks > 0 {
            ChunkOccupancy::Populated
        } else {
            ChunkOccupancy::Empty
        },
        buf,
        stats,
        heights,
    }
}
