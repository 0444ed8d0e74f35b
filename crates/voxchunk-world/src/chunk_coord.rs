use serde::{Deserialize, Serialize};
use voxchunk_geom::Vec3;

/// Integer position of a chunk in chunk units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// World-space position of the chunk's `(0,0,0)` block corner.
    #[inline]
    pub fn world_origin(self, size: usize, scale: f32) -> Vec3 {
        let span = size as f32 * scale;
        Vec3::new(
            self.cx as f32 * span,
            self.cy as f32 * span,
            self.cz as f32 * span,
        )
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ChunkCoord> for (i32, i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}
