use voxchunk_geom::{Vec2, Vec3};

use crate::face::{CUBE_CORNERS, Direction};

/// Per-quad UVs, in corner order. Identical for every direction, so faces
/// whose corner lists start at a different cube corner show the texture rotated.
pub const QUAD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Two triangles over the quad's four corners, relative to its first vertex.
pub const QUAD_INDICES: [u32; 6] = [3, 2, 0, 2, 1, 0];

/// Vertex, index, and UV buffers for one chunk mesh section.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<Vec3>,
    pub uv: Vec<Vec2>,
    pub idx: Vec<u32>,
    pub vertex_count: u32,
}

impl MeshBuild {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all arrays but retains capacity for reuse.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.uv.clear();
        self.idx.clear();
        self.vertex_count = 0;
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * 4);
        self.uv.reserve(n_quads * 4);
        self.idx.reserve(n_quads * 6);
    }

    /// Appends the unit-cube face for `dir`, scaled by `scale` and placed at `origin`.
    pub fn add_face(&mut self, dir: Direction, origin: Vec3, scale: f32) {
        let base = self.vertex_count;
        for c in dir.corners() {
            self.pos.push(CUBE_CORNERS[c] * scale + origin);
        }
        self.uv.extend_from_slice(&QUAD_UVS);
        self.idx.extend(QUAD_INDICES.iter().map(|i| base + i));
        self.vertex_count += 4;
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.pos.len() / 4
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Returns interleaved vertex positions (x,y,z per vertex).
    pub fn positions_flat(&self) -> Vec<f32> {
        self.pos.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Returns interleaved texture coordinates (u,v per vertex).
    pub fn uvs_flat(&self) -> Vec<f32> {
        self.uv.iter().flat_map(|t| [t.x, t.y]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_face_appends_one_quad() {
        let mut mb = MeshBuild::new();
        mb.add_face(Direction::PosZ, Vec3::new(2.0, 4.0, 6.0), 2.0);
        assert_eq!(mb.face_count(), 1);
        assert_eq!(mb.vertex_count, 4);
        assert_eq!(mb.idx, vec![3, 2, 0, 2, 1, 0]);
        assert_eq!(mb.uv, QUAD_UVS.to_vec());
        // +Z corners 5,4,1,0 scaled by 2 and offset
        assert_eq!(
            mb.pos,
            vec![
                Vec3::new(2.0, 6.0, 8.0),
                Vec3::new(2.0, 4.0, 8.0),
                Vec3::new(4.0, 4.0, 8.0),
                Vec3::new(4.0, 6.0, 8.0),
            ]
        );
    }

    #[test]
    fn indices_offset_by_running_count() {
        let mut mb = MeshBuild::new();
        mb.add_face(Direction::PosX, Vec3::ZERO, 1.0);
        mb.add_face(Direction::NegY, Vec3::ZERO, 1.0);
        assert_eq!(&mb.idx[6..], &[7, 6, 4, 6, 5, 4]);
        assert_eq!(mb.vertex_count, 8);
    }

    #[test]
    fn clear_resets_counts() {
        let mut mb = MeshBuild::new();
        mb.reserve_quads(8);
        mb.add_face(Direction::NegZ, Vec3::ZERO, 1.0);
        let cap = mb.pos.capacity();
        mb.clear_keep_capacity();
        assert!(mb.is_empty());
        assert_eq!(mb.vertex_count, 0);
        assert_eq!(mb.pos.capacity(), cap);
    }

    #[test]
    fn flat_views_interleave() {
        let mut mb = MeshBuild::new();
        mb.add_face(Direction::NegX, Vec3::ZERO, 1.0);
        let flat = mb.positions_flat();
        assert_eq!(flat.len(), 12);
        assert_eq!(&flat[..3], &[0.0, 0.0, 1.0]);
        assert_eq!(mb.uvs_flat(), vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
    }
}
