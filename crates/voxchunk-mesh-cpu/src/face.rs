use voxchunk_geom::Vec3;

/// Axis-aligned neighbor direction (z is up).
///
/// Discriminants are the canonical ordinals; [`Direction::ALL`] lists them in
/// that order and is the only sequence the mesher iterates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    PosX = 0,
    PosY = 1,
    NegX = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

/// Unit-cube corners, indexed by the corner lists of [`Direction::corners`].
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 0.0),
];

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::PosY,
        Direction::NegX,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Returns the `[0..6)` ordinal of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::PosX => (1, 0, 0),
            Direction::NegX => (-1, 0, 0),
            Direction::PosY => (0, 1, 0),
            Direction::NegY => (0, -1, 0),
            Direction::PosZ => (0, 0, 1),
            Direction::NegZ => (0, 0, -1),
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Indices into [`CUBE_CORNERS`] of this direction's quad.
    ///
    /// Wound so that the `[3, 2, 0, 2, 1, 0]` index pattern is clockwise seen
    /// from outside the block.
    #[inline]
    pub fn corners(self) -> [usize; 4] {
        match self {
            Direction::PosX => [0, 1, 2, 3],
            Direction::PosY => [5, 0, 3, 6],
            Direction::NegX => [4, 5, 6, 7],
            Direction::NegY => [1, 4, 7, 2],
            Direction::PosZ => [5, 4, 1, 0],
            Direction::NegZ => [3, 2, 7, 6],
        }
    }

    /// Corner positions of this direction's quad on the unit cube.
    #[inline]
    pub fn quad(self) -> [Vec3; 4] {
        self.corners().map(|c| CUBE_CORNERS[c])
    }
}
