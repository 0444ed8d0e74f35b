use voxchunk_geom::Vec3;

use crate::noise::NoiseSampler;

/// Maps a noise value in `[-1, 1]` onto a column height in `[0, size]`.
///
/// Rounds half-up; values outside the nominal range (and NaN) saturate.
#[inline]
pub fn remap_noise_to_height(noise: f32, size: usize) -> usize {
    let t = (noise + 1.0) * size as f32 / 2.0;
    // `as` saturates: NaN -> 0, negatives -> 0
    let h = (t + 0.5).floor() as usize;
    h.min(size)
}

/// Samples column heights for one chunk at a fixed world origin.
pub struct ColumnSampler<'s, S: ?Sized> {
    sampler: &'s S,
    origin: Vec3,
    scale: f32,
    size: usize,
}

impl<'s, S: NoiseSampler + ?Sized> ColumnSampler<'s, S> {
    pub fn new(sampler: &'s S, origin: Vec3, scale: f32, size: usize) -> Self {
        Self {
            sampler,
            origin,
            scale,
            size,
        }
    }

    /// Position handed to the sampler for local column `(x, y)`, in block units.
    ///
    /// Offsets are converted to world units first and divided back at the
    /// end so large origins keep their fractional part.
    #[inline]
    pub fn sample_position(&self, x: usize, y: usize) -> (f32, f32) {
        let sx = (x as f32 * self.scale + self.origin.x) / self.scale;
        let sy = (y as f32 * self.scale + self.origin.y) / self.scale;
        (sx, sy)
    }

    pub fn height_for(&self, x: usize, y: usize) -> usize {
        let (sx, sy) = self.sample_position(x, y);
        let height = remap_noise_to_height(self.sampler.sample(sx, sy), self.size);
        log::trace!(target: "terrain", "height({sx},{sy})={height}");
        height
    }
}
