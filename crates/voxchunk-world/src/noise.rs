//! 2D noise sources for the height field.
//!
//! A sampler is configured once and then only read; generation takes it by
//! shared reference so one instance can serve any number of chunks.

use std::fmt;

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

use crate::config::{FractalKind, NoiseKind, NoiseParams};

/// Deterministic, continuous 2D scalar field with values nominally in `[-1, 1]`.
pub trait NoiseSampler {
    fn sample(&self, x: f32, y: f32) -> f32;
}

impl<F> NoiseSampler for F
where
    F: Fn(f32, f32) -> f32,
{
    #[inline]
    fn sample(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

/// Returns the same value everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantSampler(pub f32);

impl NoiseSampler for ConstantSampler {
    #[inline]
    fn sample(&self, _x: f32, _y: f32) -> f32 {
        self.0
    }
}

/// FastNoiseLite-backed sampler.
pub struct FastNoiseSampler {
    noise: FastNoiseLite,
    params: NoiseParams,
}

impl FastNoiseSampler {
    pub fn new(params: &NoiseParams) -> Self {
        let mut noise = FastNoiseLite::with_seed(params.seed);
        noise.set_noise_type(Some(noise_type(params.kind)));
        noise.set_frequency(Some(params.frequency));
        noise.set_fractal_type(Some(fractal_type(params.fractal)));
        noise.set_fractal_octaves(Some(params.octaves));
        noise.set_fractal_lacunarity(Some(params.lacunarity));
        noise.set_fractal_gain(Some(params.gain));
        Self {
            noise,
            params: params.clone(),
        }
    }

    pub fn params(&self) -> &NoiseParams {
        &self.params
    }
}

impl NoiseSampler for FastNoiseSampler {
    #[inline]
    fn sample(&self, x: f32, y: f32) -> f32 {
        self.noise.get_noise_2d(x, y)
    }
}

impl fmt::Debug for FastNoiseSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastNoiseSampler")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

fn noise_type(kind: NoiseKind) -> NoiseType {
    match kind {
        NoiseKind::Perlin => NoiseType::Perlin,
        NoiseKind::OpenSimplex2 => NoiseType::OpenSimplex2,
        NoiseKind::OpenSimplex2S => NoiseType::OpenSimplex2S,
        NoiseKind::Cellular => NoiseType::Cellular,
        NoiseKind::ValueCubic => NoiseType::ValueCubic,
        NoiseKind::Value => NoiseType::Value,
    }
}

fn fractal_type(kind: FractalKind) -> FractalType {
    match kind {
        FractalKind::None => FractalType::None,
        FractalKind::Fbm => FractalType::FBm,
        FractalKind::Ridged => FractalType::Ridged,
        FractalKind::PingPong => FractalType::PingPong,
    }
}
