use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use voxchunk_blocks::BlockType;

/// Largest accepted chunk edge; N³ cells are allocated up front.
pub const MAX_CHUNK_SIZE: usize = 256;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("chunk size must be positive")]
    ZeroSize,
    #[error("chunk size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: usize, max: usize },
    #[error("block scale must be positive and finite, got {0}")]
    InvalidScale(f32),
    #[error("noise frequency must be finite, got {0}")]
    InvalidFrequency(f32),
    #[error("fractal lacunarity must be finite, got {0}")]
    InvalidLacunarity(f32),
    #[error("fractal gain must be finite, got {0}")]
    InvalidGain(f32),
    #[error("fractal octaves must be at least 1, got {0}")]
    InvalidOctaves(i32),
    #[error("terrain fill block must not be empty")]
    EmptyFill,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChunkGenConfig {
    #[serde(default)]
    pub chunk: ChunkDims,
    #[serde(default)]
    pub noise: NoiseConfig,
    #[serde(default)]
    pub terrain: TerrainConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChunkDims {
    #[serde(default = "default_size")]
    pub size: usize,
    /// World units per block edge.
    #[serde(default = "default_scale")]
    pub scale: f32,
}
fn default_size() -> usize {
    32
}
fn default_scale() -> f32 {
    1.0
}
impl Default for ChunkDims {
    fn default() -> Self {
        Self {
            size: default_size(),
            scale: default_scale(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    Perlin,
    OpenSimplex2,
    OpenSimplex2S,
    Cellular,
    ValueCubic,
    Value,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FractalKind {
    None,
    Fbm,
    Ridged,
    PingPong,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NoiseConfig {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_kind")]
    pub kind: NoiseKind,
    #[serde(default = "default_fractal")]
    pub fractal: FractalKind,
    #[serde(default = "default_octaves")]
    pub octaves: i32,
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f32,
    #[serde(default = "default_gain")]
    pub gain: f32,
}
fn default_seed() -> i32 {
    1337
}
fn default_frequency() -> f32 {
    0.03
}
fn default_kind() -> NoiseKind {
    NoiseKind::Perlin
}
fn default_fractal() -> FractalKind {
    FractalKind::Fbm
}
fn default_octaves() -> i32 {
    3
}
fn default_lacunarity() -> f32 {
    2.0
}
fn default_gain() -> f32 {
    0.5
}
impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            frequency: default_frequency(),
            kind: default_kind(),
            fractal: default_fractal(),
            octaves: default_octaves(),
            lacunarity: default_lacunarity(),
            gain: default_gain(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TerrainConfig {
    /// Block placed below the surface height.
    #[serde(default = "default_fill")]
    pub fill: BlockType,
}
fn default_fill() -> BlockType {
    BlockType::Stone
}
impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            fill: default_fill(),
        }
    }
}

impl ChunkGenConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ChunkGenConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.chunk.size;
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if size > MAX_CHUNK_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size,
                max: MAX_CHUNK_SIZE,
            });
        }
        let scale = self.chunk.scale;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ConfigError::InvalidScale(scale));
        }
        if !self.noise.frequency.is_finite() {
            return Err(ConfigError::InvalidFrequency(self.noise.frequency));
        }
        if !self.noise.lacunarity.is_finite() {
            return Err(ConfigError::InvalidLacunarity(self.noise.lacunarity));
        }
        if !self.noise.gain.is_finite() {
            return Err(ConfigError::InvalidGain(self.noise.gain));
        }
        if self.noise.octaves < 1 {
            return Err(ConfigError::InvalidOctaves(self.noise.octaves));
        }
        if self.terrain.fill.is_empty() {
            return Err(ConfigError::EmptyFill);
        }
        Ok(())
    }
}

// Flattened snapshot of the config handed to generation.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkGenParams {
    pub size: usize,
    pub scale: f32,
    pub fill: BlockType,
    pub noise: NoiseParams,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams {
    pub seed: i32,
    pub frequency: f32,
    pub kind: NoiseKind,
    pub fractal: FractalKind,
    pub octaves: i32,
    pub lacunarity: f32,
    pub gain: f32,
}

impl Default for ChunkGenParams {
    fn default() -> Self {
        Self::from_config(&ChunkGenConfig::default())
    }
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self::from_config(&NoiseConfig::default())
    }
}

impl ChunkGenParams {
    pub fn from_config(cfg: &ChunkGenConfig) -> Self {
        Self {
            size: cfg.chunk.size,
            scale: cfg.chunk.scale,
            fill: cfg.terrain.fill,
            noise: NoiseParams::from_config(&cfg.noise),
        }
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.size * self.size * self.size
    }
}

impl NoiseParams {
    pub fn from_config(cfg: &NoiseConfig) -> Self {
        Self {
            seed: cfg.seed,
            frequency: cfg.frequency,
            kind: cfg.kind,
            fractal: cfg.fractal,
            octaves: cfg.octaves,
            lacunarity: cfg.lacunarity,
            gain: cfg.gain,
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ChunkGenConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = ChunkGenConfig::from_toml_str(&s)?;
    log::debug!(
        target: "config",
        "loaded {} size={} scale={} seed={}",
        path.display(),
        cfg.chunk.size,
        cfg.chunk.scale,
        cfg.noise.seed
    );
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = ChunkGenConfig::from_toml_str("").unwrap();
        let p = ChunkGenParams::from_config(&cfg);
        assert_eq!(p, ChunkGenParams::default());
        assert_eq!(p.size, 32);
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.fill, BlockType::Stone);
        assert_eq!(p.noise.seed, 1337);
        assert_eq!(p.noise.frequency, 0.03);
        assert_eq!(p.noise.kind, NoiseKind::Perlin);
        assert_eq!(p.noise.fractal, FractalKind::Fbm);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let cfg = ChunkGenConfig::from_toml_str(
            r#"
            [chunk]
            size = 16

            [noise]
            kind = "opensimplex2"
            octaves = 5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.chunk.size, 16);
        assert_eq!(cfg.chunk.scale, 1.0);
        assert_eq!(cfg.noise.kind, NoiseKind::OpenSimplex2);
        assert_eq!(cfg.noise.octaves, 5);
        assert_eq!(cfg.noise.gain, 0.5);
    }

    #[test]
    fn rejects_invalid_values() {
        let zero = ChunkGenConfig::from_toml_str("[chunk]\nsize = 0");
        assert!(matches!(zero, Err(ConfigError::ZeroSize)));

        let huge = ChunkGenConfig::from_toml_str("[chunk]\nsize = 1024");
        assert!(matches!(
            huge,
            Err(ConfigError::SizeTooLarge { size: 1024, .. })
        ));

        let scale = ChunkGenConfig::from_toml_str("[chunk]\nscale = -1.0");
        assert!(matches!(scale, Err(ConfigError::InvalidScale(_))));

        let freq = ChunkGenConfig::from_toml_str("[noise]\nfrequency = nan");
        assert!(matches!(freq, Err(ConfigError::InvalidFrequency(_))));

        let lac = ChunkGenConfig::from_toml_str("[noise]\nlacunarity = inf");
        assert!(matches!(lac, Err(ConfigError::InvalidLacunarity(_))));

        let gain = ChunkGenConfig::from_toml_str("[noise]\ngain = nan");
        assert!(matches!(gain, Err(ConfigError::InvalidGain(_))));

        let oct = ChunkGenConfig::from_toml_str("[noise]\noctaves = 0");
        assert!(matches!(oct, Err(ConfigError::InvalidOctaves(0))));

        let fill = ChunkGenConfig::from_toml_str("[terrain]\nfill = \"empty\"");
        assert!(matches!(fill, Err(ConfigError::EmptyFill)));
    }

    #[test]
    fn parse_errors_are_reported() {
        let bad = ChunkGenConfig::from_toml_str("[chunk]\nsize = \"big\"");
        assert!(matches!(bad, Err(ConfigError::Parse(_))));
        let unknown_kind = ChunkGenConfig::from_toml_str("[noise]\nkind = \"worley\"");
        assert!(matches!(unknown_kind, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config_from_path(Path::new("/nonexistent/voxchunk.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/voxchunk.toml"));
    }
}
