//! Chunk sizing, noise sampling, and terrain parameters.
#![forbid(unsafe_code)]

pub mod chunk_coord;
pub mod config;
pub mod noise;
pub mod terrain;

pub use chunk_coord::ChunkCoord;
pub use config::{ChunkGenConfig, ChunkGenParams, ConfigError, NoiseParams, load_config_from_path};
pub use noise::{ConstantSampler, FastNoiseSampler, NoiseSampler};
pub use terrain::{ColumnSampler, remap_noise_to_height};
