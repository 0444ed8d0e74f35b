use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use voxchunk_world::{ChunkCoord, ChunkGenConfig, ConfigError, load_config_from_path};

#[derive(Parser, Debug)]
#[command(name = "voxchunk", about = "Generate and mesh a single voxel terrain chunk")]
pub struct Cli {
    /// TOML file with [chunk], [noise] and [terrain] sections
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Chunk edge length in blocks
    #[arg(long)]
    pub size: Option<usize>,
    /// World units per block edge
    #[arg(long)]
    pub scale: Option<f32>,
    /// Noise seed
    #[arg(long)]
    pub seed: Option<i32>,
    /// Chunk coordinate
    #[arg(
        long,
        num_args = 3,
        value_names = ["CX", "CY", "CZ"],
        allow_negative_numbers = true,
        default_values_t = vec![0, 0, 0]
    )]
    pub chunk: Vec<i32>,
    /// Write the mesh as Wavefront OBJ
    #[arg(long)]
    pub obj: Option<PathBuf>,
    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Loads the config file (or defaults) and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<ChunkGenConfig, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => load_config_from_path(path)?,
            None => ChunkGenConfig::default(),
        };
        if let Some(size) = self.size {
            cfg.chunk.size = size;
        }
        if let Some(scale) = self.scale {
            cfg.chunk.scale = scale;
        }
        if let Some(seed) = self.seed {
            cfg.noise.seed = seed;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn chunk_coord(&self) -> ChunkCoord {
        match self.chunk.as_slice() {
            [cx, cy, cz] => ChunkCoord::new(*cx, *cy, *cz),
            _ => ChunkCoord::default(),
        }
    }
}
