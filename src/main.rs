mod cli;
mod logging;
mod obj;

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use clap::Parser;
use voxchunk_mesh_cpu::Chunk;
use voxchunk_world::{ChunkGenParams, FastNoiseSampler};

use crate::cli::Cli;

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let cfg = cli.resolve_config()?;
    let params = ChunkGenParams::from_config(&cfg);
    let coord = cli.chunk_coord();
    let sampler = FastNoiseSampler::new(&params.noise);
    log::info!(
        "generating chunk ({}, {}, {}) size={} scale={} fill={} noise={:?}",
        coord.cx,
        coord.cy,
        coord.cz,
        params.size,
        params.scale,
        params.fill,
        sampler.params()
    );

    let chunk = Chunk::generate(&params, coord, &sampler);
    let mesh = &chunk.mesh().build;
    if let Some(stats) = chunk.terrain_stats() {
        log::info!(
            "terrain heights=[{}..{}] mean={:.2} solid={} occupancy={:?}",
            stats.min_height,
            stats.max_height,
            stats.mean_height,
            stats.solid_blocks,
            chunk.occupancy()
        );
    }
    log::info!(
        "mesh faces={} vertices={} indices={} uvs={}",
        mesh.face_count(),
        mesh.pos.len(),
        mesh.idx.len(),
        mesh.uv.len()
    );

    if let Some(path) = &cli.obj {
        let file = File::create(path)?;
        obj::write_obj(mesh, BufWriter::new(file))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logging(cli.log_level, cli.log_file.as_deref()) {
        eprintln!("voxchunk: failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
