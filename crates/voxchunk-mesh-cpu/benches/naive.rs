use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use voxchunk_blocks::BlockType;
use voxchunk_chunk::{ChunkBuf, generate_chunk_buffer};
use voxchunk_mesh_cpu::{MeshBuild, build_chunk_naive_into};
use voxchunk_world::{ChunkCoord, ChunkGenParams, FastNoiseSampler};

fn bench_generate_terrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_terrain");
    let params = ChunkGenParams::default();
    let sampler = FastNoiseSampler::new(&params.noise);
    group.bench_function("perlin_fbm_32", |b| {
        b.iter(|| {
            let out = generate_chunk_buffer(&params, ChunkCoord::new(0, 0, 0), &sampler);
            black_box(out);
        })
    });
    group.finish();
}

fn bench_build_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chunk_naive");
    group.measurement_time(Duration::from_secs(5));
    let params = ChunkGenParams::default();
    let sampler = FastNoiseSampler::new(&params.noise);
    let terrain = generate_chunk_buffer(&params, ChunkCoord::new(0, 0, 0), &sampler).buf;
    let solid = ChunkBuf::filled(ChunkCoord::new(0, 0, 0), params.size, BlockType::Stone);
    let mut checker = ChunkBuf::new(ChunkCoord::new(0, 0, 0), params.size);
    for i in 0..params.volume() {
        let (x, y, z) = checker.coords_of(i);
        if (x + y + z) % 2 == 0 {
            checker.set(x, y, z, BlockType::Stone);
        }
    }
    let mut out = MeshBuild::new();
    for (name, buf) in [("terrain_32", &terrain), ("solid_32", &solid), ("checker_32", &checker)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                build_chunk_naive_into(buf, params.scale, &mut out);
                black_box(out.face_count());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate_terrain, bench_build_naive);
criterion_main!(benches);
