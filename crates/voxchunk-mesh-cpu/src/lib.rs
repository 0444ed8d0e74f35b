//! CPU meshing crate: naive face-culling mesher and the chunk aggregate.
#![forbid(unsafe_code)]

pub mod build;
pub mod chunk;
pub mod face;
pub mod mesh_build;

pub use build::{build_chunk_naive, build_chunk_naive_into};
pub use chunk::{Chunk, ChunkMeshCPU};
pub use face::{CUBE_CORNERS, Direction};
pub use mesh_build::{MeshBuild, QUAD_INDICES, QUAD_UVS};
