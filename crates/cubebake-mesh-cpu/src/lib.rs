//! CPU baking of textured unit cubes under placement rotations.
#![forbid(unsafe_code)]

mod bake;
mod constants;
pub mod emit;
pub mod layout;
pub mod mesh_build;

pub use bake::{BakedCube, bake_cube};
pub use constants::CUBE_QUAD_COUNT;
pub use emit::{QuadEmitter, locked_uv};
pub use layout::{FaceRect, QuadLayout, Winding, geometry};
pub use mesh_build::{Mesh, MeshBuffers, MeshBuild, Quad};
