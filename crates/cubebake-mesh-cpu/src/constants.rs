//! Shared constants for cubebake-mesh-cpu.

/// Fixed tint for every baked quad: white, fully opaque, i.e. no tint.
pub(crate) const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];

/// Quads closer than this to their nominal face are treated as lying on it
/// and get that face as their cull face.
pub(crate) const CULL_DEPTH_EPSILON: f32 = 1e-5;

/// Every baked cube has one quad per face.
pub const CUBE_QUAD_COUNT: usize = 6;
