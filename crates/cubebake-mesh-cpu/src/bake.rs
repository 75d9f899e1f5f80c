use std::sync::Arc;
use std::time::Instant;

use cubebake_blocks::{
    Direction, DirectionRemap, ResolveError, SlotTable, Sprite, TextureResolver, TextureSet,
};

use crate::constants::{CUBE_QUAD_COUNT, OPAQUE_WHITE};
use crate::layout::geometry;
use crate::mesh_build::{Mesh, MeshBuild};

/// Output of [`bake_cube`]: the frozen mesh plus the sprites it resolved, in
/// texture-set order.
#[derive(Clone, Debug)]
pub struct BakedCube {
    pub mesh: Arc<Mesh>,
    pub sprites: Vec<Sprite>,
}

/// Bakes the six faces of a unit cube for one placement.
///
/// Every handle in `textures` is resolved exactly once, before any quad is
/// emitted; the first failure aborts the bake and no mesh is produced.
pub fn bake_cube<R, T>(
    textures: &TextureSet,
    rotation: &R,
    resolver: &T,
) -> Result<BakedCube, ResolveError>
where
    R: DirectionRemap + ?Sized,
    T: TextureResolver + ?Sized,
{
    let t0 = Instant::now();
    let sprites = textures
        .iter()
        .map(|id| resolver.resolve(id))
        .collect::<Result<Vec<Sprite>, _>>()?;
    let slots = SlotTable::for_count(sprites.len());

    let mut build = MeshBuild::with_capacity(CUBE_QUAD_COUNT);
    let mut emitter = build.emitter();
    for canonical in Direction::ALL {
        let rotated = rotation.remap(canonical);
        let layout = geometry(canonical, rotated);
        let slot = slots.slot(canonical);
        emitter
            .square(rotated, layout.rect(), 0.0)
            .sprite_bake_locked(slot, &sprites[slot])
            .color(OPAQUE_WHITE)
            .source(canonical, layout);
        let emitted = emitter.emit();
        debug_assert!(emitted);
    }
    debug_assert_eq!(build.len(), CUBE_QUAD_COUNT);
    let mesh = build.build();
    log::debug!(
        "baked cube textures={} quads={} in {}us",
        sprites.len(),
        mesh.len(),
        t0.elapsed().as_micros()
    );
    Ok(BakedCube {
        mesh: Arc::new(mesh),
        sprites,
    })
}
