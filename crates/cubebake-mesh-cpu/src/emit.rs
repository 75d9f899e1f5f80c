use cubebake_blocks::{Direction, Sprite, SpriteId};
use cubebake_geom::Vec3;

use crate::constants::{CULL_DEPTH_EPSILON, OPAQUE_WHITE};
use crate::layout::{FaceRect, QuadLayout};
use crate::mesh_build::{MeshBuild, Quad};

/// Quad under construction.
#[derive(Clone, Debug)]
struct Pending {
    corners: [Vec3; 4],
    uvs: [(f32, f32); 4],
    nominal_face: Direction,
    cull_face: Option<Direction>,
    source_face: Direction,
    layout: QuadLayout,
    texture_slot: usize,
    sprite: Option<SpriteId>,
    color: [u8; 4],
}

impl Default for Pending {
    fn default() -> Self {
        Self {
            corners: [Vec3::ZERO; 4],
            uvs: [(0.0, 0.0); 4],
            nominal_face: Direction::North,
            cull_face: None,
            source_face: Direction::North,
            layout: QuadLayout::Identity,
            texture_slot: 0,
            sprite: None,
            color: OPAQUE_WHITE,
        }
    }
}

/// Writes quads one at a time into a [`MeshBuild`].
///
/// Set geometry with [`square`](Self::square) before baking a sprite; locked
/// UVs are read off the corner positions.
pub struct QuadEmitter<'a> {
    build: &'a mut MeshBuild,
    pending: Pending,
}

impl<'a> QuadEmitter<'a> {
    pub(crate) fn new(build: &'a mut MeshBuild) -> Self {
        Self {
            build,
            pending: Pending::default(),
        }
    }

    /// Places the quad on `nominal_face` covering `rect`, inset by `depth`
    /// from the face toward the cube centre.
    pub fn square(&mut self, nominal_face: Direction, rect: FaceRect, depth: f32) -> &mut Self {
        let FaceRect {
            mut left,
            mut bottom,
            mut right,
            mut top,
        } = rect;
        let mut depth = depth;
        if depth.abs() < CULL_DEPTH_EPSILON {
            self.pending.cull_face = Some(nominal_face);
            depth = 0.0;
        } else {
            self.pending.cull_face = None;
        }
        self.pending.nominal_face = nominal_face;
        let p = &mut self.pending.corners;
        match nominal_face {
            Direction::Up | Direction::Down => {
                if nominal_face == Direction::Up {
                    depth = 1.0 - depth;
                    top = 1.0 - top;
                    bottom = 1.0 - bottom;
                }
                p[0] = Vec3::new(left, depth, top);
                p[1] = Vec3::new(left, depth, bottom);
                p[2] = Vec3::new(right, depth, bottom);
                p[3] = Vec3::new(right, depth, top);
            }
            Direction::East | Direction::West => {
                if nominal_face == Direction::East {
                    depth = 1.0 - depth;
                    left = 1.0 - left;
                    right = 1.0 - right;
                }
                p[0] = Vec3::new(depth, top, left);
                p[1] = Vec3::new(depth, bottom, left);
                p[2] = Vec3::new(depth, bottom, right);
                p[3] = Vec3::new(depth, top, right);
            }
            Direction::South | Direction::North => {
                if nominal_face == Direction::South {
                    depth = 1.0 - depth;
                    left = 1.0 - left;
                    right = 1.0 - right;
                }
                p[0] = Vec3::new(1.0 - left, top, depth);
                p[1] = Vec3::new(1.0 - left, bottom, depth);
                p[2] = Vec3::new(1.0 - right, bottom, depth);
                p[3] = Vec3::new(1.0 - right, top, depth);
            }
        }
        self
    }

    /// Applies `sprite` with UVs locked to the nominal face, so the texture
    /// keeps its world orientation whatever the corner order is.
    pub fn sprite_bake_locked(&mut self, slot: usize, sprite: &Sprite) -> &mut Self {
        let face = self.pending.nominal_face;
        for (uv, &p) in self.pending.uvs.iter_mut().zip(self.pending.corners.iter()) {
            let (u, v) = locked_uv(face, p);
            *uv = sprite.region.interpolate(u, v);
        }
        self.pending.texture_slot = slot;
        self.pending.sprite = Some(sprite.id.clone());
        self
    }

    pub fn color(&mut self, rgba: [u8; 4]) -> &mut Self {
        self.pending.color = rgba;
        self
    }

    /// Records which canonical face and layout produced this quad.
    pub fn source(&mut self, face: Direction, layout: QuadLayout) -> &mut Self {
        self.pending.source_face = face;
        self.pending.layout = layout;
        self
    }

    /// Appends the pending quad and resets the emitter. A quad without a
    /// sprite is dropped and `false` returned.
    pub fn emit(&mut self) -> bool {
        let pending = std::mem::take(&mut self.pending);
        let Some(sprite) = pending.sprite else {
            log::warn!("dropping quad on {} emitted without a sprite", pending.nominal_face);
            return false;
        };
        self.build.push(Quad {
            corners: pending.corners,
            uvs: pending.uvs,
            nominal_face: pending.nominal_face,
            cull_face: pending.cull_face,
            source_face: pending.source_face,
            layout: pending.layout,
            texture_slot: pending.texture_slot,
            sprite,
            color: pending.color,
        });
        true
    }
}

/// Face-local UV in `[0, 1]` for a corner, fixed to the face it lies on.
#[inline]
pub fn locked_uv(face: Direction, p: Vec3) -> (f32, f32) {
    match face {
        Direction::East => (1.0 - p.z, 1.0 - p.y),
        Direction::West => (p.z, 1.0 - p.y),
        Direction::North => (1.0 - p.x, 1.0 - p.y),
        Direction::South => (p.x, 1.0 - p.y),
        Direction::Down => (p.x, 1.0 - p.z),
        Direction::Up => (p.x, p.z),
    }
}
