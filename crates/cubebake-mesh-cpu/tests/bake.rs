use std::cell::RefCell;
use std::collections::HashSet;

use cubebake_blocks::{
    AtlasRegion, Direction, DirectionRemap, ModelRotation, Quarter, ResolveError, Sprite,
    SpriteId, TextureSet,
};
use cubebake_mesh_cpu::{CUBE_QUAD_COUNT, QuadLayout, bake_cube};

fn set(names: &[&str]) -> TextureSet {
    TextureSet::from_names("cubebake", names).expect("texture set")
}

fn resolve_any(id: &SpriteId) -> Result<Sprite, ResolveError> {
    Ok(Sprite {
        id: id.clone(),
        region: AtlasRegion::FULL,
        width: 16,
        height: 16,
    })
}

fn slot_of(mesh: &cubebake_mesh_cpu::Mesh, d: Direction) -> usize {
    mesh.quad_for(d).expect("quad for face").texture_slot
}

#[test]
fn single_texture_identity_rotation() {
    let baked = bake_cube(&set(&["block/stone"]), &ModelRotation::IDENTITY, &resolve_any).unwrap();
    assert_eq!(baked.mesh.len(), CUBE_QUAD_COUNT);
    for q in baked.mesh.quads() {
        assert_eq!(q.texture_slot, 0);
        assert_eq!(q.nominal_face, q.source_face);
        assert_eq!(q.layout, QuadLayout::Identity);
        assert_eq!(q.color, [255, 255, 255, 255]);
        assert_eq!(q.cull_face, Some(q.nominal_face));
    }
}

#[test]
fn three_textures_pair_faces_by_axis() {
    let baked = bake_cube(
        &set(&["block/ends", "block/front_back", "block/sides"]),
        &ModelRotation::IDENTITY,
        &resolve_any,
    )
    .unwrap();
    let mesh = &baked.mesh;
    assert_eq!(slot_of(mesh, Direction::Up), 0);
    assert_eq!(slot_of(mesh, Direction::Down), 0);
    assert_eq!(slot_of(mesh, Direction::North), 1);
    assert_eq!(slot_of(mesh, Direction::South), 1);
    assert_eq!(slot_of(mesh, Direction::East), 2);
    assert_eq!(slot_of(mesh, Direction::West), 2);
    let side = mesh.quad_for(Direction::East).unwrap();
    assert_eq!(side.sprite.texture.path(), "block/sides");
}

#[test]
fn every_placement_covers_each_face_once() {
    let textures = set(&["block/a", "block/b", "block/c", "block/d", "block/e", "block/f"]);
    for rot in ModelRotation::all() {
        let baked = bake_cube(&textures, &rot, &resolve_any).unwrap();
        assert_eq!(baked.mesh.len(), CUBE_QUAD_COUNT);
        let faces: HashSet<Direction> = baked.mesh.quads().iter().map(|q| q.nominal_face).collect();
        assert_eq!(faces.len(), 6, "placement {rot}");
        for q in baked.mesh.quads() {
            assert_eq!(q.nominal_face, rot.remap(q.source_face));
            assert_eq!(q.texture_slot, q.source_face.index());
        }
    }
}

#[test]
fn slots_follow_canonical_not_rotated_face() {
    // Log tipped on its side: the end texture moves to north/south.
    let rot = ModelRotation::new(Quarter::R90, Quarter::R0);
    let baked = bake_cube(&set(&["block/log_top", "block/log_side"]), &rot, &resolve_any).unwrap();
    let north = baked.mesh.quad_facing(Direction::North).unwrap();
    assert_eq!(north.source_face, Direction::Up);
    assert_eq!(north.texture_slot, 0);
    let up = baked.mesh.quad_facing(Direction::Up).unwrap();
    assert_eq!(up.texture_slot, 1);
}

#[test]
fn baking_is_idempotent() {
    let textures = set(&["block/a", "block/b", "block/c", "block/d"]);
    for rot in ModelRotation::all() {
        let a = bake_cube(&textures, &rot, &resolve_any).unwrap();
        let b = bake_cube(&textures, &rot, &resolve_any).unwrap();
        assert_eq!(*a.mesh, *b.mesh);
        assert_eq!(a.sprites, b.sprites);
    }
}

#[test]
fn each_handle_resolves_exactly_once() {
    let calls = RefCell::new(Vec::new());
    let counting = |id: &SpriteId| {
        calls.borrow_mut().push(id.clone());
        resolve_any(id)
    };
    let textures = set(&["block/a", "block/b"]);
    let baked = bake_cube(&textures, &ModelRotation::IDENTITY, &counting).unwrap();
    assert_eq!(calls.borrow().as_slice(), textures.as_slice());
    assert_eq!(baked.sprites.len(), 2);
}

#[test]
fn resolution_failure_yields_no_mesh() {
    let missing = |id: &SpriteId| {
        if id.texture.path() == "block/missing" {
            Err(ResolveError::NotFound(id.clone()))
        } else {
            resolve_any(id)
        }
    };
    let textures = set(&["block/present", "block/missing"]);
    let err = bake_cube(&textures, &ModelRotation::IDENTITY, &missing).unwrap_err();
    assert_eq!(err, ResolveError::NotFound(textures.get(1).unwrap().clone()));
}

#[test]
fn buffers_keep_triangles_front_facing() {
    let rot = ModelRotation::new(Quarter::R90, Quarter::R90);
    let baked = bake_cube(&set(&["block/a"]), &rot, &resolve_any).unwrap();
    let buf = baked.mesh.to_buffers();
    assert_eq!(buf.vertex_count(), 24);
    assert_eq!(buf.idx.len(), 36);
    for tri in buf.idx.chunks(3) {
        let p = |i: u16| {
            let i = i as usize * 3;
            cubebake_geom::Vec3::new(buf.pos[i], buf.pos[i + 1], buf.pos[i + 2])
        };
        let n_at = |i: u16| {
            let i = i as usize * 3;
            cubebake_geom::Vec3::new(buf.norm[i], buf.norm[i + 1], buf.norm[i + 2])
        };
        let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
        let face_n = (b - a).cross(c - a);
        assert!(face_n.dot(n_at(tri[0])) > 0.0);
    }
}
