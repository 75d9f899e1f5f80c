use cubebake_blocks::{Direction, SpriteId};
use cubebake_geom::Vec3;

use crate::emit::QuadEmitter;
use crate::layout::{QuadLayout, Winding};

/// One emitted face of a baked cube.
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    pub corners: [Vec3; 4],
    /// Atlas UVs, already locked to the nominal face.
    pub uvs: [(f32, f32); 4],
    /// Direction the quad faces after placement.
    pub nominal_face: Direction,
    pub cull_face: Option<Direction>,
    /// Canonical face this quad was baked for.
    pub source_face: Direction,
    pub layout: QuadLayout,
    pub texture_slot: usize,
    pub sprite: SpriteId,
    pub color: [u8; 4],
}

impl Quad {
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.nominal_face.normal()
    }

    /// Winding measured from the corners against the nominal normal.
    pub fn winding(&self) -> Winding {
        let [a, b, c, _] = self.corners;
        let n = (b - a).cross(c - a);
        if n.dot(self.normal()) >= 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }
}

/// Immutable result of a bake: one quad per canonical face, in ordinal order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    quads: Box<[Quad]>,
}

impl Mesh {
    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// The quad baked for canonical face `source`.
    pub fn quad_for(&self, source: Direction) -> Option<&Quad> {
        self.quads.iter().find(|q| q.source_face == source)
    }

    /// The quad that ends up facing `face` after placement.
    pub fn quad_facing(&self, face: Direction) -> Option<&Quad> {
        self.quads.iter().find(|q| q.nominal_face == face)
    }

    /// Flattens the mesh into renderer-ready arrays (two triangles per quad).
    pub fn to_buffers(&self) -> MeshBuffers {
        let mut out = MeshBuffers::default();
        out.reserve_quads(self.quads.len());
        for q in self.quads.iter() {
            out.push_quad(q);
        }
        out
    }
}

/// Working buffer for one bake. Lives only for the duration of the call.
#[derive(Default)]
pub struct MeshBuild {
    quads: Vec<Quad>,
}

impl MeshBuild {
    pub fn with_capacity(n_quads: usize) -> Self {
        Self {
            quads: Vec::with_capacity(n_quads),
        }
    }

    /// Emitter writing into this buffer.
    pub fn emitter(&mut self) -> QuadEmitter<'_> {
        QuadEmitter::new(self)
    }

    #[inline]
    pub(crate) fn push(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Freezes the collected quads.
    pub fn build(self) -> Mesh {
        Mesh {
            quads: self.quads.into_boxed_slice(),
        }
    }
}

/// Interleaved vertex data for upload.
#[derive(Default, Clone, Debug)]
pub struct MeshBuffers {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u16>,
    pub col: Vec<u8>,
}

impl MeshBuffers {
    /// Pre-reserve capacity for `n_quads` quads.
    pub fn reserve_quads(&mut self, n_quads: usize) {
        // 4 vertices per quad
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.col.reserve(n_quads * 4 * 4);
        self.idx.reserve(n_quads * 6);
    }

    /// Appends a quad, reordering clockwise corners so both triangles face
    /// along the quad's normal.
    pub fn push_quad(&mut self, q: &Quad) {
        let base = (self.pos.len() / 3) as u16;
        let mut order = [0usize, 1, 2, 3];
        if q.winding() == Winding::Clockwise {
            order.swap(1, 3);
        }
        let n = q.normal();
        for &i in &order {
            let p = q.corners[i];
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.uv.extend_from_slice(&[q.uvs[i].0, q.uvs[i].1]);
            self.col.extend_from_slice(&q.color);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }
}
