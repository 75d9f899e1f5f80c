//! Cube model adapter: one value that is both the unbaked model description
//! and, after [`CubeModel::bake`], the baked model the renderer draws.

use std::sync::Arc;

use cubebake_blocks::ident::default_block_model;
use cubebake_blocks::{
    Direction, DirectionRemap, Identifier, Sprite, SpriteId, TextureResolver, TextureSet,
    TextureSetNameError,
};
use cubebake_mesh_cpu::{Mesh, Quad, bake_cube};

use crate::error::{BakeError, RenderError};
use crate::loader::ModelLoader;
use crate::render::RenderContext;
use crate::transform::ModelTransformation;

#[derive(Clone, Debug)]
pub struct CubeModel {
    textures: TextureSet,
    state: ModelState,
}

#[derive(Clone, Debug)]
enum ModelState {
    Unbaked,
    Baked(Arc<BakedState>),
}

/// Swaps in `model` when every predicate value reaches its threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelOverride {
    pub model: Identifier,
    pub predicates: Vec<(Identifier, f32)>,
}

#[derive(Debug)]
struct BakedState {
    sprites: Vec<Sprite>,
    transformation: ModelTransformation,
    mesh: Arc<Mesh>,
}

impl CubeModel {
    pub fn new(textures: TextureSet) -> Self {
        Self {
            textures,
            state: ModelState::Unbaked,
        }
    }

    /// Block-atlas textures named relative to `namespace`. An empty list is rejected.
    pub fn from_names<S: AsRef<str>>(
        namespace: &str,
        names: &[S],
    ) -> Result<Self, TextureSetNameError> {
        Ok(Self::new(TextureSet::from_names(namespace, names)?))
    }

    /// Resolves the textures, copies the parent's display transformation and
    /// bakes the cube for `rotation`. Returns a new, baked adapter; `self` is
    /// left as it was so a reload never disturbs models still being drawn.
    pub fn bake<L, T, R>(
        &self,
        loader: &L,
        resolver: &T,
        rotation: &R,
    ) -> Result<CubeModel, BakeError>
    where
        L: ModelLoader + ?Sized,
        T: TextureResolver + ?Sized,
        R: DirectionRemap + ?Sized,
    {
        let parent_id = default_block_model();
        let transformation = loader
            .parent(&parent_id)
            .map(|p| p.display.clone())
            .ok_or(BakeError::MissingParent(parent_id))?;
        let baked = bake_cube(&self.textures, rotation, resolver)?;
        Ok(CubeModel {
            textures: self.textures.clone(),
            state: ModelState::Baked(Arc::new(BakedState {
                sprites: baked.sprites,
                transformation,
                mesh: baked.mesh,
            })),
        })
    }

    #[inline]
    pub fn is_baked(&self) -> bool {
        matches!(self.state, ModelState::Baked(_))
    }

    fn baked(&self) -> Option<&BakedState> {
        match &self.state {
            ModelState::Baked(b) => Some(b),
            ModelState::Unbaked => None,
        }
    }

    pub fn emit_block_quads(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        self.emit(ctx, "block")
    }

    pub fn emit_item_quads(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        self.emit(ctx, "item")
    }

    fn emit(&self, ctx: &mut dyn RenderContext, kind: &str) -> Result<(), RenderError> {
        match self.baked() {
            Some(b) => {
                ctx.accept_mesh(&b.mesh);
                Ok(())
            }
            None => {
                log::error!(
                    "{kind} render requested for unbaked cube model ({})",
                    self.textures.get(0).map(|s| s.to_string()).unwrap_or_default()
                );
                Err(RenderError::NotBaked)
            }
        }
    }

    pub fn mesh(&self) -> Option<&Arc<Mesh>> {
        self.baked().map(|b| &b.mesh)
    }

    pub fn sprites(&self) -> &[Sprite] {
        self.baked()
            .map(|b| b.sprites.as_slice())
            .unwrap_or_default()
    }

    pub fn textures(&self) -> &TextureSet {
        &self.textures
    }

    /// The single parent whose transformation this model copies.
    pub fn model_dependencies(&self) -> Vec<Identifier> {
        vec![default_block_model()]
    }

    /// Every texture the asset system must resolve before baking.
    pub fn texture_dependencies(&self) -> &[SpriteId] {
        self.textures.as_slice()
    }

    pub fn transformation(&self) -> Option<&ModelTransformation> {
        self.baked().map(|b| &b.transformation)
    }

    /// Sprite used for break particles: the first texture.
    pub fn particle_sprite(&self) -> Option<&Sprite> {
        self.baked().and_then(|b| b.sprites.first())
    }

    /// Per-face quad query of the legacy path. Cube models only render
    /// through [`RenderContext`], so this is always empty.
    pub fn quads(&self, _face: Option<Direction>) -> &[Quad] {
        &[]
    }

    /// Item predicate overrides. Cube models have none.
    pub fn overrides(&self) -> &[ModelOverride] {
        &[]
    }

    pub const fn use_ambient_occlusion(&self) -> bool {
        false
    }

    pub const fn has_depth(&self) -> bool {
        false
    }

    pub const fn is_side_lit(&self) -> bool {
        true
    }

    pub const fn is_builtin(&self) -> bool {
        false
    }

    pub const fn is_vanilla_adapter(&self) -> bool {
        false
    }
}
