use std::sync::Arc;

use crate::error::{ResolveError, TextureSetError, TextureSetNameError};
use crate::ident::{Identifier, SpriteId, block_atlas};

/// Normalized `[0, 1]` rectangle of a sprite inside its atlas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AtlasRegion {
    pub min_u: f32,
    pub min_v: f32,
    pub max_u: f32,
    pub max_v: f32,
}

impl AtlasRegion {
    pub const FULL: AtlasRegion = AtlasRegion {
        min_u: 0.0,
        min_v: 0.0,
        max_u: 1.0,
        max_v: 1.0,
    };

    /// Maps a face-local `(u, v)` in `[0, 1]` into the atlas.
    #[inline]
    pub fn interpolate(&self, u: f32, v: f32) -> (f32, f32) {
        (
            self.min_u + (self.max_u - self.min_u) * u,
            self.min_v + (self.max_v - self.min_v) * v,
        )
    }

    #[inline]
    pub fn contains(&self, u: f32, v: f32) -> bool {
        u >= self.min_u && u <= self.max_u && v >= self.min_v && v <= self.max_v
    }
}

/// Resolved, sampleable texture data for one handle.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub id: SpriteId,
    pub region: AtlasRegion,
    pub width: u32,
    pub height: u32,
}

/// Turns sprite handles into sprites. Supplied by whatever owns the atlases.
pub trait TextureResolver {
    fn resolve(&self, id: &SpriteId) -> Result<Sprite, ResolveError>;
}

impl<F> TextureResolver for F
where
    F: Fn(&SpriteId) -> Result<Sprite, ResolveError>,
{
    #[inline]
    fn resolve(&self, id: &SpriteId) -> Result<Sprite, ResolveError> {
        self(id)
    }
}

/// Ordered, non-empty, immutable list of texture handles.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureSet {
    ids: Arc<[SpriteId]>,
}

impl TextureSet {
    pub fn new(ids: Vec<SpriteId>) -> Result<TextureSet, TextureSetError> {
        if ids.is_empty() {
            return Err(TextureSetError::Empty);
        }
        Ok(TextureSet { ids: ids.into() })
    }

    /// Block-atlas textures named relative to `namespace` (`"block/stone"`).
    pub fn from_names<S: AsRef<str>>(
        namespace: &str,
        names: &[S],
    ) -> Result<TextureSet, TextureSetNameError> {
        TextureSet::from_names_in(&block_atlas(), namespace, names)
    }

    /// Textures on `atlas`, named relative to `namespace`.
    pub fn from_names_in<S: AsRef<str>>(
        atlas: &Identifier,
        namespace: &str,
        names: &[S],
    ) -> Result<TextureSet, TextureSetNameError> {
        let ids = names
            .iter()
            .map(|n| {
                Identifier::parse_in(n.as_ref(), namespace)
                    .map(|texture| SpriteId::new(atlas.clone(), texture))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TextureSet::new(ids)?)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<&SpriteId> {
        self.ids.get(slot)
    }

    #[inline]
    pub fn as_slice(&self) -> &[SpriteId] {
        &self.ids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpriteId> {
        self.ids.iter()
    }
}

impl<'a> IntoIterator for &'a TextureSet {
    type Item = &'a SpriteId;
    type IntoIter = std::slice::Iter<'a, SpriteId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
