use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, ResolveError};
use crate::ident::{Identifier, SpriteId, block_atlas};
use crate::sprite::{AtlasRegion, Sprite, TextureResolver};

/// Sprite catalog for one atlas image, loaded from TOML.
#[derive(Clone, Debug)]
pub struct SpriteAtlas {
    pub id: Identifier,
    pub width: u32,
    pub height: u32,
    sprites: Vec<Sprite>,
    by_texture: HashMap<Identifier, usize>,
}

impl SpriteAtlas {
    pub fn new(id: Identifier, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            sprites: Vec::new(),
            by_texture: HashMap::new(),
        }
    }

    pub fn get(&self, texture: &Identifier) -> Option<&Sprite> {
        self.by_texture.get(texture).map(|&ix| &self.sprites[ix])
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Adds a sprite given its pixel rectangle. Replaces an existing entry of the same name.
    pub fn insert_pixels(
        &mut self,
        texture: Identifier,
        rect: PixelRect,
    ) -> Result<&Sprite, ConfigError> {
        let PixelRect { x, y, w, h } = rect;
        let fits = w > 0
            && h > 0
            && x.checked_add(w).is_some_and(|r| r <= self.width)
            && y.checked_add(h).is_some_and(|b| b <= self.height);
        if !fits {
            return Err(ConfigError::SpriteOutOfBounds {
                sprite: texture.to_string(),
                width: self.width,
                height: self.height,
            });
        }
        let (aw, ah) = (self.width as f32, self.height as f32);
        let sprite = Sprite {
            id: SpriteId::new(self.id.clone(), texture.clone()),
            region: AtlasRegion {
                min_u: x as f32 / aw,
                min_v: y as f32 / ah,
                max_u: (x + w) as f32 / aw,
                max_v: (y + h) as f32 / ah,
            },
            width: w,
            height: h,
        };
        let ix = match self.by_texture.get(&texture) {
            Some(&ix) => {
                self.sprites[ix] = sprite;
                ix
            }
            None => {
                self.sprites.push(sprite);
                self.by_texture.insert(texture, self.sprites.len() - 1);
                self.sprites.len() - 1
            }
        };
        Ok(&self.sprites[ix])
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let cfg: AtlasConfig = toml::from_str(toml_str)?;
        let namespace = cfg.atlas.namespace.as_deref().unwrap_or(DEFAULT_SPRITE_NAMESPACE);
        let id = match cfg.atlas.id {
            Some(raw) => raw.parse()?,
            None => block_atlas(),
        };
        let mut atlas = SpriteAtlas::new(id, cfg.atlas.width, cfg.atlas.height);
        let mut entries: Vec<(String, SpriteEntry)> = cfg.sprites.into_iter().collect();
        // HashMap order is random; sort so sprite indices are stable across loads.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, entry) in entries {
            let texture = Identifier::parse_in(&name, namespace)?;
            let rect = match entry {
                SpriteEntry::Rect([x, y, w, h]) => PixelRect { x, y, w, h },
                SpriteEntry::Detail(r) => r,
            };
            atlas.insert_pixels(texture, rect)?;
        }
        Ok(atlas)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }
}

impl TextureResolver for SpriteAtlas {
    fn resolve(&self, id: &SpriteId) -> Result<Sprite, ResolveError> {
        if id.atlas != self.id {
            return Err(ResolveError::NotFound(id.clone()));
        }
        self.get(&id.texture)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(id.clone()))
    }
}

pub const DEFAULT_SPRITE_NAMESPACE: &str = "cubebake";

// --- Config ---

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Deserialize)]
pub struct AtlasConfig {
    pub atlas: AtlasHeader,
    #[serde(default)]
    pub sprites: HashMap<String, SpriteEntry>,
}

#[derive(Deserialize)]
pub struct AtlasHeader {
    pub id: Option<String>,
    pub namespace: Option<String>,
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum SpriteEntry {
    // Compact: "block/stone" = [x, y, w, h]
    Rect([u32; 4]),
    // Detailed: "block/stone" = { x = 0, y = 0, w = 16, h = 16 }
    Detail(PixelRect),
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATLAS: &str = r#"
        [atlas]
        width = 64
        height = 32

        [sprites]
        "block/end_stone" = [0, 0, 16, 16]
        "block/log_top" = { x = 16, y = 0, w = 16, h = 16 }
        "other:block/moss" = [32, 16, 16, 16]
    "#;

    #[test]
    fn parses_both_entry_forms() {
        let atlas = SpriteAtlas::from_toml_str(ATLAS).unwrap();
        assert_eq!(atlas.len(), 3);
        assert_eq!(atlas.id, block_atlas());
        let top = atlas
            .get(&Identifier::parse_in("block/log_top", "cubebake").unwrap())
            .unwrap();
        assert_eq!(top.region.min_u, 0.25);
        assert_eq!(top.region.max_u, 0.5);
        assert_eq!(top.region.max_v, 0.5);
        assert!(atlas.get(&"other:block/moss".parse().unwrap()).is_some());
    }

    #[test]
    fn resolves_only_own_atlas() {
        let atlas = SpriteAtlas::from_toml_str(ATLAS).unwrap();
        let texture = Identifier::parse_in("block/end_stone", "cubebake").unwrap();
        assert!(atlas.resolve(&SpriteId::block(texture.clone())).is_ok());
        let foreign = SpriteId::new("minecraft:textures/atlas/items.png".parse().unwrap(), texture);
        assert_eq!(
            atlas.resolve(&foreign),
            Err(ResolveError::NotFound(foreign.clone()))
        );
    }

    #[test]
    fn rejects_sprite_outside_atlas() {
        let err = SpriteAtlas::from_toml_str(
            r#"
            [atlas]
            width = 16
            height = 16
            [sprites]
            "block/big" = [8, 0, 16, 16]
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::SpriteOutOfBounds { .. }));
    }

    #[test]
    fn reinserting_a_sprite_replaces_it_in_place() {
        let mut atlas = SpriteAtlas::new(block_atlas(), 32, 32);
        let stone = Identifier::parse_in("block/stone", "cubebake").unwrap();
        let dirt = Identifier::parse_in("block/dirt", "cubebake").unwrap();
        atlas.insert_pixels(stone.clone(), PixelRect { x: 0, y: 0, w: 16, h: 16 }).unwrap();
        atlas.insert_pixels(dirt.clone(), PixelRect { x: 16, y: 0, w: 16, h: 16 }).unwrap();
        atlas.insert_pixels(stone.clone(), PixelRect { x: 0, y: 16, w: 16, h: 16 }).unwrap();
        assert_eq!(atlas.len(), 2);
        assert_eq!(atlas.get(&stone).unwrap().region.min_v, 0.5);
        assert_eq!(atlas.get(&stone).unwrap().id.texture, stone);
        assert_eq!(atlas.get(&dirt).unwrap().region.min_u, 0.5);
    }
}
