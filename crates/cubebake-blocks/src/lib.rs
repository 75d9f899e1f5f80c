//! Block-side vocabulary for cube baking: faces, placements, texture slots,
//! sprite handles, and the TOML catalogs that feed them.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod config;
pub mod direction;
pub mod error;
pub mod ident;
pub mod policy;
pub mod rotation;
pub mod sprite;

pub use atlas::SpriteAtlas;
pub use config::{ModelSpec, ModelsConfig};
pub use direction::Direction;
pub use error::{
    ConfigError, IdentifierError, ResolveError, RotationError, TextureSetError, TextureSetNameError,
};
pub use ident::{Identifier, SpriteId};
pub use policy::{SlotTable, assign};
pub use rotation::{DirectionRemap, ModelRotation, Quarter};
pub use sprite::{AtlasRegion, Sprite, TextureResolver, TextureSet};
