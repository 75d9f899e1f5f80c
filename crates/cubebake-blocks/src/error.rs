use std::path::PathBuf;

use thiserror::Error;

use crate::ident::SpriteId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,
    #[error("invalid character {ch:?} in identifier `{raw}`")]
    InvalidChar { raw: String, ch: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("rotation of {0} degrees is not a multiple of 90")]
    NotQuarterTurn(i32),
}

/// Configuration error: a texture set must name at least one texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextureSetError {
    #[error("texture set is empty")]
    Empty,
}

/// Failure building a `TextureSet` from texture names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureSetNameError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    #[error(transparent)]
    Set(#[from] TextureSetError),
}

/// A sprite handle the resolver cannot turn into texture data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("sprite not found: {0}")]
    NotFound(SpriteId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    #[error("model `{model}`: {source}")]
    Rotation {
        model: String,
        #[source]
        source: RotationError,
    },
    #[error("model `{model}`: {source}")]
    Textures {
        model: String,
        #[source]
        source: TextureSetNameError,
    },
    #[error("model `{0}` is defined more than once")]
    DuplicateModel(String),
    #[error("sprite `{sprite}` lies outside the {width}x{height} atlas")]
    SpriteOutOfBounds {
        sprite: String,
        width: u32,
        height: u32,
    },
}
