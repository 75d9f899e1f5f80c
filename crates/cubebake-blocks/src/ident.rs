use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::IdentifierError;

pub const DEFAULT_NAMESPACE: &str = "minecraft";
pub const BLOCK_ATLAS: &str = "minecraft:textures/atlas/blocks.png";
/// Parent every cube model copies its display transformation from.
pub const DEFAULT_BLOCK_MODEL: &str = "minecraft:block/block";

/// A `namespace:path` resource name.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    pub fn new(namespace: &str, path: &str) -> Result<Identifier, IdentifierError> {
        if namespace.is_empty() || path.is_empty() {
            return Err(IdentifierError::Empty);
        }
        let raw = || format!("{namespace}:{path}");
        if let Some(ch) = namespace.chars().find(|&c| !valid_char(c, false)) {
            return Err(IdentifierError::InvalidChar { raw: raw(), ch });
        }
        if let Some(ch) = path.chars().find(|&c| !valid_char(c, true)) {
            return Err(IdentifierError::InvalidChar { raw: raw(), ch });
        }
        Ok(Identifier {
            namespace: namespace.to_owned(),
            path: path.to_owned(),
        })
    }

    /// Parses `ns:path`, or a bare `path` placed in `default_namespace`.
    pub fn parse_in(raw: &str, default_namespace: &str) -> Result<Identifier, IdentifierError> {
        match raw.split_once(':') {
            Some((ns, path)) => Identifier::new(ns, path),
            None => Identifier::new(default_namespace, raw),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[inline]
fn valid_char(c: char, allow_slash: bool) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.') || (allow_slash && c == '/')
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::parse_in(s, DEFAULT_NAMESPACE)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Handle to one texture inside one atlas. Cheap to clone, opaque to the baker.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SpriteId {
    pub atlas: Identifier,
    pub texture: Identifier,
}

impl SpriteId {
    pub fn new(atlas: Identifier, texture: Identifier) -> Self {
        Self { atlas, texture }
    }

    /// A texture on the shared block atlas.
    pub fn block(texture: Identifier) -> Self {
        Self {
            atlas: block_atlas(),
            texture,
        }
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.atlas, self.texture)
    }
}

pub fn block_atlas() -> Identifier {
    Identifier {
        namespace: DEFAULT_NAMESPACE.to_owned(),
        path: "textures/atlas/blocks.png".to_owned(),
    }
}

pub fn default_block_model() -> Identifier {
    Identifier {
        namespace: DEFAULT_NAMESPACE.to_owned(),
        path: "block/block".to_owned(),
    }
}
