use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::atlas::DEFAULT_SPRITE_NAMESPACE;
use crate::error::ConfigError;
use crate::ident::{Identifier, block_atlas};
use crate::rotation::ModelRotation;
use crate::sprite::TextureSet;

/// A model ready to bake: its textures and every placement it is used in.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelSpec {
    pub name: String,
    pub textures: TextureSet,
    pub rotations: Vec<ModelRotation>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ModelsConfig {
    /// Namespace for texture names written without one.
    pub namespace: Option<String>,
    /// Atlas every texture is looked up in. Must match `[atlas] id` in
    /// `atlas.toml`; defaults to the block atlas.
    pub atlas: Option<String>,
    #[serde(default)]
    pub models: Vec<ModelDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ModelDef {
    pub name: String,
    pub textures: Vec<String>,
    /// Placements to bake. Absent means only the unrotated one.
    pub variants: Option<Vec<VariantDef>>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct VariantDef {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

impl ModelsConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    /// Validates every definition. Empty texture lists and non-quarter-turn
    /// rotations are rejected here, before anything is baked.
    pub fn compile(&self) -> Result<Vec<ModelSpec>, ConfigError> {
        let namespace = self.namespace.as_deref().unwrap_or(DEFAULT_SPRITE_NAMESPACE);
        let atlas = match &self.atlas {
            Some(raw) => raw.parse::<Identifier>()?,
            None => block_atlas(),
        };
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.models.len());
        let mut out = Vec::with_capacity(self.models.len());
        for def in &self.models {
            if !seen.insert(def.name.as_str()) {
                return Err(ConfigError::DuplicateModel(def.name.clone()));
            }
            let textures = TextureSet::from_names_in(&atlas, namespace, &def.textures).map_err(|source| {
                ConfigError::Textures {
                    model: def.name.clone(),
                    source,
                }
            })?;
            let rotations = match &def.variants {
                None => vec![ModelRotation::IDENTITY],
                Some(vs) => {
                    let mut rots = Vec::with_capacity(vs.len());
                    for v in vs {
                        let r = ModelRotation::from_degrees(v.x, v.y).map_err(|source| {
                            ConfigError::Rotation {
                                model: def.name.clone(),
                                source,
                            }
                        })?;
                        if !rots.contains(&r) {
                            rots.push(r);
                        }
                    }
                    rots
                }
            };
            out.push(ModelSpec {
                name: def.name.clone(),
                textures,
                rotations,
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RotationError, TextureSetError, TextureSetNameError};
    use crate::rotation::Quarter;

    #[test]
    fn compiles_models_with_default_variant() {
        let cfg = ModelsConfig::from_toml_str(
            r#"
            namespace = "betterend"

            [[models]]
            name = "end_stone"
            textures = ["block/end_stone"]

            [[models]]
            name = "mossy_log"
            textures = ["block/mossy_log_top", "block/mossy_log_side"]
            variants = [{}, { x = 90 }, { x = 90, y = 90 }, { x = 90, y = 90 }]
        "#,
        )
        .unwrap();
        let specs = cfg.compile().unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].rotations, vec![ModelRotation::IDENTITY]);
        assert_eq!(
            specs[0].textures.get(0).unwrap().texture.to_string(),
            "betterend:block/end_stone"
        );
        // Duplicate placements collapse.
        assert_eq!(
            specs[1].rotations,
            vec![
                ModelRotation::IDENTITY,
                ModelRotation::new(Quarter::R90, Quarter::R0),
                ModelRotation::new(Quarter::R90, Quarter::R90),
            ]
        );
    }

    #[test]
    fn empty_textures_is_a_config_error() {
        let cfg = ModelsConfig::from_toml_str(
            r#"
            [[models]]
            name = "blank"
            textures = []
        "#,
        )
        .unwrap();
        match cfg.compile() {
            Err(ConfigError::Textures { model, source }) => {
                assert_eq!(model, "blank");
                assert_eq!(source, TextureSetNameError::Set(TextureSetError::Empty));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn odd_rotation_is_rejected() {
        let cfg = ModelsConfig::from_toml_str(
            r#"
            [[models]]
            name = "tilted"
            textures = ["block/a"]
            variants = [{ y = 45 }]
        "#,
        )
        .unwrap();
        assert!(matches!(
            cfg.compile(),
            Err(ConfigError::Rotation {
                source: RotationError::NotQuarterTurn(45),
                ..
            })
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let cfg = ModelsConfig::from_toml_str(
            r#"
            [[models]]
            name = "a"
            textures = ["block/a"]
            [[models]]
            name = "a"
            textures = ["block/b"]
        "#,
        )
        .unwrap();
        assert!(matches!(cfg.compile(), Err(ConfigError::DuplicateModel(n)) if n == "a"));
    }

    #[test]
    fn atlas_key_sets_every_handle() {
        let cfg = ModelsConfig::from_toml_str(
            r#"
            atlas = "cubebake:textures/atlas/custom.png"

            [[models]]
            name = "stone"
            textures = ["block/stone", "minecraft:block/dirt"]
        "#,
        )
        .unwrap();
        let specs = cfg.compile().unwrap();
        let atlas: Identifier = "cubebake:textures/atlas/custom.png".parse().unwrap();
        assert!(specs[0].textures.iter().all(|id| id.atlas == atlas));

        let default = ModelsConfig::from_toml_str("[[models]]\nname = \"a\"\ntextures = [\"block/a\"]")
            .unwrap()
            .compile()
            .unwrap();
        assert_eq!(default[0].textures.get(0).unwrap().atlas, block_atlas());
    }

    #[test]
    fn bad_atlas_id_is_rejected() {
        let cfg = ModelsConfig::from_toml_str(
            r#"
            atlas = "Bad Atlas"
            [[models]]
            name = "a"
            textures = ["block/a"]
        "#,
        )
        .unwrap();
        assert!(matches!(cfg.compile(), Err(ConfigError::Identifier(_))));
    }
}
