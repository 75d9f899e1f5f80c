use std::collections::HashMap;
use std::fs;
use std::path::Path;

use cubebake_blocks::ident::default_block_model;
use cubebake_blocks::{ConfigError, Identifier};
use serde::Deserialize;

use crate::transform::ModelTransformation;

/// A model the cube inherits presentation data from.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ParentModel {
    #[serde(default)]
    pub display: ModelTransformation,
}

/// Lookup of parent models by id, supplied by the host's model loader.
pub trait ModelLoader {
    fn parent(&self, id: &Identifier) -> Option<&ParentModel>;
}

/// Parent models loaded from `parents.toml`, always including the stock block parent.
#[derive(Clone, Debug)]
pub struct ParentModels {
    models: HashMap<Identifier, ParentModel>,
}

impl ParentModels {
    /// Only the stock block parent.
    pub fn builtin() -> Self {
        let mut models = HashMap::new();
        models.insert(
            default_block_model(),
            ParentModel {
                display: ModelTransformation::block_default(),
            },
        );
        Self { models }
    }

    /// No parents at all; every bake against it fails to find its parent.
    pub fn empty() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: Identifier, model: ParentModel) {
        self.models.insert(id, model);
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Entries in the file override the builtin ones.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let cfg: ParentsConfig = toml::from_str(toml_str)?;
        let mut out = ParentModels::builtin();
        for (id, model) in cfg.models {
            out.insert(id, model);
        }
        Ok(out)
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

impl Default for ParentModels {
    fn default() -> Self {
        ParentModels::builtin()
    }
}

impl ModelLoader for ParentModels {
    fn parent(&self, id: &Identifier) -> Option<&ParentModel> {
        self.models.get(id)
    }
}

#[derive(Deserialize)]
struct ParentsConfig {
    #[serde(default)]
    models: HashMap<Identifier, ParentModel>,
}
