use cubebake_blocks::{Identifier, ModelRotation, ResolveError};
use thiserror::Error;

/// Load-time failure of one model bake. No partial mesh survives it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BakeError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("parent model {0} is not loaded")]
    MissingParent(Identifier),
}

/// Rendering asked of a model that was never baked. Indicates a load-order bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("model rendered before it was baked")]
    NotBaked,
}

/// A bake failure tagged with the model variant it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("model `{model}` ({rotation}): {source}")]
pub struct RegistryError {
    pub model: String,
    pub rotation: ModelRotation,
    #[source]
    pub source: BakeError,
}
