#![forbid(unsafe_code)]

pub mod assets;
pub mod error;
pub mod loader;
pub mod model;
pub mod registry;
pub mod render;
pub mod transform;

pub use assets::AssetBundle;
pub use error::{BakeError, RegistryError, RenderError};
pub use loader::{ModelLoader, ParentModel, ParentModels};
pub use model::{CubeModel, ModelOverride};
pub use registry::{BakedGeneration, ModelKey, ModelRegistry, bake_all};
pub use render::{MeshCollector, RenderContext};
pub use transform::{DisplayMode, ModelTransformation, Transformation};
