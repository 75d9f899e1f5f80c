use std::path::{Path, PathBuf};

use cubebake_blocks::{ConfigError, ModelSpec, ModelsConfig, SpriteAtlas};

use crate::loader::ParentModels;

pub const ASSETS_ENV: &str = "CUBEBAKE_ASSETS";

pub fn resolve_assets_root(cli: Option<PathBuf>) -> PathBuf {
    // Precedence: CLI flag -> CUBEBAKE_ASSETS env -> search nearby dirs -> CWD
    if let Some(pb) = cli {
        if pb.exists() {
            return pb;
        }
        log::warn!("assets root {} does not exist; searching", pb.display());
    }
    if let Ok(p) = std::env::var(ASSETS_ENV) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
    }
    // Search candidates: CWD, executable dir, crate root; climb up to 5 parents
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.to_path_buf());
        }
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    for base in candidates {
        let mut cur = base.clone();
        for _ in 0..5 {
            if atlas_path(&cur).exists() {
                return cur;
            }
            if let Some(parent) = cur.parent() {
                cur = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn assets_dir(root: &Path) -> PathBuf {
    root.join("assets")
}

pub fn atlas_path(root: &Path) -> PathBuf {
    root.join("assets/atlas.toml")
}

pub fn models_path(root: &Path) -> PathBuf {
    root.join("assets/models.toml")
}

pub fn parents_path(root: &Path) -> PathBuf {
    root.join("assets/parents.toml")
}

/// Everything a bake needs, read from one assets root.
#[derive(Debug)]
pub struct AssetBundle {
    pub atlas: SpriteAtlas,
    pub models: Vec<ModelSpec>,
    pub parents: ParentModels,
}

impl AssetBundle {
    /// `parents.toml` is optional; without it only the builtin block parent exists.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let atlas = SpriteAtlas::from_path(atlas_path(root))?;
        let models = ModelsConfig::from_path(models_path(root))?.compile()?;
        let pp = parents_path(root);
        let parents = if pp.exists() {
            ParentModels::from_path(&pp)?
        } else {
            ParentModels::builtin()
        };
        log::info!(
            "loaded assets from {}: {} sprites, {} models, {} parents",
            root.display(),
            atlas.len(),
            models.len(),
            parents.len()
        );
        Ok(Self {
            atlas,
            models,
            parents,
        })
    }
}
