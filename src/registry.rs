//! Baked model generations.
//!
//! A load or reload bakes every (model, placement) pair into a fresh
//! [`BakedGeneration`] and swaps it in whole. Readers holding the previous
//! generation keep a valid set of meshes until they drop it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use cubebake_blocks::{ModelRotation, ModelSpec, TextureResolver};
use hashbrown::HashMap;
use rayon::prelude::*;

use crate::error::RegistryError;
use crate::loader::ModelLoader;
use crate::model::CubeModel;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelKey {
    pub name: String,
    pub rotation: ModelRotation,
}

impl ModelKey {
    pub fn new(name: impl Into<String>, rotation: ModelRotation) -> Self {
        Self {
            name: name.into(),
            rotation,
        }
    }
}

/// Every model baked by one load, plus the ones that failed.
#[derive(Debug, Default)]
pub struct BakedGeneration {
    pub generation: u64,
    models: HashMap<ModelKey, CubeModel>,
    failures: Vec<RegistryError>,
}

impl BakedGeneration {
    pub fn get(&self, name: &str, rotation: ModelRotation) -> Option<&CubeModel> {
        self.models.get(&ModelKey::new(name, rotation))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn failures(&self) -> &[RegistryError] {
        &self.failures
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModelKey, &CubeModel)> {
        self.models.iter()
    }
}

/// Bakes every placement of every model. Failed variants are left out of the
/// model map and reported in `failures`; they never render.
pub fn bake_all<L, T>(specs: &[ModelSpec], loader: &L, resolver: &T, generation: u64) -> BakedGeneration
where
    L: ModelLoader + Sync + ?Sized,
    T: TextureResolver + Sync + ?Sized,
{
    let t0 = Instant::now();
    let jobs: Vec<(&ModelSpec, ModelRotation)> = specs
        .iter()
        .flat_map(|s| s.rotations.iter().map(move |&r| (s, r)))
        .collect();
    let results: Vec<Result<(ModelKey, CubeModel), RegistryError>> = jobs
        .par_iter()
        .map(|&(spec, rotation)| {
            CubeModel::new(spec.textures.clone())
                .bake(loader, resolver, &rotation)
                .map(|model| (ModelKey::new(spec.name.clone(), rotation), model))
                .map_err(|source| RegistryError {
                    model: spec.name.clone(),
                    rotation,
                    source,
                })
        })
        .collect();

    let mut out = BakedGeneration {
        generation,
        models: HashMap::with_capacity(results.len()),
        failures: Vec::new(),
    };
    for r in results {
        match r {
            Ok((key, model)) => {
                out.models.insert(key, model);
            }
            Err(e) => {
                log::warn!("{e}");
                out.failures.push(e);
            }
        }
    }
    log::info!(
        target: "perf",
        "ms={} bake_all generation={} baked={} failed={}",
        t0.elapsed().as_millis(),
        generation,
        out.models.len(),
        out.failures.len()
    );
    out
}

/// Holds the current generation and replaces it atomically on reload.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    current: RwLock<Arc<BakedGeneration>>,
    next_generation: AtomicU64,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current generation. Cheap; hold it for a whole frame.
    pub fn current(&self) -> Arc<BakedGeneration> {
        match self.current.read() {
            Ok(g) => Arc::clone(&g),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Bakes `specs` into a new generation and swaps it in.
    pub fn reload<L, T>(&self, specs: &[ModelSpec], loader: &L, resolver: &T) -> Arc<BakedGeneration>
    where
        L: ModelLoader + Sync + ?Sized,
        T: TextureResolver + Sync + ?Sized,
    {
        let generation = self.next_generation.fetch_add(1, Ordering::AcqRel) + 1;
        let fresh = Arc::new(bake_all(specs, loader, resolver, generation));
        self.install(Arc::clone(&fresh));
        fresh
    }

    /// Makes `fresh` current unless a newer generation is already installed.
    fn install(&self, fresh: Arc<BakedGeneration>) -> bool {
        let mut slot = match self.current.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        // A slower reload must not replace a newer one that finished first.
        if slot.generation < fresh.generation {
            *slot = fresh;
            true
        } else {
            log::debug!(
                "discarding generation {}; {} is already current",
                fresh.generation,
                slot.generation
            );
            false
        }
    }
}
