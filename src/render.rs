use std::sync::Arc;

use cubebake_mesh_cpu::Mesh;

/// Host-side sink for baked meshes, called once per render request.
pub trait RenderContext {
    fn accept_mesh(&mut self, mesh: &Arc<Mesh>);
}

/// Context that keeps every mesh it is handed. Useful for export and tests.
#[derive(Default, Debug)]
pub struct MeshCollector {
    pub meshes: Vec<Arc<Mesh>>,
}

impl MeshCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quad_count(&self) -> usize {
        self.meshes.iter().map(|m| m.len()).sum()
    }
}

impl RenderContext for MeshCollector {
    fn accept_mesh(&mut self, mesh: &Arc<Mesh>) {
        self.meshes.push(Arc::clone(mesh));
    }
}
