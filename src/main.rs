use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossbeam_channel::{RecvTimeoutError, unbounded};
use cubebake::assets::{self, AssetBundle};
use cubebake::{BakedGeneration, MeshCollector, ModelRegistry};
use cubebake_blocks::ModelRotation;

#[derive(Parser, Debug)]
#[command(name = "cubebake", about = "Bake cube block models for every placement")]
struct Cli {
    /// Assets root (contains assets/atlas.toml). Falls back to CUBEBAKE_ASSETS, then a search.
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bake every model variant once and report
    Bake,
    /// Print the quads of one baked model
    Dump {
        #[arg(long)]
        model: String,
        #[arg(long, default_value_t = 0)]
        x: i32,
        #[arg(long, default_value_t = 0)]
        y: i32,
    },
    /// Re-bake whenever a file under assets/ changes
    Watch {
        /// Quiet period before a burst of file events triggers a reload
        #[arg(long, default_value_t = 250)]
        debounce_ms: u64,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    let root = assets::resolve_assets_root(cli.assets);
    let registry = ModelRegistry::new();
    let generation = load_and_bake(&registry, &root)?;

    match cli.cmd {
        Command::Bake => {
            report(&generation);
            if !generation.failures().is_empty() {
                return Err(format!("{} model variants failed to bake", generation.failures().len()).into());
            }
        }
        Command::Dump { model, x, y } => {
            let rotation = ModelRotation::from_degrees(x, y)?;
            let baked = generation
                .get(&model, rotation)
                .ok_or_else(|| format!("no baked model `{model}` at {rotation}"))?;
            let mut ctx = MeshCollector::new();
            baked.emit_block_quads(&mut ctx)?;
            for mesh in &ctx.meshes {
                for q in mesh.quads() {
                    println!(
                        "{} -> {} slot={} sprite={} layout={:?} cull={}",
                        q.source_face,
                        q.nominal_face,
                        q.texture_slot,
                        q.sprite,
                        q.layout,
                        q.cull_face.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
                    );
                    for (p, uv) in q.corners.iter().zip(q.uvs.iter()) {
                        println!("      ({:.3}, {:.3}, {:.3}) uv=({:.4}, {:.4})", p.x, p.y, p.z, uv.0, uv.1);
                    }
                }
            }
        }
        Command::Watch { debounce_ms } => watch(&registry, &root, Duration::from_millis(debounce_ms))?,
    }
    Ok(())
}

fn load_and_bake(registry: &ModelRegistry, root: &Path) -> Result<std::sync::Arc<BakedGeneration>, Box<dyn Error>> {
    let bundle = AssetBundle::load(root)?;
    Ok(registry.reload(&bundle.models, &bundle.parents, &bundle.atlas))
}

fn report(generation: &BakedGeneration) {
    println!(
        "generation {}: {} baked, {} failed",
        generation.generation,
        generation.len(),
        generation.failures().len()
    );
    for e in generation.failures() {
        println!("  {e}");
    }
}

fn watch(registry: &ModelRegistry, root: &Path, debounce: Duration) -> Result<(), Box<dyn Error>> {
    use notify::{EventKind, RecursiveMode, Watcher};

    let (tx, rx) = unbounded::<()>();
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res {
            match event.kind {
                EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) | EventKind::Any => {
                    let toml = event
                        .paths
                        .iter()
                        .any(|p| p.extension().and_then(|e| e.to_str()) == Some("toml"));
                    if toml {
                        let _ = tx.send(());
                    }
                }
                _ => {}
            }
        }
    })?;
    let dir = assets::assets_dir(root);
    watcher.watch(&dir, RecursiveMode::Recursive)?;
    log::info!("watching {} for changes", dir.display());

    loop {
        if rx.recv().is_err() {
            return Ok(());
        }
        // Coalesce the burst an editor save produces.
        loop {
            match rx.recv_timeout(debounce) {
                Ok(()) => continue,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }
        match load_and_bake(registry, root) {
            Ok(generation) => report(&generation),
            // Keep serving the previous generation.
            Err(e) => log::warn!("reload failed: {e}"),
        }
    }
}
