use neighborvis::{load_neighbors, load_particles, run_viewer, ParticleStore, ViewerConfig};

use anyhow::{bail, Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Interactive 2D particle-neighbor viewer")]
struct Args {
    /// Particle file: `N`, `L`, then `<id> <x> <y> [<radius>]` per line.
    particles: PathBuf,

    /// Neighbor file: one `<id> <n1> ... <nk>` line per particle.
    neighbors: PathBuf,

    /// Additional radial offset of the outer annotation circle.
    #[arg(long, default_value_t = 0.0)]
    rc: f64,

    /// Window title.
    #[arg(long, default_value = "Neighbor Viewer")]
    title: String,

    /// Hide the plot legend.
    #[arg(long)]
    no_legend: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.rc < 0.0 {
        bail!("--rc must be non-negative, got {}", args.rc);
    }

    let particles = load_particles(&args.particles)
        .with_context(|| format!("failed to load particle file {}", args.particles.display()))?;
    let table = load_neighbors(&args.neighbors)
        .with_context(|| format!("failed to load neighbor file {}", args.neighbors.display()))?;

    let store = ParticleStore::new(particles, table);
    if store.is_empty() {
        bail!("no particles loaded from {}", args.particles.display());
    }

    let cfg = ViewerConfig {
        rc: args.rc,
        title: args.title,
        show_legend: !args.no_legend,
        ..ViewerConfig::default()
    };

    run_viewer(store, cfg).map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
