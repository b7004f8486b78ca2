//! neighborvis crate root: re-exports and module wiring.
//!
//! An interactive viewer for a static 2D particle cloud with precomputed
//! neighbor relationships: click near a particle to highlight it and its
//! neighbors, with optional radius-based annotation circles.
//!
//! Module overview:
//! - `data`: particle records, neighbor table, read-only store, render state
//! - `selection`: click-to-select state machine and render-state derivation
//! - `loader`: text-file parsing for particle and neighbor data
//! - `config`: viewer configuration
//! - `app`: egui/eframe window, plotting, and click forwarding

mod app;

pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod selection;

// Public re-exports for a compact external API
pub use app::{run_viewer, ViewerApp};
pub use config::ViewerConfig;
pub use data::particle::{NeighborTable, Particle, ParticleId};
pub use data::render::{Classification, OverlayCircle, ParticleMark, RenderState};
pub use data::store::ParticleStore;
pub use error::ViewerError;
pub use loader::{load_neighbors, load_particles, parse_neighbors, parse_particles};
pub use selection::SelectionEngine;
