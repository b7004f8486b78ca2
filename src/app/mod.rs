//! Viewer application: the eframe wrapper around store, engine, and config.
//!
//! Split into focused sub-modules:
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`plot`]   | Central-panel rendering and click handling |
//! | [`run`]    | Top-level [`run_viewer()`] entry point |

mod plot;
mod run;

pub use run::run_viewer;

use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::store::ParticleStore;
use crate::selection::SelectionEngine;

/// The eframe application that draws the particle cloud and dispatches
/// clicks to the selection engine.
///
/// The store is read-only after construction; the engine holds the only
/// mutable state (the current selection). The full render state is
/// re-derived every frame rather than patched incrementally.
pub struct ViewerApp {
    pub(crate) store: ParticleStore,
    pub(crate) engine: SelectionEngine,
    pub(crate) cfg: ViewerConfig,
}

impl ViewerApp {
    /// Create a viewer over an already-loaded store.
    pub fn new(store: ParticleStore, cfg: ViewerConfig) -> Self {
        let engine = SelectionEngine::new(cfg.rc);
        Self { store, engine, cfg }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.engine.reset();
        }
        self.render_central_plot_panel(ctx);
    }
}
