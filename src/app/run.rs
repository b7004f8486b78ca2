//! Top-level entry point for running the viewer as a native window.

use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::store::ParticleStore;

use super::ViewerApp;

/// Launch the viewer in a native window.
///
/// Takes an already-loaded [`ParticleStore`] and a [`ViewerConfig`], opens a
/// native window, and enters the eframe event loop. The call blocks until
/// the window is closed.
pub fn run_viewer(store: ParticleStore, mut cfg: ViewerConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Square default window to match the 1:1 data aspect of the plot.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(900.0, 900.0));
    }

    let app = ViewerApp::new(store, cfg);
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
