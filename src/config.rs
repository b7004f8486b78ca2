//! Viewer configuration.

use egui::Color32;

/// Top-level configuration for the viewer window and plot appearance.
///
/// `rc` is the only value that affects the derived render state (it widens
/// the outer annotation circle); everything else is presentation.
pub struct ViewerConfig {
    // ── Selection / overlays ─────────────────────────────────────────────────
    /// Additional radial offset of the outer annotation circle around the
    /// selected particle. Must be non-negative. Default: `0.0` (the two
    /// circles coincide at the particle's own radius).
    pub rc: f64,

    // ── Appearance ───────────────────────────────────────────────────────────
    /// Marker radius in pixels for every particle.
    pub point_radius: f32,
    /// Color of the selected particle (and the inner annotation circle).
    pub selected_color: Color32,
    /// Color of the selected particle's neighbors (and the outer circle).
    pub neighbor_color: Color32,
    /// Color of all remaining particles.
    pub plain_color: Color32,
    /// Show the plot legend.
    pub show_legend: bool,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rc: 0.0,
            point_radius: 4.0,
            selected_color: Color32::GREEN,
            neighbor_color: Color32::RED,
            plain_color: Color32::from_rgb(0x3c, 0x7e, 0xff),
            show_legend: true,
            title: "Neighbor Viewer".to_string(),
            native_options: None,
        }
    }
}
