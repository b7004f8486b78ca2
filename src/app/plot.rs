//! Plotting logic for `ViewerApp`.
//!
//! This module encapsulates the central plot rendering and interaction:
//! - drawing particles grouped by their classification
//! - drawing the annotation circles around the selected particle
//! - forwarding click coordinates to the selection engine

use egui_plot::{Line, LineStyle, MarkerShape, Plot, Points};

use crate::data::render::{Classification, OverlayCircle, RenderState};

use super::ViewerApp;

/// Number of segments used to approximate an annotation circle.
const CIRCLE_SEGMENTS: usize = 128;

impl ViewerApp {
    /// Render the plot inside the default central panel and apply interactions.
    pub(super) fn render_central_plot_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot_response = self.plot_particles(ui, "particle_plot");
            self.handle_plot_click(&plot_response);
        });
    }

    /// Draw the full render state: classified particle markers plus overlays.
    fn plot_particles(&mut self, ui: &mut egui::Ui, plot_id: &str) -> egui_plot::PlotResponse<()> {
        let state = self.engine.derive_render_state(&self.store);

        let mut plot = Plot::new(plot_id)
            .data_aspect(1.0)
            .allow_scroll(false)
            .allow_boxed_zoom(true);
        if self.cfg.show_legend {
            plot = plot.legend(egui_plot::Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for (class, label, color) in [
                (Classification::Plain, "particles", self.cfg.plain_color),
                (Classification::Neighbor, "neighbors", self.cfg.neighbor_color),
                (Classification::Selected, "selected", self.cfg.selected_color),
            ] {
                let pts: Vec<[f64; 2]> = state
                    .marks
                    .iter()
                    .filter(|m| m.class == class)
                    .map(|m| m.pos)
                    .collect();
                if pts.is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(label, pts)
                        .radius(self.cfg.point_radius)
                        .shape(MarkerShape::Circle)
                        .color(color),
                );
            }

            self.draw_overlays(plot_ui, &state);
        })
    }

    /// Draw the inner (dashed) and outer (dotted) annotation circles.
    fn draw_overlays(&self, plot_ui: &mut egui_plot::PlotUi, state: &RenderState) {
        // overlays is either empty or [inner, outer]; style them apart.
        for (i, circle) in state.overlays.iter().enumerate() {
            let (color, style) = if i == 0 {
                (self.cfg.selected_color, LineStyle::Dashed { length: 6.0 })
            } else {
                (self.cfg.neighbor_color, LineStyle::Dotted { spacing: 4.0 })
            };
            plot_ui.line(
                Line::new("", circle_points(circle))
                    .color(color)
                    .width(1.0)
                    .style(style),
            );
        }
    }

    /// Forward a click to the selection engine as a data-space coordinate.
    ///
    /// A click without a pointer position is forwarded as the outside-plot
    /// sentinel, which the engine treats as a no-op.
    fn handle_plot_click(&mut self, plot_response: &egui_plot::PlotResponse<()>) {
        if !plot_response.response.clicked() {
            return;
        }
        let click = plot_response
            .response
            .interact_pointer_pos()
            .map(|screen_pos| {
                let p = plot_response.transform.value_from_position(screen_pos);
                [p.x, p.y]
            });
        if let Err(e) = self.engine.handle_click(&self.store, click) {
            log::warn!("click ignored: {e}");
        }
    }
}

/// Sample an overlay circle as a closed polyline.
fn circle_points(circle: &OverlayCircle) -> Vec<[f64; 2]> {
    let [cx, cy] = circle.center;
    (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let theta = std::f64::consts::TAU * (i as f64) / (CIRCLE_SEGMENTS as f64);
            [cx + circle.radius * theta.cos(), cy + circle.radius * theta.sin()]
        })
        .collect()
}
