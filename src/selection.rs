//! Click-to-select state machine and render-state derivation.
//!
//! The engine has two states, unselected (initial) and selected-by-id. A
//! click transitions to the particle nearest the click point; a click that
//! reports no data-space coordinate (outside the plot surface) is a no-op.
//! The selection persists until the next click or an explicit [`reset`].
//!
//! [`reset`]: SelectionEngine::reset

use std::collections::HashSet;

use crate::data::particle::ParticleId;
use crate::data::render::{Classification, OverlayCircle, ParticleMark, RenderState};
use crate::data::store::ParticleStore;
use crate::error::ViewerError;

/// Selection state plus the configured annotation-circle offset.
///
/// The selection is the only mutable cell in the core; everything drawn is
/// re-derived from `(store, selection, rc)` by [`derive_render_state`], which
/// is a pure function of those inputs.
///
/// [`derive_render_state`]: SelectionEngine::derive_render_state
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    selected: Option<ParticleId>,
    rc: f64,
}

impl SelectionEngine {
    /// Create an unselected engine with the given `rc` overlay offset.
    ///
    /// `rc` must be non-negative; it widens the outer annotation circle
    /// beyond the selected particle's own radius.
    pub fn new(rc: f64) -> Self {
        Self { selected: None, rc }
    }

    /// Currently selected particle id, if any.
    pub fn selected(&self) -> Option<ParticleId> {
        self.selected
    }

    /// Configured outer-circle offset.
    pub fn rc(&self) -> f64 {
        self.rc
    }

    /// Process one click event.
    ///
    /// `click` carries the data-space coordinate, or `None` when the pointer
    /// was outside the plotted area; `None` leaves the selection unchanged.
    /// Otherwise the nearest particle becomes the selection. Fails only with
    /// [`ViewerError::EmptyInput`] on an empty store, in which case no
    /// selection is made.
    pub fn handle_click(
        &mut self,
        store: &ParticleStore,
        click: Option<[f64; 2]>,
    ) -> Result<(), ViewerError> {
        let Some([x, y]) = click else {
            return Ok(());
        };
        let nearest = store.find_nearest(x, y)?;
        self.selected = Some(nearest.id);
        Ok(())
    }

    /// Clear the selection, returning to the initial state.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Derive the full drawing input for the current selection.
    ///
    /// Unselected: every particle is [`Classification::Plain`], no overlays.
    /// Selected: the selected particle is `Selected`; particles listed in its
    /// neighbor entry (excluding itself, and excluding ids not present in the
    /// store) are `Neighbor`; the rest are `Plain`. Two annotation circles
    /// are emitted around the selection: one at the particle's radius and one
    /// at radius + rc.
    pub fn derive_render_state(&self, store: &ParticleStore) -> RenderState {
        let Some(sel_id) = self.selected else {
            return RenderState {
                marks: store
                    .particles()
                    .iter()
                    .map(|p| ParticleMark {
                        id: p.id,
                        pos: [p.x, p.y],
                        class: Classification::Plain,
                    })
                    .collect(),
                overlays: Vec::new(),
            };
        };

        let neighbor_ids: HashSet<ParticleId> =
            store.neighbors_of(sel_id).iter().copied().collect();

        let marks = store
            .particles()
            .iter()
            .map(|p| {
                let class = if p.id == sel_id {
                    Classification::Selected
                } else if neighbor_ids.contains(&p.id) {
                    Classification::Neighbor
                } else {
                    Classification::Plain
                };
                ParticleMark {
                    id: p.id,
                    pos: [p.x, p.y],
                    class,
                }
            })
            .collect();

        // The selected id always refers to a stored particle: it came from
        // find_nearest, and the store is never mutated afterwards.
        let overlays = match store.get(sel_id) {
            Some(p) => vec![
                OverlayCircle {
                    center: [p.x, p.y],
                    radius: p.radius,
                },
                OverlayCircle {
                    center: [p.x, p.y],
                    radius: p.radius + self.rc,
                },
            ],
            None => Vec::new(),
        };

        RenderState { marks, overlays }
    }
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new(0.0)
    }
}
