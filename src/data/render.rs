//! Derived render state consumed by the drawing layer.
//!
//! `RenderState` is recomputed in full on every selection change (and is
//! cheap enough to recompute per frame); the drawing layer never receives
//! incremental updates.

use crate::data::particle::ParticleId;

/// How a particle should be drawn, given the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The one particle the user clicked nearest to.
    Selected,
    /// Listed in the selected particle's neighbor table entry.
    Neighbor,
    /// Everything else.
    Plain,
}

/// One particle together with its classification, in store order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleMark {
    /// Particle id.
    pub id: ParticleId,
    /// Particle position `[x, y]` in data space.
    pub pos: [f64; 2],
    /// How to draw it.
    pub class: Classification,
}

/// An annotation circle drawn around the selected particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayCircle {
    /// Circle center `[x, y]` in data space.
    pub center: [f64; 2],
    /// Circle radius in data units.
    pub radius: f64,
}

/// Full per-frame drawing input: every particle classified, plus overlays.
///
/// When a selection exists, `overlays` holds exactly two circles centered on
/// the selected particle: the particle's own radius and the radius extended
/// by the configured `rc` offset. Otherwise it is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    /// One entry per particle, in store insertion order.
    pub marks: Vec<ParticleMark>,
    /// Zero (unselected) or two (selected) annotation circles.
    pub overlays: Vec<OverlayCircle>,
}

impl RenderState {
    /// Id of the particle marked [`Classification::Selected`], if any.
    pub fn selected_id(&self) -> Option<ParticleId> {
        self.marks
            .iter()
            .find(|m| m.class == Classification::Selected)
            .map(|m| m.id)
    }
}
