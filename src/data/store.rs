//! Read-only store for loaded particles and their neighbor table.

use crate::data::particle::{NeighborTable, Particle, ParticleId};
use crate::error::ViewerError;

/// Immutable collection of particles plus the neighbor-adjacency table.
///
/// Built once by the loader and never mutated afterwards. Particle order is
/// the input-file order; the nearest-particle search relies on it for
/// deterministic tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    table: NeighborTable,
}

impl ParticleStore {
    /// Build a store from loaded particles and their neighbor table.
    pub fn new(particles: Vec<Particle>, table: NeighborTable) -> Self {
        Self { particles, table }
    }

    /// All particles in insertion order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// `true` if the store holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particle with the given id, if present.
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// `true` if a particle with this id exists.
    pub fn contains(&self, id: ParticleId) -> bool {
        self.get(id).is_some()
    }

    /// Particle nearest to `(x, y)` by squared Euclidean distance.
    ///
    /// Full linear scan; exact-distance ties keep the first particle in
    /// insertion order (strict `<` comparison). Fails only when the store is
    /// empty, in which case a click has no defined target.
    pub fn find_nearest(&self, x: f64, y: f64) -> Result<&Particle, ViewerError> {
        let mut best: Option<&Particle> = None;
        let mut best_d2 = f64::INFINITY;
        for p in &self.particles {
            let d2 = p.dist_sq(x, y);
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(p);
            }
        }
        best.ok_or(ViewerError::EmptyInput)
    }

    /// Neighbor ids of `id` as stored, or an empty slice for absent ids.
    pub fn neighbors_of(&self, id: ParticleId) -> &[ParticleId] {
        self.table.get(id)
    }
}
