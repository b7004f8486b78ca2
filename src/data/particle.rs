//! Particle records and the precomputed neighbor-adjacency table.

use std::collections::HashMap;

/// Identifier of a particle, as read from the input files.
pub type ParticleId = u64;

/// A point entity with an id, a position, and an optional radius.
///
/// Immutable once loaded; positions are static input data, not simulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Unique identifier.
    pub id: ParticleId,
    /// X position in data space.
    pub x: f64,
    /// Y position in data space.
    pub y: f64,
    /// Particle radius (`>= 0`). Defaults to 0 when the input omits it.
    pub radius: f64,
}

impl Particle {
    /// Squared Euclidean distance from this particle to `(x, y)`.
    #[inline]
    pub fn dist_sq(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}

/// Mapping from particle id to its ordered neighbor list.
///
/// The table stores neighbor lists exactly as given: duplicates and
/// self-references are preserved, and ids that never appear in the particle
/// set are kept (they are ignored later, when render state is derived).
#[derive(Debug, Clone, Default)]
pub struct NeighborTable {
    neighbors: HashMap<ParticleId, Vec<ParticleId>>,
}

impl NeighborTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbor list for `id`, replacing any previous list.
    pub fn add_neighbors(&mut self, id: ParticleId, neighbors: Vec<ParticleId>) {
        self.neighbors.insert(id, neighbors);
    }

    /// Neighbor list for `id`, or an empty slice if the id is absent.
    pub fn get(&self, id: ParticleId) -> &[ParticleId] {
        self.neighbors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of ids with a stored neighbor list.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// `true` if no neighbor list is stored.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
