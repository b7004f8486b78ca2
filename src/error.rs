//! Error taxonomy for loading and interaction.
//!
//! Everything that can fail does so at load time; once a non-empty
//! [`ParticleStore`](crate::data::store::ParticleStore) exists, the click
//! path cannot fail.

use thiserror::Error;

/// Errors surfaced by the loader and the nearest-particle search.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The particle collection is empty, so a click has no defined target.
    #[error("no particles loaded")]
    EmptyInput,

    /// A text input file could not be parsed.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number in the offending file.
        line: usize,
        /// Human-readable description of what was wrong with the line.
        reason: String,
    },

    /// An input file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ViewerError {
    /// Shorthand for a [`ViewerError::MalformedInput`] at the given line.
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ViewerError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
