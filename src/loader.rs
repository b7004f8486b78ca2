//! Text-file loaders for particle and neighbor data.
//!
//! Two whitespace-delimited formats are supported:
//!
//! - **Particle file**: line 1 is an advisory particle count `N`, line 2 a
//!   domain size `L` (validated but otherwise unused), then one particle per
//!   line as `<id> <x> <y>` or `<id> <x> <y> <radius>`.
//! - **Neighbor file**: one line per particle, `<id> <n1> <n2> ... <nk>`
//!   with `k >= 0`.
//!
//! Any non-numeric token, short row, negative radius, or empty file fails
//! with [`ViewerError::MalformedInput`] carrying the 1-based line number.
//! Load failures are fatal to startup; the core only ever sees a fully
//! populated store or a propagated error.

use std::path::Path;

use crate::data::particle::{NeighborTable, Particle, ParticleId};
use crate::error::ViewerError;

fn parse_token<T: std::str::FromStr>(
    tok: &str,
    line: usize,
    what: &str,
) -> Result<T, ViewerError> {
    tok.parse()
        .map_err(|_| ViewerError::malformed(line, format!("invalid {what}: {tok:?}")))
}

/// Parse particle-file text.
///
/// Blank lines after the two-line header are skipped. The advisory count on
/// line 1 is compared against the actual row count and logged on mismatch,
/// never enforced.
pub fn parse_particles(text: &str) -> Result<Vec<Particle>, ViewerError> {
    let mut lines = text.lines().enumerate();

    let (_, first) = lines
        .next()
        .ok_or_else(|| ViewerError::malformed(1, "empty particle file"))?;
    let declared: usize = parse_token(first.trim(), 1, "particle count")?;

    let (_, second) = lines
        .next()
        .ok_or_else(|| ViewerError::malformed(2, "missing domain size line"))?;
    let _domain: f64 = parse_token(second.trim(), 2, "domain size")?;

    let mut particles = Vec::new();
    for (idx, line) in lines {
        let lineno = idx + 1;
        let toks: Vec<&str> = line.split_whitespace().collect();
        if toks.is_empty() {
            continue;
        }
        if toks.len() < 3 {
            return Err(ViewerError::malformed(
                lineno,
                format!("expected `<id> <x> <y> [<radius>]`, got {} column(s)", toks.len()),
            ));
        }
        let id: ParticleId = parse_token(toks[0], lineno, "particle id")?;
        let x: f64 = parse_token(toks[1], lineno, "x coordinate")?;
        let y: f64 = parse_token(toks[2], lineno, "y coordinate")?;
        let radius: f64 = match toks.get(3) {
            Some(&tok) => parse_token(tok, lineno, "radius")?,
            None => 0.0,
        };
        if radius < 0.0 {
            return Err(ViewerError::malformed(
                lineno,
                format!("radius must be non-negative, got {radius}"),
            ));
        }
        particles.push(Particle { id, x, y, radius });
    }

    if particles.len() != declared {
        log::warn!(
            "particle file declares {declared} particles but contains {}",
            particles.len()
        );
    }
    Ok(particles)
}

/// Parse neighbor-file text. Blank lines are skipped; a line holding only an
/// id declares an empty neighbor list.
pub fn parse_neighbors(text: &str) -> Result<NeighborTable, ViewerError> {
    if text.trim().is_empty() {
        return Err(ViewerError::malformed(1, "empty neighbor file"));
    }
    let mut table = NeighborTable::new();
    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let mut toks = line.split_whitespace();
        let Some(first) = toks.next() else {
            continue;
        };
        let id: ParticleId = parse_token(first, lineno, "particle id")?;
        let neighbors = toks
            .map(|tok| parse_token(tok, lineno, "neighbor id"))
            .collect::<Result<Vec<ParticleId>, _>>()?;
        table.add_neighbors(id, neighbors);
    }
    Ok(table)
}

/// Load and parse a particle file from disk.
pub fn load_particles(path: &Path) -> Result<Vec<Particle>, ViewerError> {
    let text = std::fs::read_to_string(path)?;
    let particles = parse_particles(&text)?;
    log::info!("loaded {} particles from {}", particles.len(), path.display());
    Ok(particles)
}

/// Load and parse a neighbor file from disk.
pub fn load_neighbors(path: &Path) -> Result<NeighborTable, ViewerError> {
    let text = std::fs::read_to_string(path)?;
    let table = parse_neighbors(&text)?;
    log::info!(
        "loaded neighbor lists for {} particles from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}
