//! JSON snapshots of the game and world providers.
//!
//! The host receives each provider's state as a single-line JSON document.
//! Decoding checks that the world names each board at most once, since the
//! eligibility engine assumes a consistent snapshot.

use std::collections::HashSet;

use crate::board::{Phase, World};
use crate::select::Game;

/// Errors that can occur while decoding snapshots or region tables.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate board {timeline}:{year}:{}", .phase.name())]
    DuplicateBoard { timeline: u32, year: u16, phase: Phase },
}

/// Decodes a world snapshot.
pub fn parse_world(json: &str) -> Result<World, SnapshotError> {
    let world: World = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for board in &world.boards {
        if !seen.insert((board.timeline, board.year, board.phase)) {
            return Err(SnapshotError::DuplicateBoard {
                timeline: board.timeline,
                year: board.year,
                phase: board.phase,
            });
        }
    }

    Ok(world)
}

/// Decodes a game snapshot such as `{"player":"england"}`.
pub fn parse_game(json: &str) -> Result<Game, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
