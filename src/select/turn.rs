//! Turn classification.
//!
//! Decides whether the world is in a retreat turn and whether a location's
//! board still accepts input. Both are recomputed on every query.

use crate::board::{Board, Location, World};

/// Returns true if any unit on any board must retreat.
///
/// A single dislodged unit anywhere suspends movement and build input on
/// every board until it has retreated or disbanded.
pub fn is_retreat_turn(world: &World) -> bool {
    world.boards.iter().any(|board| board.has_retreats())
}

/// Returns true if the game is undecided and the location's board is active.
pub fn is_active_board(world: &World, location: &Location) -> bool {
    world.winner.is_none()
        && world
            .board_of(location)
            .is_some_and(|board| world.is_latest(board))
}

/// The classification of one query's turn state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub is_retreat: bool,
    pub is_active_board: bool,
}

impl Turn {
    pub fn classify(world: &World, location: &Location) -> Self {
        Turn {
            is_retreat: is_retreat_turn(world),
            is_active_board: is_active_board(world, location),
        }
    }

    /// Classifies every location of `board` at once, given the world's retreat state.
    pub fn for_board(world: &World, board: &Board, is_retreat: bool) -> Self {
        Turn {
            is_retreat,
            is_active_board: world.winner.is_none() && world.is_latest(board),
        }
    }
}
