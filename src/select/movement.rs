//! Eligibility for Spring and Fall locations.
//!
//! Orders and retreats share the same two-step shape: pick the source unit,
//! then pick the destination. A retreat turn only changes which units and
//! input modes may start that sequence.

use crate::board::{InputMode, Unit};

use super::{Actor, Turn};

/// Returns true if a movement-phase location may be selected.
///
/// `unit` is the unit at the exact location, if any.
pub fn can_select_major(actor: &Actor, turn: Turn, unit: Option<&Unit>) -> bool {
    if actor.mode == InputMode::Build {
        return false;
    }

    if turn.is_retreat {
        let can_start_retreat = actor.awaiting_source()
            && matches!(actor.mode, InputMode::None | InputMode::Move | InputMode::Disband)
            && unit.is_some_and(|u| u.must_retreat);
        let can_finish_retreat = actor.awaiting_destination() && actor.mode == InputMode::Move;
        return can_start_retreat || can_finish_retreat;
    }

    // Disbanding outside a retreat only happens in Winter.
    if actor.mode == InputMode::Disband {
        return false;
    }

    let can_start_order = turn.is_active_board
        && unit.is_some_and(|u| actor.acts_for(u.owner) && !u.must_retreat)
        && actor.awaiting_source();
    let can_finish_order = actor.awaiting_destination();

    can_start_order || can_finish_order
}
