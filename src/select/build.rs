//! Eligibility for Winter locations.
//!
//! In the build phase a player may place a unit on a free home supply centre
//! they still control, or pick one of their units to disband. A unit standing
//! on a coast occupies the base region and the other coasts for building
//! purposes, but a disband must target the exact key the unit stands on.

use tracing::trace;

use crate::board::{base_region, InputMode, Location, Nation, RegionTable, Unit};

use super::{Actor, Turn};

/// Returns the first unit on another key of the same region, in key order.
///
/// At most one key of a region can be occupied, so the order only matters
/// for malformed worlds.
fn unit_on_alias<'w>(actor: &Actor<'w>, regions: &RegionTable, location: &Location) -> Option<&'w Unit> {
    let board = actor.world.board_of(location)?;
    regions
        .aliases(&location.region)
        .iter()
        .find_map(|alias| board.units.get(alias))
}

/// Returns true if a build may be placed at an unoccupied location.
fn can_build(actor: &Actor, regions: &RegionTable, location: &Location, owner: Option<Nation>) -> bool {
    let Some(info) = regions.get(base_region(&location.region)) else {
        return false;
    };
    info.is_supply_centre
        && info
            .home_nation
            .is_some_and(|home| actor.acts_for(home) && owner == Some(home))
        && actor.current_order.is_none()
}

/// Returns true if a build-phase location may be selected.
///
/// `owner` is the current controller of the location's supply centre and
/// `unit` the unit at the exact location key.
pub fn can_select_minor(
    actor: &Actor,
    turn: Turn,
    regions: &RegionTable,
    location: &Location,
    owner: Option<Nation>,
    unit: Option<&Unit>,
) -> bool {
    if !turn.is_active_board || turn.is_retreat {
        return false;
    }

    let occupied = unit.is_some() || unit_on_alias(actor, regions, location).is_some();

    if !occupied && matches!(actor.mode, InputMode::Build | InputMode::None) {
        trace!(%location, "build placement");
        return can_build(actor, regions, location, owner);
    }

    if actor.mode == InputMode::Disband || (occupied && actor.mode == InputMode::None) {
        trace!(%location, "disband");
        return unit.is_some_and(|u| actor.acts_for(u.owner));
    }

    false
}
