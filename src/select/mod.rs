//! Location-selection eligibility.
//!
//! Answers "can the player interact with this location right now" for the
//! UI layer: starting or finishing an order, starting or finishing a
//! retreat, and building or disbanding in Winter. Every query is a pure
//! re-evaluation over a read-only snapshot of the game, world, and
//! order-entry state; nothing is cached between calls.

pub mod build;
pub mod movement;
pub mod turn;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{InputMode, Location, Nation, Order, OrderEntry, Phase, RegionTable, Unit, World};

pub use build::can_select_minor;
pub use movement::can_select_major;
pub use turn::{is_active_board, is_retreat_turn, Turn};

/// The game provider's state: which nation the local player controls.
///
/// `player` is `None` for observers and for players controlling several
/// nations at once; such players are not restricted by ownership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub player: Option<Nation>,
}

/// The output of an external state provider, which may still be fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed<T> {
    pub value: Option<T>,
    pub is_loading: bool,
}

impl<T> Feed<T> {
    /// A feed with a settled value.
    pub fn ready(value: T) -> Self {
        Feed { value: Some(value), is_loading: false }
    }

    /// A feed that is fetching and has nothing usable yet.
    pub fn loading() -> Self {
        Feed { value: None, is_loading: true }
    }

    /// Returns the value only when present and not loading.
    pub fn get(&self) -> Option<&T> {
        if self.is_loading {
            return None;
        }
        self.value.as_ref()
    }
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Feed { value: None, is_loading: false }
    }
}

/// The acting player's inputs for one query.
#[derive(Debug, Clone, Copy)]
pub struct Actor<'a> {
    pub player: Option<Nation>,
    pub world: &'a World,
    pub current_order: Option<&'a Order>,
    pub mode: InputMode,
}

impl Actor<'_> {
    /// True when no order exists or the pending one has no source yet.
    pub fn awaiting_source(&self) -> bool {
        self.current_order.map_or(true, |order| !order.has_source())
    }

    /// True when a source unit is selected and only the destination remains.
    pub fn awaiting_destination(&self) -> bool {
        self.current_order.is_some_and(Order::has_source)
    }

    /// True when the player is unrestricted or plays this nation.
    pub fn acts_for(&self, nation: Nation) -> bool {
        self.player.map_or(true, |player| player == nation)
    }
}

/// Everything an eligibility query reads, passed explicitly.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub game: &'a Feed<Game>,
    pub world: &'a Feed<World>,
    pub order_entry: &'a OrderEntry,
    pub regions: &'a RegionTable,
}

impl<'a> SelectionContext<'a> {
    pub fn new(
        game: &'a Feed<Game>,
        world: &'a Feed<World>,
        order_entry: &'a OrderEntry,
        regions: &'a RegionTable,
    ) -> Self {
        SelectionContext { game, world, order_entry, regions }
    }

    /// Builds the actor, or `None` while either provider is loading or empty.
    fn actor(&self) -> Option<Actor<'a>> {
        let game = self.game.get()?;
        let world = self.world.get()?;
        Some(Actor {
            player: game.player,
            world,
            current_order: self.order_entry.current_order.as_ref(),
            mode: self.order_entry.current_mode,
        })
    }

    /// Returns true if the player may interact with `location` right now.
    ///
    /// `owner` is the current controller of the location's supply centre and
    /// `unit` the unit at the exact location key, both read by the caller
    /// from the same world snapshot.
    pub fn can_select(&self, location: &Location, owner: Option<Nation>, unit: Option<&Unit>) -> bool {
        let Some(actor) = self.actor() else {
            trace!(%location, "state unavailable");
            return false;
        };
        if actor.world.winner.is_some() {
            trace!(%location, "game decided");
            return false;
        }

        let turn = Turn::classify(actor.world, location);
        self.evaluate(&actor, turn, location, owner, unit)
    }

    /// Dispatches one location to the build or movement rule.
    fn evaluate(
        &self,
        actor: &Actor,
        turn: Turn,
        location: &Location,
        owner: Option<Nation>,
        unit: Option<&Unit>,
    ) -> bool {
        let selectable = if location.phase == Phase::Winter {
            can_select_minor(actor, turn, self.regions, location, owner, unit)
        } else {
            can_select_major(actor, turn, unit)
        };

        trace!(
            %location,
            mode = actor.mode.name(),
            retreat = turn.is_retreat,
            active = turn.is_active_board,
            selectable,
            "eligibility"
        );
        selectable
    }

    /// Like [`can_select`](Self::can_select), reading the owner and unit from the world.
    pub fn can_select_region(&self, location: &Location) -> bool {
        let board = self.world.get().and_then(|world| world.board_of(location));
        let owner = board.and_then(|b| b.owner(&location.region));
        let unit = board.and_then(|b| b.units.get(&location.region));
        self.can_select(location, owner, unit)
    }

    /// Returns every selectable location across all boards, sorted.
    ///
    /// The turn is classified once per board rather than once per location.
    pub fn selectable_locations(&self) -> Vec<Location> {
        let Some(actor) = self.actor() else {
            return Vec::new();
        };
        let world = actor.world;
        if world.winner.is_some() {
            return Vec::new();
        }
        let is_retreat = is_retreat_turn(world);
        let regions = self.regions;

        let mut locations: Vec<Location> = world
            .boards
            .par_iter()
            .flat_map_iter(move |board| {
                let turn = Turn::for_board(world, board, is_retreat);
                regions.keys().filter_map(move |region| {
                    let location = Location::on_board(board, region);
                    let owner = board.owner(region);
                    let unit = board.units.get(region);
                    self.evaluate(&actor, turn, &location, owner, unit).then_some(location)
                })
            })
            .collect();
        locations.sort();
        locations
    }
}
