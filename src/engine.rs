//! Host session state.
//!
//! Holds the three provider feeds (game, world, order entry), the region
//! table, and the host options, and answers eligibility queries against
//! them. Every answer is a fresh evaluation of the current snapshot.

use std::collections::HashMap;
use std::io::Write;

use tracing::debug;

use crate::board::{InputMode, Location, Order, OrderEntry, RegionTable, World};
use crate::protocol::parser::OrderCommand;
use crate::protocol::snapshot::{parse_game, parse_world, SnapshotError};
use crate::select::{Feed, Game, SelectionContext};

/// Option naming a JSON region table to load instead of the standard map.
pub const REGIONS_OPTION: &str = "Regions";

/// Errors from commands the host could not apply.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("no settled world")]
    NoWorld,

    #[error("no unit at {0}")]
    NoUnit(Location),

    #[error("unknown region '{0}'")]
    UnknownRegion(String),
}

/// Holds the mutable state of the host between commands.
pub struct Engine {
    pub regions: RegionTable,
    pub game: Feed<Game>,
    pub world: Feed<World>,
    pub order_entry: OrderEntry,
    pub options: HashMap<String, String>,
}

impl Engine {
    /// Creates a host with the standard map and no game or world.
    pub fn new() -> Self {
        Engine {
            regions: RegionTable::standard(),
            game: Feed::default(),
            world: Feed::default(),
            order_entry: OrderEntry::default(),
            options: HashMap::new(),
        }
    }

    /// Clears game, world and order-entry state. Options and regions persist.
    pub fn new_game(&mut self) {
        self.game = Feed::default();
        self.world = Feed::default();
        self.order_entry = OrderEntry::default();
    }

    /// Sets an option. `Regions` replaces the region table.
    pub fn set_option(&mut self, name: String, value: Option<String>) -> Result<(), EngineError> {
        if name == REGIONS_OPTION {
            self.regions = match &value {
                Some(path) => RegionTable::load(path)?,
                None => RegionTable::standard(),
            };
            debug!(regions = self.regions.len(), "region table replaced");
        }
        self.options.insert(name, value.unwrap_or_default());
        Ok(())
    }

    /// Marks the game feed as fetching, keeping its stale value.
    pub fn set_game_loading(&mut self) {
        self.game.is_loading = true;
    }

    /// Installs a game snapshot.
    pub fn set_game(&mut self, json: &str) -> Result<(), EngineError> {
        let game = parse_game(json)?;
        debug!(player = ?game.player, "game updated");
        self.game = Feed::ready(game);
        Ok(())
    }

    /// Marks the world feed as fetching, keeping its stale value.
    pub fn set_world_loading(&mut self) {
        self.world.is_loading = true;
    }

    /// Installs a world snapshot.
    pub fn set_world(&mut self, json: &str) -> Result<(), EngineError> {
        let world = parse_world(json)?;
        debug!(boards = world.boards.len(), winner = ?world.winner, "world updated");
        self.world = Feed::ready(world);
        Ok(())
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.order_entry.current_mode = mode;
    }

    /// Applies an `order` command. A source location must hold a unit in the
    /// settled world; a loading world is rejected.
    pub fn set_order(&mut self, command: OrderCommand) -> Result<(), EngineError> {
        self.order_entry.current_order = match command {
            OrderCommand::Clear => None,
            OrderCommand::Pending(kind) => Some(Order::new(kind)),
            OrderCommand::From(kind, location) => {
                let world = self.world.get().ok_or(EngineError::NoWorld)?;
                let unit = *world
                    .find_unit(&location)
                    .ok_or_else(|| EngineError::NoUnit(location.clone()))?;
                Some(Order::with_source(kind, unit, location))
            }
        };
        debug!(order = ?self.order_entry.current_order, "order updated");
        Ok(())
    }

    /// Returns the eligibility view over the current state.
    pub fn context(&self) -> SelectionContext<'_> {
        SelectionContext::new(&self.game, &self.world, &self.order_entry, &self.regions)
    }

    /// Handles the handshake: writes id, options, protocol_version, and hellook.
    pub fn handle_hello<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name timeweave").unwrap();
        writeln!(out, "id author timeweave").unwrap();
        writeln!(out, "option name {} type string default <standard>", REGIONS_OPTION).unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "hellook").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles `canselect`: writes `canselect <location> true|false`.
    pub fn handle_canselect<W: Write>(&self, location: &Location, out: &mut W) -> Result<(), EngineError> {
        if !self.regions.contains(&location.region) {
            return Err(EngineError::UnknownRegion(location.region.clone()));
        }
        let selectable = self.context().can_select_region(location);
        writeln!(out, "canselect {} {}", location, selectable).unwrap();
        out.flush().unwrap();
        Ok(())
    }

    /// Handles `selectable`: writes every selectable location on one line.
    pub fn handle_selectable<W: Write>(&self, out: &mut W) {
        let locations = self.context().selectable_locations();
        let mut line = String::from("selectable");
        for location in &locations {
            line.push(' ');
            line.push_str(&location.to_string());
        }
        writeln!(out, "{}", line).unwrap();
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
