//! Locations, input modes, and in-progress orders.
//!
//! An order is built in two steps: the player first selects a source unit,
//! then a destination. `Order::unit` is `None` until the first step is done.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::{Board, Phase};
use super::unit::Unit;

/// A map position: a region on one board of one timeline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub timeline: u32,
    pub year: u16,
    pub phase: Phase,
    pub region: String,
}

impl Location {
    pub fn new(timeline: u32, year: u16, phase: Phase, region: impl Into<String>) -> Self {
        Location { timeline, year, phase, region: region.into() }
    }

    /// Creates a location for a region on the given board.
    pub fn on_board(board: &Board, region: impl Into<String>) -> Self {
        Self::new(board.timeline, board.year, board.phase, region)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.timeline,
            self.year,
            self.phase.name(),
            self.region
        )
    }
}

/// The interaction the player has currently selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    None,
    Hold,
    Move,
    Support,
    Convoy,
    Build,
    Disband,
}

/// All input modes in declaration order.
pub const ALL_INPUT_MODES: [InputMode; 7] = [
    InputMode::None,
    InputMode::Hold,
    InputMode::Move,
    InputMode::Support,
    InputMode::Convoy,
    InputMode::Build,
    InputMode::Disband,
];

impl InputMode {
    pub const fn name(self) -> &'static str {
        match self {
            InputMode::None => "none",
            InputMode::Hold => "hold",
            InputMode::Move => "move",
            InputMode::Support => "support",
            InputMode::Convoy => "convoy",
            InputMode::Build => "build",
            InputMode::Disband => "disband",
        }
    }

    pub fn from_name(name: &str) -> Option<InputMode> {
        ALL_INPUT_MODES.iter().copied().find(|m| m.name() == name)
    }
}

/// The kind of order being constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Hold,
    Move,
    Support,
    Convoy,
    Build,
    Disband,
}

impl OrderKind {
    pub fn from_name(name: &str) -> Option<OrderKind> {
        match name {
            "hold" => Some(OrderKind::Hold),
            "move" => Some(OrderKind::Move),
            "support" => Some(OrderKind::Support),
            "convoy" => Some(OrderKind::Convoy),
            "build" => Some(OrderKind::Build),
            "disband" => Some(OrderKind::Disband),
            _ => Option::None,
        }
    }
}

/// An order under construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub kind: OrderKind,
    /// The source unit, once selected.
    pub unit: Option<Unit>,
    /// Where the source unit stands, once selected.
    pub location: Option<Location>,
}

impl Order {
    /// Creates an order with no source selected yet.
    pub fn new(kind: OrderKind) -> Self {
        Order { kind, unit: None, location: None }
    }

    /// Creates an order whose source unit has been selected.
    pub fn with_source(kind: OrderKind, unit: Unit, location: Location) -> Self {
        Order { kind, unit: Some(unit), location: Some(location) }
    }

    /// Returns true once the source unit has been chosen.
    pub fn has_source(&self) -> bool {
        self.unit.is_some()
    }
}

/// The player's order-entry state: the pending order and the selected mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderEntry {
    pub current_order: Option<Order>,
    pub current_mode: InputMode,
}

impl OrderEntry {
    pub fn new(current_order: Option<Order>, current_mode: InputMode) -> Self {
        OrderEntry { current_order, current_mode }
    }
}
