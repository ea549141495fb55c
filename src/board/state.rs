//! World state representation.
//!
//! A world is a set of boards, one per `(timeline, year, phase)`, each with
//! its own unit placements and supply-centre ownership, plus the winner once
//! the game has ended.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::order::Location;
use super::region::{base_region, Nation};
use super::unit::Unit;

/// The phase of a game year. Winter is the build phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Spring,
    Fall,
    Winter,
}

impl Phase {
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Spring => "spring",
            Phase::Fall => "fall",
            Phase::Winter => "winter",
        }
    }

    pub fn from_name(name: &str) -> Option<Phase> {
        match name {
            "spring" => Some(Phase::Spring),
            "fall" => Some(Phase::Fall),
            "winter" => Some(Phase::Winter),
            _ => None,
        }
    }
}

/// One timeline/year/phase instance of the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub timeline: u32,
    pub year: u16,
    pub phase: Phase,
    /// Units keyed by the exact region key they occupy.
    #[serde(default)]
    pub units: BTreeMap<String, Unit>,
    /// Supply-centre controllers keyed by base region.
    #[serde(default)]
    pub ownerships: BTreeMap<String, Nation>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(timeline: u32, year: u16, phase: Phase) -> Self {
        Board {
            timeline,
            year,
            phase,
            units: BTreeMap::new(),
            ownerships: BTreeMap::new(),
        }
    }

    /// Places a unit. Returns false if the region key is already occupied.
    pub fn place_unit(&mut self, region: &str, unit: Unit) -> bool {
        if self.units.contains_key(region) {
            return false;
        }
        self.units.insert(region.to_string(), unit);
        true
    }

    /// Sets the controller of a supply centre.
    pub fn set_owner(&mut self, region: &str, owner: Nation) {
        self.ownerships.insert(base_region(region).to_string(), owner);
    }

    /// Returns the controller of the supply centre a region belongs to.
    pub fn owner(&self, region: &str) -> Option<Nation> {
        self.ownerships.get(base_region(region)).copied()
    }

    /// Returns true if any unit on this board must retreat.
    pub fn has_retreats(&self) -> bool {
        self.units.values().any(|unit| unit.must_retreat)
    }

    /// Returns true if `other` is a later board of the same timeline.
    fn is_superseded_by(&self, other: &Board) -> bool {
        other.timeline == self.timeline && (other.year, other.phase) > (self.year, self.phase)
    }
}

/// All boards of a game plus the winner, if decided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub winner: Option<Nation>,
}

impl World {
    pub fn new(boards: Vec<Board>) -> Self {
        World { boards, winner: None }
    }

    /// Finds the board at a timeline/year/phase.
    pub fn board(&self, timeline: u32, year: u16, phase: Phase) -> Option<&Board> {
        self.boards
            .iter()
            .find(|b| b.timeline == timeline && b.year == year && b.phase == phase)
    }

    /// Finds the board a location lies on.
    pub fn board_of(&self, location: &Location) -> Option<&Board> {
        self.board(location.timeline, location.year, location.phase)
    }

    /// Finds the unit at the exact region key of a location.
    pub fn find_unit(&self, location: &Location) -> Option<&Unit> {
        self.board_of(location)?.units.get(&location.region)
    }

    /// Returns true if no later board of the same timeline exists.
    pub fn is_latest(&self, board: &Board) -> bool {
        !self.boards.iter().any(|other| board.is_superseded_by(other))
    }

    /// Returns the boards still accepting input: the latest board of each timeline.
    pub fn active_boards(&self) -> Vec<&Board> {
        self.boards.iter().filter(|board| self.is_latest(board)).collect()
    }
}
