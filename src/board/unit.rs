//! Unit types and ownership.
//!
//! A unit lives on exactly one board, keyed by region. Its position is the
//! map key it is stored under, so the unit itself carries only its owner,
//! its type, and whether it was dislodged.

use serde::{Deserialize, Serialize};

use super::region::Nation;

/// The type of a military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Army,
    Fleet,
}

/// A military unit on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub owner: Nation,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    /// Set when the unit was dislodged and must retreat or disband.
    #[serde(default)]
    pub must_retreat: bool,
}

impl Unit {
    /// Creates a unit that is not awaiting a retreat.
    pub fn new(owner: Nation, unit_type: UnitType) -> Self {
        Unit { owner, unit_type, must_retreat: false }
    }

    /// Creates a dislodged unit that must retreat.
    pub fn dislodged(owner: Nation, unit_type: UnitType) -> Self {
        Unit { owner, unit_type, must_retreat: true }
    }
}
