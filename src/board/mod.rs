//! Board representation and game-state types.
//!
//! Contains the data the eligibility engine reads: regions and nations,
//! units, locations and in-progress orders, boards and the world.

pub mod order;
pub mod region;
pub mod state;
pub mod unit;

pub use order::{InputMode, Location, Order, OrderEntry, OrderKind, ALL_INPUT_MODES};
pub use region::{
    base_region, Nation, RegionInfo, RegionTable, ALL_NATIONS, COAST_SEPARATOR,
    STANDARD_REGION_COUNT, SUPPLY_CENTRE_COUNT,
};
pub use state::{Board, Phase, World};
pub use unit::{Unit, UnitType};
