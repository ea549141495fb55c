//! Text protocol handling.
//!
//! Parsing for the line-oriented host protocol: commands, location
//! notation, and JSON snapshots of the game and world providers.

pub mod notation;
pub mod parser;
pub mod snapshot;

pub use notation::{parse_location, NotationError};
pub use parser::{parse_command, Command, OrderCommand};
pub use snapshot::{parse_game, parse_world, SnapshotError};
