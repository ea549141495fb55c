//! Host command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the main loop can dispatch on.

use tracing::warn;

use super::notation::parse_location;
use crate::board::{InputMode, Location, OrderKind};

/// How the `order` command changes the pending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderCommand {
    /// Drop the pending order.
    Clear,

    /// Start an order with no source selected.
    Pending(OrderKind),

    /// Start an order with the unit at a location as its source.
    From(OrderKind, Location),
}

/// A parsed host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake.
    Hello,

    /// Synchronization ping; the host must reply `readyok`.
    IsReady,

    /// Set an option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Clear game, world and order-entry state.
    NewGame,

    /// The game provider started fetching.
    GameLoading,

    /// A game snapshot in JSON.
    Game { json: String },

    /// The world provider started fetching.
    WorldLoading,

    /// A world snapshot in JSON.
    World { json: String },

    /// Change the current input mode.
    Mode { mode: InputMode },

    /// Change the pending order.
    Order(OrderCommand),

    /// Ask whether a location is selectable.
    CanSelect { location: Location },

    /// List every selectable location.
    Selectable,

    /// Terminate the host process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "hello" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "selectable" => Some(Command::Selectable),

        "setoption" => parse_setoption(&tokens),
        "game" => parse_snapshot(&tokens, trimmed, Command::GameLoading, |json| Command::Game { json }),
        "world" => parse_snapshot(&tokens, trimmed, Command::WorldLoading, |json| Command::World { json }),
        "mode" => parse_mode(&tokens),
        "order" => parse_order(&tokens),
        "canselect" => parse_canselect(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `game|world loading` or `game|world <json>`; the JSON may contain spaces.
fn parse_snapshot(
    tokens: &[&str],
    full_line: &str,
    loading: Command,
    ready: fn(String) -> Command,
) -> Option<Command> {
    if tokens.len() < 2 {
        warn!(command = tokens[0], "malformed snapshot: expected 'loading' or a JSON document");
        return None;
    }
    if tokens.len() == 2 && tokens[1] == "loading" {
        return Some(loading);
    }
    let json = full_line.strip_prefix(tokens[0]).unwrap_or("").trim().to_string();
    Some(ready(json))
}

/// Parses `mode <mode>`.
fn parse_mode(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed mode: expected 'mode <mode>'");
        return None;
    }
    match InputMode::from_name(tokens[1]) {
        Some(mode) => Some(Command::Mode { mode }),
        None => {
            warn!(mode = tokens[1], "unknown input mode");
            None
        }
    }
}

/// Parses `order none`, `order <kind>` or `order <kind> <location>`.
fn parse_order(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 || tokens.len() > 3 {
        warn!("malformed order: expected 'order none|<kind> [<location>]'");
        return None;
    }
    if tokens[1] == "none" {
        return if tokens.len() == 2 {
            Some(Command::Order(OrderCommand::Clear))
        } else {
            warn!("malformed order: 'order none' takes no location");
            None
        };
    }

    let Some(kind) = OrderKind::from_name(tokens[1]) else {
        warn!(kind = tokens[1], "unknown order kind");
        return None;
    };
    match tokens.get(2) {
        None => Some(Command::Order(OrderCommand::Pending(kind))),
        Some(loc) => match parse_location(loc) {
            Ok(location) => Some(Command::Order(OrderCommand::From(kind, location))),
            Err(e) => {
                warn!(error = %e, "malformed order source");
                None
            }
        },
    }
}

/// Parses `canselect <location>`.
fn parse_canselect(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed canselect: expected 'canselect <location>'");
        return None;
    }
    match parse_location(tokens[1]) {
        Ok(location) => Some(Command::CanSelect { location }),
        Err(e) => {
            warn!(error = %e, "malformed canselect location");
            None
        }
    }
}
