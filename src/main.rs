//! Timeweave -- a location-selection host for multi-timeline Diplomacy.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead};

use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timeweave::engine::Engine;
use timeweave::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let result = match cmd {
            Command::Hello => {
                engine.handle_hello(&mut out);
                Ok(())
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
                Ok(())
            }
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::NewGame => {
                engine.new_game();
                Ok(())
            }
            Command::GameLoading => {
                engine.set_game_loading();
                Ok(())
            }
            Command::Game { json } => engine.set_game(&json),
            Command::WorldLoading => {
                engine.set_world_loading();
                Ok(())
            }
            Command::World { json } => engine.set_world(&json),
            Command::Mode { mode } => {
                engine.set_mode(mode);
                Ok(())
            }
            Command::Order(order) => engine.set_order(order),
            Command::CanSelect { location } => engine.handle_canselect(&location, &mut out),
            Command::Selectable => {
                engine.handle_selectable(&mut out);
                Ok(())
            }
            Command::Quit => break,
        };

        if let Err(e) = result {
            warn!(error = %e, command = line.trim(), "command failed");
        }
    }
}
