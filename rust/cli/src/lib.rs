//! # Pig CLI Library
//!
//! Terminal front end for the dice game Pig, driving the `pig-engine` rules
//! crate one decision at a time.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which resolves
//! configuration, seeds the die, and hands the I/O streams to the
//! interactive session.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//!
//! let stdin = io::stdin();
//! let code = pig_cli::run(&mut io::stdout(), &mut io::stderr(), &mut stdin.lock());
//! std::process::exit(code);
//! ```
//!
//! ## Configuration
//!
//! Settings resolve from defaults, then a TOML file named by `PIG_CONFIG`,
//! then environment variables:
//!
//! - `PIG_PLAYERS`: number of players (default 2)
//! - `PIG_TARGET_SCORE`: winning threshold (default 100)
//! - `PIG_SEED`: die seed; omitted means a freshly drawn random seed
//!
//! The resolved settings, seed included, are echoed in the session header
//! so any session can be replayed.
//!
//! ## Exit Codes
//!
//! - `0`: session finished normally (the user declined another round)
//! - `2`: invalid configuration or an I/O failure
//! - `130`: stdin closed mid-session

use pig_engine::die::Die;
use pig_engine::game::Game;
use std::io::{BufRead, Write};

mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod macros;
mod session;
pub mod ui;
pub mod validation;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `out` - Output stream for game display (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
/// * `stdin` - Input stream for player decisions (typically `stdin`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions.
pub fn run(out: &mut dyn Write, err: &mut dyn Write, stdin: &mut dyn BufRead) -> i32 {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return exit_code::ERROR;
        }
    };

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let die = Box::new(Die::with_seed(seed));
    let mut game = match Game::with_player_count(cfg.players, cfg.target_score, die) {
        Ok(game) => game,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            return exit_code::ERROR;
        }
    };

    write_or_exit!(
        out,
        "{}",
        formatters::format_session_header(cfg.players, cfg.target_score, seed)
    );

    match session::run_session(&mut game, out, stdin) {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
