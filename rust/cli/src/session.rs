//! # Interactive Session
//!
//! The prompt loop that drives a [`Game`] from the terminal: announce the
//! turn, read roll/hold decisions, print the outcomes, announce the winner,
//! and offer another round.
//!
//! ## Behavior
//!
//! - Unrecognized decisions re-prompt with no game-state change
//! - Rolling a 1 prints the bust notice and passes the turn
//! - After a winner, scores reset and the user chooses whether to continue
//! - Closing stdin anywhere aborts the session as an interruption
//!
//! All output goes through injected writers, so tests feed a [`Cursor`] of
//! scripted decisions and assert on the captured transcript.
//!
//! [`Cursor`]: std::io::Cursor

use crate::error::CliError;
use crate::formatters;
use crate::io_utils::read_input_line;
use crate::ui;
use crate::validation;
use pig_engine::game::Game;
use pig_engine::turn::{RollOutcome, TurnCommand};
use std::io::{BufRead, Write};

/// Run rounds until the user declines to continue.
///
/// Each round plays turns to a winner, announces the result, resets the
/// roster, and asks again. Returns [`CliError::Interrupted`] if stdin closes
/// before the user has answered.
pub fn run_session(
    game: &mut Game,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    loop {
        writeln!(out, "{}", formatters::WELCOME)?;
        play_round(game, out, stdin)?;

        ui::prompt(out, formatters::PLAY_AGAIN_PROMPT)?;
        let Some(answer) = read_input_line(stdin) else {
            return Err(interrupted());
        };
        if !validation::parse_play_again(&answer) {
            return Ok(());
        }
    }
}

/// Play turns until someone reaches the target, announce them, and reset
/// for the next round.
fn play_round(
    game: &mut Game,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    while !game.is_over() {
        play_turn(game, out, stdin)?;
    }

    if let Some(winner) = game.winner() {
        let line = formatters::format_winner(winner.name(), winner.score());
        writeln!(out, "{}", line)?;
    }
    game.reset();
    writeln!(out, "{}", formatters::RESET_NOTICE)?;
    Ok(())
}

/// One player's turn: prompt for decisions until a hold or a bust.
fn play_turn(
    game: &mut Game,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    // The turn pointer moves on inside roll/hold, so capture whose turn
    // this is up front.
    let (name, score) = {
        let player = game.current_player();
        (player.name().to_string(), player.score())
    };
    writeln!(out, "{}", formatters::format_turn_banner(&name, score))?;

    loop {
        ui::prompt(out, formatters::CHOICE_PROMPT)?;
        let Some(input) = read_input_line(stdin) else {
            return Err(interrupted());
        };

        match validation::parse_turn_choice(&input) {
            Some(TurnCommand::Roll) => match game.roll()? {
                RollOutcome::Bust { roll } => {
                    writeln!(out, "{}", formatters::format_rolled(roll))?;
                    writeln!(out, "{}", formatters::BUST_NOTICE)?;
                    return Ok(());
                }
                RollOutcome::Point {
                    roll,
                    turn_total,
                    score_if_held,
                } => {
                    writeln!(out, "{}", formatters::format_rolled(roll))?;
                    writeln!(
                        out,
                        "{}",
                        formatters::format_turn_status(turn_total, score_if_held)
                    )?;
                }
            },
            Some(TurnCommand::Hold) => {
                let held = game.hold()?;
                writeln!(out, "{}", formatters::format_hold(&name, held.total_score))?;
                return Ok(());
            }
            None => writeln!(out, "{}", formatters::INVALID_CHOICE)?,
        }
    }
}

fn interrupted() -> CliError {
    CliError::Interrupted("end of input".to_string())
}
