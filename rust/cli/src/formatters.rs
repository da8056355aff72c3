//! Game-line formatters for terminal display.
//!
//! Pure functions and fixed strings that turn engine outcomes into the
//! lines the session prints. Keeping them here, away from the prompt loop,
//! makes the exact wording trivially testable.

/// Opening line of every round.
pub const WELCOME: &str = "Welcome to the Pig Game!";

/// Per-decision prompt; no trailing newline so input lands on the same line.
pub const CHOICE_PROMPT: &str = "Enter 'r' to roll or 'h' to hold: ";

/// Printed after a rejected turn decision.
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter 'r' to roll or 'h' to hold.";

/// Printed when a roll comes up 1.
pub const BUST_NOTICE: &str = "Oops! Rolled a 1. No points for this turn.";

/// Confirmation after scores are wiped for a new round.
pub const RESET_NOTICE: &str = "Game reset. Ready for a new round!";

/// End-of-round prompt; no trailing newline.
pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (y/n): ";

/// Turn opener: whose turn it is and what they have banked.
///
/// # Example
///
/// ```rust
/// # use pig_cli::formatters::format_turn_banner;
/// assert_eq!(
///     format_turn_banner("Player 1", 42),
///     "Player 1's turn! Current score: 42"
/// );
/// ```
pub fn format_turn_banner(name: &str, score: u32) -> String {
    format!("{}'s turn! Current score: {}", name, score)
}

pub fn format_rolled(roll: u8) -> String {
    format!("Rolled: {}", roll)
}

/// Running state after a scoring roll: the turn's points so far and the
/// total the player would have if they held now.
pub fn format_turn_status(turn_total: u32, score_if_held: u32) -> String {
    format!(
        "Turn total: {}, Total score if held: {}",
        turn_total, score_if_held
    )
}

pub fn format_hold(name: &str, total_score: u32) -> String {
    format!("{} holds! Total score: {}", name, total_score)
}

pub fn format_winner(name: &str, score: u32) -> String {
    format!("{} wins with a score of {}!", name, score)
}

/// One-line session header echoing the resolved settings, seed included so
/// a session can be reproduced afterwards.
pub fn format_session_header(players: usize, target_score: u32, seed: u64) -> String {
    format!("pig: players={} target={} seed={}", players, target_score, seed)
}
