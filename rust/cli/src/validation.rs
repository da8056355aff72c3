//! Input parsing for the interactive session.
//!
//! Two tiny grammars: the per-roll decision (`r` to roll, `h` to hold) and
//! the end-of-round answer (`y` to play again). Both are case-insensitive
//! and trimmed; anything unrecognized is reported back so the prompt loop
//! can re-ask without touching game state.

use pig_engine::turn::TurnCommand;

/// Parse a turn decision into a [`TurnCommand`].
///
/// Accepts exactly `r` (roll) and `h` (hold), case-insensitive, surrounding
/// whitespace ignored. Everything else, the empty string included, is
/// `None`.
///
/// # Example
///
/// ```rust
/// # use pig_cli::validation::parse_turn_choice;
/// use pig_engine::turn::TurnCommand;
///
/// assert_eq!(parse_turn_choice("r"), Some(TurnCommand::Roll));
/// assert_eq!(parse_turn_choice("  H "), Some(TurnCommand::Hold));
/// assert_eq!(parse_turn_choice("roll"), None);
/// assert_eq!(parse_turn_choice(""), None);
/// ```
pub fn parse_turn_choice(input: &str) -> Option<TurnCommand> {
    match input.trim().to_lowercase().as_str() {
        "r" => Some(TurnCommand::Roll),
        "h" => Some(TurnCommand::Hold),
        _ => None,
    }
}

/// Parse the play-again answer: `y` means another round, anything else ends
/// the session.
pub fn parse_play_again(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
