//! End-to-end session behavior through `pig_cli::run`, scripted over stdin.
//!
//! Die rolls are unpredictable here, so these scenarios stick to decisions
//! whose transcript does not depend on roll values: holds, invalid tokens,
//! and end-of-input.

use crate::helpers::run_pig;
use pig_cli::exit_code;
use serial_test::serial;

#[test]
#[serial]
fn eof_at_first_prompt_exits_interrupted() {
    let res = run_pig("", &[]);
    assert_eq!(res.exit_code, exit_code::INTERRUPTED);
    assert!(res.stdout.contains("Welcome to the Pig Game!"));
    assert!(res.stdout.contains("Player 1's turn! Current score: 0"));
    assert!(res.stdout.contains("Enter 'r' to roll or 'h' to hold: "));
    assert!(res.stderr.is_empty(), "stderr={}", res.stderr);
}

#[test]
#[serial]
fn header_comes_before_the_welcome_line() {
    let res = run_pig("", &[("PIG_SEED", "7")]);
    let header_at = res.stdout.find("pig: players=2 target=100 seed=7");
    let welcome_at = res.stdout.find("Welcome to the Pig Game!");
    assert!(header_at.is_some(), "stdout={}", res.stdout);
    assert!(welcome_at.is_some(), "stdout={}", res.stdout);
    assert!(header_at < welcome_at);
}

#[test]
#[serial]
fn holds_rotate_through_both_players() {
    // Holding banks nothing but always passes the turn, whatever the die
    // would have rolled.
    let res = run_pig("h\nh\nh\n", &[]);
    assert_eq!(res.exit_code, exit_code::INTERRUPTED);
    assert!(res.stdout.contains("Player 1 holds! Total score: 0"));
    assert!(res.stdout.contains("Player 2 holds! Total score: 0"));
    // The third hold wraps back around to the first player.
    assert_eq!(
        res.stdout.matches("Player 1's turn! Current score: 0").count(),
        2,
        "stdout={}",
        res.stdout
    );
}

#[test]
#[serial]
fn roster_size_comes_from_configuration() {
    let res = run_pig("h\nh\nh\n", &[("PIG_PLAYERS", "3")]);
    assert_eq!(res.exit_code, exit_code::INTERRUPTED);
    assert!(res.stdout.contains("Player 1's turn!"));
    assert!(res.stdout.contains("Player 2's turn!"));
    assert!(res.stdout.contains("Player 3's turn!"));
}

#[test]
#[serial]
fn unrecognized_decisions_reprompt() {
    let res = run_pig("roll\nq\n", &[]);
    assert_eq!(res.exit_code, exit_code::INTERRUPTED);
    assert_eq!(
        res.stdout
            .matches("Invalid choice. Please enter 'r' to roll or 'h' to hold.")
            .count(),
        2,
        "stdout={}",
        res.stdout
    );
    // Still the first player's turn; rejected input never advances play.
    assert!(!res.stdout.contains("Player 2's turn!"));
}

#[test]
#[serial]
fn decision_tokens_are_case_insensitive() {
    let res = run_pig("H\nH\n", &[]);
    assert_eq!(res.exit_code, exit_code::INTERRUPTED);
    assert!(res.stdout.contains("Player 1 holds! Total score: 0"));
    assert!(res.stdout.contains("Player 2 holds! Total score: 0"));
    assert!(!res.stdout.contains("Invalid choice"));
}
