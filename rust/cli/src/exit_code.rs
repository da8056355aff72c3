//! Exit code constants for the CLI application.
//!
//! Centralized here so every exit path reports the same codes.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Session aborted by the user closing stdin mid-game.
pub const INTERRUPTED: i32 = 130;
