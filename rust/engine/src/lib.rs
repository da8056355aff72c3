//! # pig-engine: rules of the dice game Pig
//!
//! Players take turns rolling a single six-sided die, accumulating points
//! within the turn. Rolling a 1 busts: the turn's points vanish and play
//! passes on. Holding banks the turn's points into the player's score. The
//! first player to reach the target score (100 by default) wins.
//!
//! The crate is the rules only. It never prints, never reads input, and
//! never decides when to roll; callers drive it one command at a time and
//! render the returned outcomes however they like.
//!
//! ## Modules
//!
//! - [`die`]: the [`RandomSource`](die::RandomSource) trait and the seeded
//!   [`Die`](die::Die) that implements it
//! - [`player`]: a named player and their banked score
//! - [`turn`]: turn commands and the outcomes a step reports back
//! - [`game`]: the [`Game`](game::Game) state machine tying it together
//! - [`errors`]: everything that can go wrong, as [`GameError`](errors::GameError)
//!
//! ## Quick start
//!
//! ```
//! use pig_engine::die::Die;
//! use pig_engine::game::{Game, DEFAULT_TARGET_SCORE};
//! use pig_engine::turn::RollOutcome;
//!
//! let die = Box::new(Die::with_seed(7));
//! let mut game = Game::with_player_count(2, DEFAULT_TARGET_SCORE, die).unwrap();
//!
//! // One step of one turn; a real caller loops until hold or bust.
//! match game.roll().unwrap() {
//!     RollOutcome::Bust { roll } => assert_eq!(roll, 1),
//!     RollOutcome::Point { roll, turn_total, .. } => {
//!         assert!((2..=6).contains(&roll));
//!         assert_eq!(turn_total, u32::from(roll));
//!     }
//! }
//! ```
//!
//! ## Deterministic rolls
//!
//! [`Die`](die::Die) is seeded ChaCha20, so a session is reproducible from
//! its seed alone:
//!
//! ```
//! use pig_engine::die::{Die, RandomSource};
//!
//! let mut a = Die::with_seed(99);
//! let mut b = Die::with_seed(99);
//! for _ in 0..32 {
//!     assert_eq!(a.roll(), b.roll());
//! }
//! ```

pub mod die;
pub mod errors;
pub mod game;
pub mod player;
pub mod turn;
