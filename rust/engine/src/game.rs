use crate::die::RandomSource;
use crate::errors::GameError;
use crate::player::Player;
use crate::turn::{HoldOutcome, RollOutcome, TurnState};
use std::fmt;

/// Winning threshold used when no configuration says otherwise.
pub const DEFAULT_TARGET_SCORE: u32 = 100;

/// The game of Pig: a roster of players, a turn pointer, a winning
/// threshold, and the die.
///
/// The game is stepped one command at a time. The caller announces the
/// current player, feeds [`Game::roll`] and [`Game::hold`] calls until the
/// turn ends (a hold, or a bust on rolling 1), then checks [`Game::winner`]
/// before starting the next turn. The winner check sits between turns, so a
/// holding player may overshoot the threshold by any margin; that is a rule
/// of the game, not an accident.
///
/// # Examples
///
/// ```
/// use pig_engine::die::Die;
/// use pig_engine::game::Game;
///
/// let die = Box::new(Die::with_seed(42));
/// let mut game = Game::with_player_count(2, 100, die).unwrap();
///
/// assert_eq!(game.players().len(), 2);
/// assert_eq!(game.current_player().name(), "Player 1");
/// assert_eq!(game.turn_total(), 0);
/// assert!(game.winner().is_none());
/// ```
pub struct Game {
    /// Ordered roster, fixed at construction
    players: Vec<Player>,
    /// Index of the player whose turn it is
    current: usize,
    /// First score at or above this wins
    target_score: u32,
    /// Injected roll source; a seeded die in production, a script in tests
    die: Box<dyn RandomSource>,
    /// Points of the turn in progress
    turn: TurnState,
}

// `die` is a trait object without a `Debug` bound; elide it.
impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("current", &self.current)
            .field("target_score", &self.target_score)
            .field("turn", &self.turn)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Build a game for `count` players named `Player 1` .. `Player N`.
    ///
    /// # Errors
    ///
    /// Fails like [`Game::new`]; in particular `count == 0` is
    /// [`GameError::NoPlayers`].
    pub fn with_player_count(
        count: usize,
        target_score: u32,
        die: Box<dyn RandomSource>,
    ) -> Result<Self, GameError> {
        let names = (1..=count).map(|i| format!("Player {}", i)).collect();
        Self::new(names, target_score, die)
    }

    /// Build a game from an explicit roster.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoPlayers`] for an empty roster
    /// - [`GameError::EmptyPlayerName`] for a blank name
    /// - [`GameError::DuplicatePlayerName`] for a repeated name
    /// - [`GameError::InvalidTargetScore`] for a target of 0
    pub fn new(
        names: Vec<String>,
        target_score: u32,
        die: Box<dyn RandomSource>,
    ) -> Result<Self, GameError> {
        if names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if target_score == 0 {
            return Err(GameError::InvalidTargetScore);
        }
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(GameError::EmptyPlayerName);
            }
            if names[..i].contains(name) {
                return Err(GameError::DuplicatePlayerName(name.clone()));
            }
        }
        Ok(Self {
            players: names.into_iter().map(Player::new).collect(),
            current: 0,
            target_score,
            die,
            turn: TurnState::default(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Points accumulated so far in the turn in progress.
    pub fn turn_total(&self) -> u32 {
        self.turn.total()
    }

    /// Roll the die for the current player.
    ///
    /// A 1 busts: the turn's points are discarded, the turn ends, and play
    /// passes on. Anything else is added to the turn total and the player
    /// chooses again.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once a player has reached the target score;
    /// a finished game only accepts [`Game::reset`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pig_engine::die::RandomSource;
    /// use pig_engine::game::Game;
    /// use pig_engine::turn::RollOutcome;
    ///
    /// struct Fixed(u8);
    /// impl RandomSource for Fixed {
    ///     fn roll(&mut self) -> u8 {
    ///         self.0
    ///     }
    /// }
    ///
    /// let mut game = Game::with_player_count(2, 100, Box::new(Fixed(5))).unwrap();
    /// let outcome = game.roll().unwrap();
    /// assert_eq!(
    ///     outcome,
    ///     RollOutcome::Point { roll: 5, turn_total: 5, score_if_held: 5 }
    /// );
    ///
    /// let mut game = Game::with_player_count(2, 100, Box::new(Fixed(1))).unwrap();
    /// assert_eq!(game.roll().unwrap(), RollOutcome::Bust { roll: 1 });
    /// // The bust ended the turn: play passed to the next player.
    /// assert_eq!(game.current_player().name(), "Player 2");
    /// ```
    pub fn roll(&mut self) -> Result<RollOutcome, GameError> {
        self.ensure_live()?;
        let roll = self.die.roll();
        if roll == 1 {
            self.turn.clear();
            self.advance_turn();
            Ok(RollOutcome::Bust { roll })
        } else {
            self.turn.add(roll);
            let turn_total = self.turn.total();
            let score_if_held = self.current_player().score().saturating_add(turn_total);
            Ok(RollOutcome::Point {
                roll,
                turn_total,
                score_if_held,
            })
        }
    }

    /// Bank the turn's points into the current player's score and pass the
    /// turn on. Holding straight away (turn total 0) is legal and changes
    /// nothing but whose turn it is.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once a player has reached the target score.
    ///
    /// # Examples
    ///
    /// ```
    /// use pig_engine::die::RandomSource;
    /// use pig_engine::game::Game;
    ///
    /// struct Fixed(u8);
    /// impl RandomSource for Fixed {
    ///     fn roll(&mut self) -> u8 {
    ///         self.0
    ///     }
    /// }
    ///
    /// let mut game = Game::with_player_count(2, 100, Box::new(Fixed(6))).unwrap();
    /// game.roll().unwrap();
    /// game.roll().unwrap();
    /// let held = game.hold().unwrap();
    /// assert_eq!(held.banked, 12);
    /// assert_eq!(held.total_score, 12);
    /// assert_eq!(game.players()[0].score(), 12);
    /// assert_eq!(game.current_player().name(), "Player 2");
    /// ```
    pub fn hold(&mut self) -> Result<HoldOutcome, GameError> {
        self.ensure_live()?;
        let banked = self.turn.take();
        let player = &mut self.players[self.current];
        player.add_score(banked);
        let total_score = player.score();
        self.advance_turn();
        Ok(HoldOutcome {
            banked,
            total_score,
        })
    }

    /// The winner, if any player has reached the target score.
    ///
    /// `None` while every score is strictly below the target. Ties cannot
    /// arise in normal play because the caller stops the moment one player
    /// gets there; were scores somehow equal, the first player in roster
    /// order wins.
    pub fn winner(&self) -> Option<&Player> {
        if self.players.iter().all(|p| p.score() < self.target_score) {
            return None;
        }
        let mut best = &self.players[0];
        for player in &self.players[1..] {
            if player.score() > best.score() {
                best = player;
            }
        }
        Some(best)
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Start a fresh round with the same roster: every score to 0, the turn
    /// pointer back to the first player, the turn total dropped. Safe to
    /// call at any time, any number of times.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset_score();
        }
        self.current = 0;
        self.turn.clear();
    }

    fn ensure_live(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    // After every completed turn, busted or held alike.
    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }
}
