use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game requires at least one player")]
    NoPlayers,
    #[error("player name must not be empty")]
    EmptyPlayerName,
    #[error("duplicate player name: {0}")]
    DuplicatePlayerName(String),
    #[error("winning score must be at least 1")]
    InvalidTargetScore,
    #[error("game is already over")]
    GameOver,
}
