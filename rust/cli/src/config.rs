//! Layered session configuration.
//!
//! Values resolve in precedence order: built-in defaults, then a TOML file
//! named by `PIG_CONFIG`, then the `PIG_PLAYERS` / `PIG_TARGET_SCORE` /
//! `PIG_SEED` environment variables.

use pig_engine::game::DEFAULT_TARGET_SCORE;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub players: usize,
    pub target_score: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            target_score: DEFAULT_TARGET_SCORE,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    if let Ok(path) = std::env::var("PIG_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
        }
        if let Some(v) = f.target_score {
            cfg.target_score = v;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
        }
    }

    if let Ok(players) = std::env::var("PIG_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
    }
    if let Ok(target) = std::env::var("PIG_TARGET_SCORE")
        && !target.is_empty()
    {
        cfg.target_score = target
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid target_score".into()))?;
    }
    if let Ok(seed) = std::env::var("PIG_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
    }

    validate(&cfg)?;
    Ok(cfg)
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    target_score: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: players must be >=1".into(),
        ));
    }
    if cfg.target_score == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: target_score must be >=1".into(),
        ));
    }
    Ok(())
}
