//! Shared utilities for the integration tests.
//!
//! [`run_pig`] drives `pig_cli::run` with in-memory streams under a clean
//! `PIG_*` environment, so tests assert on exit codes and transcripts
//! without spawning a process. Every test using it must be `#[serial]`,
//! since the environment is process-global.

use std::io::Cursor;

/// Every environment variable the CLI reads.
pub const PIG_ENV_VARS: &[&str] = &["PIG_CONFIG", "PIG_PLAYERS", "PIG_TARGET_SCORE", "PIG_SEED"];

/// Clears the `PIG_*` variables, applies the given pairs, and restores the
/// previous values on drop.
#[derive(Debug)]
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores: Vec<(String, Option<String>)> = Vec::new();
        for key in PIG_ENV_VARS {
            restores.push(((*key).to_string(), std::env::var(key).ok()));
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            if !PIG_ENV_VARS.contains(key) {
                restores.push(((*key).to_string(), std::env::var(key).ok()));
            }
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the CLI with `input` as stdin and a clean `PIG_*` environment plus
/// the given overrides.
pub fn run_pig(input: &str, env: &[(&str, &str)]) -> RunResult {
    let _guard = EnvGuard::apply(env);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let exit_code = pig_cli::run(&mut out, &mut err, &mut stdin);
    RunResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).to_string(),
        stderr: String::from_utf8_lossy(&err).to_string(),
    }
}
