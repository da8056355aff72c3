//! Configuration layering: defaults, then the `PIG_CONFIG` file, then
//! `PIG_*` environment variables, with validation after the merge.

use crate::helpers::run_pig;
use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn defaults_fill_the_session_header() {
    let res = run_pig("", &[]);
    // EOF at the first prompt aborts the session, headers already printed.
    assert_eq!(res.exit_code, 130);
    assert!(
        res.stdout.contains("pig: players=2 target=100 seed="),
        "stdout={}",
        res.stdout
    );
}

#[test]
#[serial]
fn config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pig.toml");
    std::fs::write(&path, "players = 3\ntarget_score = 50\nseed = 456\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let res = run_pig("", &[("PIG_CONFIG", path_str.as_str())]);
    assert_eq!(res.exit_code, 130);
    assert!(
        res.stdout.contains("pig: players=3 target=50 seed=456"),
        "stdout={}",
        res.stdout
    );
}

#[test]
#[serial]
fn env_overrides_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pig.toml");
    std::fs::write(&path, "players = 3\ntarget_score = 50\nseed = 456\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let res = run_pig(
        "",
        &[
            ("PIG_CONFIG", path_str.as_str()),
            ("PIG_PLAYERS", "4"),
            ("PIG_SEED", "123"),
        ],
    );
    // target_score still comes from the file; players and seed from env.
    assert!(
        res.stdout.contains("pig: players=4 target=50 seed=123"),
        "stdout={}",
        res.stdout
    );
}

#[test]
#[serial]
fn partial_config_file_keeps_defaults_for_the_rest() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pig.toml");
    std::fs::write(&path, "seed = 9\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let res = run_pig("", &[("PIG_CONFIG", path_str.as_str())]);
    assert!(
        res.stdout.contains("pig: players=2 target=100 seed=9"),
        "stdout={}",
        res.stdout
    );
}

#[test]
#[serial]
fn malformed_env_values_fail_fast() {
    let res = run_pig("", &[("PIG_PLAYERS", "abc")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: Invalid players"), "stderr={}", res.stderr);
    assert!(res.stdout.is_empty(), "no session output on config failure");

    let res = run_pig("", &[("PIG_SEED", "-1")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid seed"), "stderr={}", res.stderr);

    let res = run_pig("", &[("PIG_TARGET_SCORE", "lots")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid target_score"), "stderr={}", res.stderr);
}

#[test]
#[serial]
fn zero_players_or_target_is_invalid_configuration() {
    let res = run_pig("", &[("PIG_PLAYERS", "0")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("players must be >=1"), "stderr={}", res.stderr);

    let res = run_pig("", &[("PIG_TARGET_SCORE", "0")]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("target_score must be >=1"),
        "stderr={}",
        res.stderr
    );
}

#[test]
#[serial]
fn unreadable_config_file_is_an_error() {
    let res = run_pig("", &[("PIG_CONFIG", "/nonexistent/pig.toml")]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("cannot read config file"),
        "stderr={}",
        res.stderr
    );
}

#[test]
#[serial]
fn malformed_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pig.toml");
    std::fs::write(&path, "players = \"many\"\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let res = run_pig("", &[("PIG_CONFIG", path_str.as_str())]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("cannot parse config file"),
        "stderr={}",
        res.stderr
    );
}

#[test]
#[serial]
fn same_seed_reproduces_the_transcript() {
    let input = "r\nr\nr\n";
    let a = run_pig(input, &[("PIG_SEED", "42")]);
    let b = run_pig(input, &[("PIG_SEED", "42")]);
    assert_eq!(a.exit_code, b.exit_code);
    assert_eq!(a.stdout, b.stdout, "same seed must yield the same session");
    assert!(a.stdout.contains("seed=42"));
}
