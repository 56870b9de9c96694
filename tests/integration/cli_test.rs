//! Integration tests for the command-line surface

use predicates::prelude::*;

use crate::helpers::{run, Env};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let env = Env::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("share"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_mentions_url_and_start() {
    let (stdout, _stderr, exit_code) = run(&Env::new(), &["play", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--url"));
    assert!(stdout.contains("--start"));
    assert!(stdout.contains("--rate"));
}

#[test]
fn version_flag() {
    Env::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("eduaudio "));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn unknown_subcommand_fails() {
    let (_stdout, stderr, exit_code) = run(&Env::new(), &["rewind"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("rewind"));
}

#[test]
fn share_requires_seconds() {
    let (_stdout, stderr, exit_code) = run(&Env::new(), &["share"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<SECONDS>"));
}

#[test]
fn unsupported_rate_is_rejected() {
    let (_stdout, stderr, exit_code) = run(&Env::new(), &["play", "--rate", "3"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Unsupported playback rate"));
}

#[test]
fn play_without_terminal_fails_cleanly() {
    // stdin/stdout are pipes under the test harness
    let (_stdout, stderr, exit_code) = run(&Env::new(), &["play"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("interactive terminal"));
}

// ============================================================================
// Config and Completions
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let env = Env::new();
    let (stdout, _stderr, exit_code) = run(&env, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[player]"));
    assert!(stdout.contains("skip_seconds = 15.0"));
    assert!(stdout.contains("tick_ms = 100"));
}

#[test]
fn config_show_reflects_file() {
    let env = Env::new();
    env.write_config("[player]\nskip_seconds = 30.0\n");
    let (stdout, _stderr, exit_code) = run(&env, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("skip_seconds = 30.0"));
}

#[test]
fn broken_config_is_reported() {
    let env = Env::new();
    env.write_config("[player\n");
    let (_stdout, stderr, exit_code) = run(&env, &["config", "show"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn completions_for_bash() {
    Env::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eduaudio"));
}
