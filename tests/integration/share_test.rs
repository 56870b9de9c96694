//! Integration tests for share links

use predicates::prelude::*;

use crate::helpers::{run, Env, SHORT_LECTURE};

#[test]
fn share_prints_link_with_whole_seconds() {
    Env::new()
        .cmd()
        .args(["share", "125", "--no-copy"])
        .assert()
        .success()
        .stdout("https://eduaudio.app/lectures/advanced-react-patterns?t=125\n");
}

#[test]
fn share_floors_fractional_seconds() {
    Env::new()
        .cmd()
        .args(["share", "59.9", "--no-copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("?t=59\n"));
}

#[test]
fn share_negative_position_is_zero() {
    let (stdout, _stderr, exit_code) = run(&Env::new(), &["share", "-5", "--no-copy"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.trim_end().ends_with("?t=0"));
}

#[test]
fn share_uses_lecture_page_url() {
    let env = Env::new();
    let lecture = env.write_lecture("rust.toml", SHORT_LECTURE);
    let lecture = lecture.to_str().unwrap();

    let (stdout, _stderr, exit_code) = run(&env, &["share", "300", lecture, "--no-copy"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "https://lectures.example/rust-intro?t=300\n");
}

#[test]
fn share_honors_configured_base_url() {
    let env = Env::new();
    env.write_config("[share]\nbase_url = \"https://mirror.example/react?ref=mail\"\n");

    let (stdout, _stderr, exit_code) = run(&env, &["share", "42", "--no-copy"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "https://mirror.example/react?t=42\n");
}

#[test]
fn share_without_clipboard_still_prints_link() {
    // An empty PATH leaves no clipboard tool to find
    let env = Env::new();
    let output = env
        .cmd()
        .env("PATH", env.dir.path())
        .env_remove("WAYLAND_DISPLAY")
        .args(["share", "90"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout, "https://eduaudio.app/lectures/advanced-react-patterns?t=90\n");
    assert!(stderr.contains("could not copy link"));
}
