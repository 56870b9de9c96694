//! Integration tests for the info command

use predicates::prelude::*;

use crate::helpers::{run, Env, SHORT_LECTURE};

#[test]
fn info_at_position_snapshot() {
    let (stdout, stderr, exit_code) = run(&Env::new(), &["info", "--at", "125"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!("info_at_position", stdout);
}

#[test]
fn info_lists_all_chapters() {
    Env::new()
        .cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Introduction"))
        .stdout(predicate::str::contains("Custom Hooks Fundamentals"))
        .stdout(predicate::str::contains("Performance Optimization"))
        .stdout(predicate::str::contains("▶").not());
}

#[test]
fn info_json_reports_active_entries() {
    let (stdout, _stderr, exit_code) = run(&Env::new(), &["info", "--at", "900", "--json"]);
    assert_eq!(exit_code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["active_chapter"], "3");
    assert_eq!(json["active_segment"], 3);
    assert_eq!(json["media_duration"], 1500.0);
    assert_eq!(
        json["lecture"]["title"],
        "Advanced React Patterns and Performance"
    );
}

#[test]
fn info_reads_lecture_file() {
    let env = Env::new();
    let lecture = env.write_lecture("rust.toml", SHORT_LECTURE);

    env.cmd()
        .arg("info")
        .arg(&lecture)
        .args(["--at", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Intro to Rust"))
        .stdout(predicate::str::contains("▶   5:00 - 10:00  Borrowing"))
        .stdout(predicate::str::contains("Duration: 10:00"));
}

#[test]
fn info_missing_lecture_file() {
    let (_stdout, stderr, exit_code) = run(&Env::new(), &["info", "no-such-lecture.toml"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to load lecture"));
    assert!(stderr.contains("no-such-lecture.toml"));
}

#[test]
fn info_rejects_unsorted_transcript() {
    let env = Env::new();
    let lecture = env.write_lecture(
        "bad.toml",
        r#"
title = "Bad"
source = "a.mp3"
page_url = "https://x.example/bad"

[[transcript]]
timestamp = 30.0
text = "second"

[[transcript]]
timestamp = 10.0
text = "first"
"#,
    );

    let (_stdout, stderr, exit_code) = run(&env, &["info", lecture.to_str().unwrap()]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("starts before the previous one"));
}
