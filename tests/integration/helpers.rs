//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A minimal valid lecture file.
pub const SHORT_LECTURE: &str = r#"
title = "Intro to Rust"
instructor = "Ferris"
source = "https://media.example/rust.mp3"
page_url = "https://lectures.example/rust-intro"
duration = 600.0

[[chapters]]
id = "a"
title = "Ownership"
start_time = 0.0
end_time = 300.0

[[chapters]]
id = "b"
title = "Borrowing"
start_time = 300.0
end_time = 600.0

[[transcript]]
timestamp = 0.0
text = "Every value has an owner."

[[transcript]]
timestamp = 300.0
text = "References borrow without taking ownership."
"#;

/// Isolated environment for running the binary.
///
/// Points the config at a file inside a temp dir so the user's own
/// configuration never leaks into a test.
pub struct Env {
    pub dir: TempDir,
}

impl Env {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn write_lecture(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write lecture");
        path
    }

    /// Command for the eduaudio binary in this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("eduaudio").expect("binary builds");
        cmd.env("NO_COLOR", "1")
            .env("EDUAUDIO_CONFIG", self.config_path())
            .env_remove("EDUAUDIO_LOG");
        cmd
    }
}

/// Run the binary and capture (stdout, stderr, exit code).
pub fn run(env: &Env, args: &[&str]) -> (String, String, i32) {
    let output = env.cmd().args(args).output().expect("Failed to execute eduaudio");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
