//! Common test utilities for CLI integration tests.
//!
//! Every test gets its own temporary data directory, so runs never touch
//! `~/.innkeep` and never see each other's state.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would otherwise leak the developer's settings into tests.
const INNKEEP_VARS: [&str; 6] = [
    "INNKEEP_DATA_DIR",
    "INNKEEP_DATA_FILE",
    "INNKEEP_AUTOSAVE",
    "INNKEEP_CURRENCY_SYMBOL",
    "INNKEEP_LOG_MODE",
    "INNKEEP_OUTPUT_FORMAT",
];

/// Test environment with an isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the innkeep data directory (created on first save)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("innkeep-data");
        Self { temp_dir, data_dir }
    }

    /// A command with only the binary and a scrubbed environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("innkeep").expect("Failed to find innkeep binary");
        for var in INNKEEP_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the default state file.
    pub fn state_file(&self) -> PathBuf {
        self.data_dir.join("hotel_data.json")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Parsed state file.
    pub fn state(&self) -> serde_json::Value {
        read_json(&self.state_file())
    }

    /// Book a room and return the printed reservation id.
    ///
    /// # Panics
    /// Panics if the book command fails or prints something else.
    pub fn book(&self, room: u32, check_in: &str, check_out: &str) -> u64 {
        let output = self
            .command()
            .args(["book", "--room", &room.to_string()])
            .args(["--name", "Ada Lovelace", "--email", "ada@example.com"])
            .args(["--check-in", check_in, "--check-out", check_out])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        parse_id(&stdout)
    }

    /// Run `list --format json` and return the parsed array.
    pub fn list_json(&self) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .output()
            .expect("Failed to run list command");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("list output is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a reservation id as printed by `book`.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> u64 {
    output
        .trim()
        .trim_start_matches('#')
        .parse()
        .expect("Output is not a reservation id")
}

#[allow(dead_code)]
pub fn read_json(path: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).expect("Failed to read state file");
    serde_json::from_str(&raw).expect("State file is not JSON")
}
