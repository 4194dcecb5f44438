#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn at_path(path: &Path) -> String {
    format!("@{}", path.display())
}

/// A throwaway configuration file the CLI is pointed at.
pub struct TestConfig {
    dir: TempDir,
    path: PathBuf,
}

impl TestConfig {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.yaml");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!();
        cmd.arg("--config")
            .arg(&self.path)
            .env_remove("DEP_AGENT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let output = self
            .cmd()
            .arg("--json")
            .args(args)
            .output()
            .expect("failed to run dep-agent");
        assert!(
            output.status.success(),
            "command failed: stdout={}, stderr={}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("invalid JSON output")
    }

    pub fn run_json_err(&self, args: &[&str], code: i32) -> Value {
        let output = self
            .cmd()
            .arg("--json")
            .args(args)
            .output()
            .expect("failed to run dep-agent");
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit: stdout={}, stderr={}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("invalid JSON output")
    }

    pub fn assert_exit(&self, args: &[&str], code: i32) {
        self.cmd().args(args).assert().failure().code(code);
    }

    /// Adds a project and returns its UUID and the disclosed hashes.
    pub fn add_project(&self, name: &str, cidrs: &[&str]) -> (String, Vec<(String, String)>) {
        let mut args = vec!["add", "--name", name, "--work-dir", "/srv/app"];
        for cidr in cidrs {
            args.push("--ip-cidr");
            args.push(*cidr);
        }
        let out = self.run_json(&args);
        let uuid = out["data"]["project"]["uuid"]
            .as_str()
            .expect("project uuid")
            .to_string();
        (uuid, hashes(&out))
    }
}

pub fn hashes(out: &Value) -> Vec<(String, String)> {
    out["data"]["hashes"]
        .as_array()
        .expect("hashes")
        .iter()
        .map(|h| {
            (
                h["network"].as_str().expect("network").to_string(),
                h["hash"].as_str().expect("hash").to_string(),
            )
        })
        .collect()
}
