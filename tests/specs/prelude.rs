//! Shared helpers for CLI specs.
//!
//! Every spec runs the real `alclock` binary inside a throwaway project
//! directory with `HOME` and `XDG_CONFIG_HOME` pointed into it, so a
//! developer's own config never leaks in.

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

/// Monday 2026-10-12, 08:00 UTC
pub const MONDAY_8AM: &str = "2026-10-12T08:00:00Z";
/// Monday 2026-10-12, 09:00 UTC
pub const MONDAY_9AM: &str = "2026-10-12T09:00:00Z";
/// Wednesday 2026-10-14, 10:00 UTC
pub const WEDNESDAY_10AM: &str = "2026-10-14T10:00:00Z";

/// Path to the `alclock` binary, building it on first use
fn binary() -> &'static Path {
    static BINARY: OnceLock<PathBuf> = OnceLock::new();
    BINARY.get_or_init(|| {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let cargo = std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into());
        let status = std::process::Command::new(cargo)
            .args(["build", "--quiet", "-p", "alclock", "--bin", "alclock"])
            .current_dir(root)
            .status()
            .expect("cargo build");
        assert!(status.success(), "building alclock failed");

        let target = std::env::var_os("CARGO_TARGET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("target"));
        target.join("debug").join(format!("alclock{}", std::env::consts::EXE_SUFFIX))
    })
}

/// A temporary project directory
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write file");
        path
    }

    /// An `alclock` invocation rooted in this project
    pub fn alclock(&self) -> CliBuilder {
        let mut cmd = Command::new(binary());
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("RUST_LOG", "warn")
            .timeout(Duration::from_secs(30));
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Run and expect exit code 0
    pub fn passes(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().success())
    }

    /// Run and expect a non-zero exit code
    pub fn fails(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().failure())
    }
}

pub struct RunAssert(Assert);

impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        RunAssert(self.0.stdout(predicate::str::contains(needle)))
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        RunAssert(self.0.stdout(predicate::str::contains(needle).not()))
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        RunAssert(self.0.stderr(predicate::str::contains(needle)))
    }

    /// Compare stdout exactly, with a readable diff on mismatch
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.0.get_output().stdout).to_string();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).to_string()
    }
}
