//! Common test utilities for CLI integration tests.
//!
//! Every command runs with an isolated user config directory, a temporary
//! working directory and the MDPATH_* environment cleared, so the host's
//! configuration never leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MDPATH_ENV_VARS: [&str; 6] = [
    "MDPATH_IMAGE_EXTENSIONS",
    "MDPATH_MARKDOWN_EXTENSIONS",
    "MDPATH_WIKI_PAGE_EXTENSIONS",
    "MDPATH_IGNORE_CASE",
    "MDPATH_LOG_MODE",
    "MDPATH_CONFIG_DIR",
];

/// Test environment with isolated configuration.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory passed as --config-dir
    pub config_dir: PathBuf,
    /// Working directory of the spawned command
    pub work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty config and work directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        let work_dir = temp_dir.path().join("work");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            temp_dir,
            config_dir,
            work_dir,
        }
    }

    /// Get a command with a clean environment but no --config-dir flag.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("mdpath").expect("Failed to find mdpath binary");
        for var in MDPATH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Get a command with the isolated config directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self.config_dir.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write user config");
        path
    }

    /// Write a project configuration into the work directory.
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join(".mdpath.yaml");
        std::fs::write(&path, content).expect("Failed to write project config");
        path
    }

    /// Write an arbitrary file under the work directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// The work directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }
}
