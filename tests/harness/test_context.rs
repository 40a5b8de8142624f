//! Shared testing harness for `projloc` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Create a nested project directory under the work directory.
    pub(crate) fn project(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(&path).expect("Failed to create project directory");
        path
    }

    /// Write `projloc.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("projloc.toml"), content).expect("Failed to write config");
    }

    /// Build a command for invoking the compiled `projloc` binary within the default workspace.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `projloc` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("projloc").expect("Failed to locate projloc binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env("LANG", "en_US.UTF-8")
            .env_remove("LC_ALL")
            .env_remove("LC_MESSAGES")
            .env_remove("PROJLOC_LOG");
        cmd
    }

    /// The work directory as passed on the command line.
    pub(crate) fn work_dir_arg(&self) -> String {
        self.work_dir.to_str().expect("temp path is valid unicode").to_string()
    }
}
