//! Fluent wrapper around assert_cmd::Command.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Environment variables that could leak the developer's setup into a test.
const SCRUBBED_VARS: [&str; 4] = ["STICKY_ENV", "STICKY_LOG", "XDG_CONFIG_HOME", "XDG_DATA_HOME"];

/// Fluent wrapper around `assert_cmd::Command` for the `sticky` binary.
pub struct StickyCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    current_dir: Option<PathBuf>,
    stdin: Option<String>,
}

impl StickyCommand {
    /// Creates a new command for the `sticky` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: None,
            stdin: None,
        }
    }

    /// Sets the `--db` option to pin the database file.
    pub fn db(self, path: &Path) -> Self {
        self.args(["--db".to_string(), path.to_string_lossy().to_string()])
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.envs
            .push((key.to_string(), value.as_ref().to_string()));
        self
    }

    /// Runs the child process from `dir`.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Feeds `input` to the child's standard input.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("sticky").expect("Failed to find sticky binary");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Action Shortcuts
    // ===========================================

    pub fn add(self, content: &str) -> Self {
        self.args(["--add", content])
    }

    pub fn get(self, id: i64) -> Self {
        self.args(["--get".to_string(), id.to_string()])
    }

    pub fn list(self) -> Self {
        self.args(["--list"])
    }

    pub fn del(self, id: i64) -> Self {
        self.args(["--del".to_string(), id.to_string()])
    }

    pub fn purge(self) -> Self {
        self.args(["--purge"])
    }
}

impl Default for StickyCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_sets_flag() {
        let cmd = StickyCommand::new().db(Path::new("/tmp/sticky.db"));
        assert_eq!(cmd.get_args(), ["--db", "/tmp/sticky.db"]);
    }

    #[test]
    fn test_action_shortcuts() {
        let cmd = StickyCommand::new().add("x").get(2).del(3);
        assert_eq!(cmd.get_args(), ["--add", "x", "--get", "2", "--del", "3"]);
    }
}
