#![allow(dead_code)]

pub mod mock_git;

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn working_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// `desigit` running in `dir` against the recording mock git.
///
/// The mock writes the argv it received to `dir/git-args` and exits with
/// `exit_code`.
pub fn run_desigit_command(dir: &Path, args: &[&str], exit_code: i32) -> Command {
    let mut cmd = Command::cargo_bin("desigit").expect("Failed to find desigit binary");
    cmd.current_dir(dir);
    cmd.env_remove("DESIGIT_LOG");
    cmd.env("DESIGIT_GIT", mock_git::path());
    cmd.env(mock_git::LOG_ENV_VAR, mock_git::log_path(dir));
    cmd.env(mock_git::EXIT_ENV_VAR, exit_code.to_string());
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
