use assert_cmd::prelude::CommandCargoExt;
use std::path::{Path, PathBuf};
use std::process::Command;

pub fn bench_command() -> Command {
    let mut command = Command::cargo_bin("timestream-bench").unwrap();
    command.env("TIMESTREAM_LOG", "info");
    command
}

/// Server binary of the same workspace build.
pub fn server_executable() -> PathBuf {
    assert_cmd::cargo::cargo_bin("timestream-server")
}

pub fn line_count(path: &Path) -> usize {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count()
}
