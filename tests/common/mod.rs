#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::ffi::OsStr;
use std::path::PathBuf;

pub fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("testdata");
    path.push(name);
    path.display().to_string()
}

pub fn fixtures_dir() -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("testdata");
    path.display().to_string()
}

/// A `mycnf` command with a predictable environment.
pub fn mycnf() -> Command {
    let mut cmd = cargo_bin_cmd!("mycnf");
    cmd.env_remove("MYSQL_DSN")
        .env_remove("RUST_LOG")
        .env("USER", "envuser")
        .env("NO_COLOR", "1");
    cmd
}

pub fn run_json<I, S>(args: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = mycnf();
    cmd.args(args).arg("--json");
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("json")
}
