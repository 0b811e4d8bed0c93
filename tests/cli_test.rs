//! Integration tests for the mongocheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn mongocheck() -> Command {
    let mut cmd = Command::new(cargo_bin("mongocheck"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = mongocheck();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ready to talk to MongoDB"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = mongocheck();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = mongocheck();
    cmd.arg("--uri");
    cmd.assert().failure().code(2);
    Ok(())
}

#[cfg(feature = "mongodb")]
#[test]
fn cli_no_args_runs_every_check_and_finishes() -> Result<(), Box<dyn std::error::Error>> {
    // Passes whether or not a server is listening on localhost:27017; the
    // connection result is reported, never fatal.
    let mut cmd = mongocheck();
    cmd.timeout(Duration::from_secs(30));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("MongoDB Systemcheck"))
        .stdout(predicate::str::contains(
            "MongoDB driver (mongodb) is installed and ready.",
        ))
        .stdout(predicate::str::contains("Database Connection Test"))
        .stdout(predicate::str::ends_with("── Finished ──\n"));
    Ok(())
}

#[cfg(all(feature = "mongodb", unix))]
#[test]
fn cli_reports_binary_check_on_posix() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = mongocheck();
    cmd.timeout(Duration::from_secs(30));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("MongoDB Server Binary (mongod)"));
    Ok(())
}

#[cfg(feature = "mongodb")]
#[test]
fn cli_keeps_logs_off_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = mongocheck();
    cmd.arg("--debug");
    cmd.timeout(Duration::from_secs(30));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
    Ok(())
}

#[cfg(not(feature = "mongodb"))]
#[test]
fn cli_without_driver_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = mongocheck();
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("MongoDB driver (mongodb) NOT found."))
        .stdout(predicate::str::contains("--features mongodb"))
        .stdout(predicate::str::contains("Finished").not())
        .stdout(predicate::str::contains("Database Connection Test").not());
    Ok(())
}
