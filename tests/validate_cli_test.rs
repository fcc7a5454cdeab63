mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::entries_file;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_submission_within_tolerance() {
    let file = entries_file(&["card,80,A", "local transfer,2000.45,B"]);

    let mut cmd = Command::new(cargo_bin!("payrecon"));
    cmd.arg("validate")
        .arg(file.path())
        .args(["--billed", "120", "--rate", "50"])
        .args(["--local-method", "local transfer"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("valid,120.01"));
}

#[test]
fn test_overpaid_submission_is_rejected() {
    let file = entries_file(&["card,\"100,02\",A"]);

    let mut cmd = Command::new(cargo_bin!("payrecon"));
    cmd.arg("validate")
        .arg(file.path())
        .args(["--billed", "100"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exceeds billed total"))
        .stderr(predicate::str::contains("0.02"));
}

#[test]
fn test_submission_without_rate_ignores_local_payments() {
    let file = entries_file(&["local transfer,9999,A", "card,5,B"]);

    let mut cmd = Command::new(cargo_bin!("payrecon"));
    cmd.arg("validate")
        .arg(file.path())
        .args(["--billed", "10"])
        .args(["--config", "tests/fixtures/methods.toml"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("valid,5.00"));
}

#[test]
fn test_unparseable_billed_total_fails() {
    let file = entries_file(&["card,5,B"]);

    let mut cmd = Command::new(cargo_bin!("payrecon"));
    cmd.arg("validate").arg(file.path()).args(["--billed", "ten"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse billed total"));
}

#[test]
fn test_unreadable_rate_is_reported() {
    let file = entries_file(&["local transfer,500,A", "card,5,B"]);

    let mut cmd = Command::new(cargo_bin!("payrecon"));
    cmd.arg("validate")
        .arg(file.path())
        .args(["--billed", "10", "--rate", "n/a"])
        .args(["--local-method", "local transfer"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("unreadable exchange rate"))
        .stdout(predicate::str::contains("valid,5.00"));
}
