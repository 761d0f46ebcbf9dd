#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

const DICE: [&str; 3] = ["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"];

fn fair_dice() -> Command {
    let mut cmd = Command::cargo_bin("fair-dice").unwrap();
    cmd.arg("--no-color").env_remove("RUST_LOG");
    cmd
}

#[test]
fn too_few_dice_is_rejected() {
    fair_dice()
        .args(["2,2,4,4,9,9", "1,1,6,6,8,8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "At least 3 dice configurations are required",
        ))
        .stderr(predicate::str::contains("Correct usage example"));
}

#[test]
fn wrong_face_count_is_rejected() {
    fair_dice()
        .args(["2,2,4,4,9", "1,1,6,6,8,8", "3,3,5,5,7,7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 6 faces"));
}

#[test]
fn non_integer_face_is_rejected() {
    fair_dice()
        .args(["2,2,4,4,9,a", "1,1,6,6,8,8", "3,3,5,5,7,7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be an integer"));
}

#[test]
fn negative_face_is_rejected() {
    fair_dice()
        .args(["--", "-2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn commitment_is_shown_before_exit() {
    fair_dice()
        .args(DICE)
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("PHASE 1: WHO GOES FIRST?"))
        .stdout(predicate::str::is_match("HMAC: [0-9A-F]{64}").unwrap())
        .stdout(predicate::str::contains("Exiting game..."));
}

#[test]
fn help_shows_probabilities() {
    fair_dice()
        .args(DICE)
        .write_stdin("?\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("GAME HELP START"))
        .stdout(predicate::str::contains("55.6%"))
        .stdout(predicate::str::contains("non-transitive"));
}

#[test]
fn full_round_reveals_keys() {
    fair_dice()
        .args(DICE)
        .write_stdin("0\n1\n2\n0\n0\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("PHASE 4: ROUND RESULT"))
        .stdout(predicate::str::is_match("Verification Key: [0-9A-F]{64}").unwrap());
}

#[test]
fn no_color_env_disables_color() {
    Command::cargo_bin("fair-dice")
        .unwrap()
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .args(DICE)
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("HMAC: "))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn empty_no_color_env_is_accepted() {
    Command::cargo_bin("fair-dice")
        .unwrap()
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "")
        .args(DICE)
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting game..."));
}
