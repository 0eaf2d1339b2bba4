#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate, not a public API surface

use assert_cmd::Command;
use predicates::prelude::*;

fn biblio() -> Command {
    Command::cargo_bin("biblio").unwrap()
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn demo_runs_the_full_tour() {
    biblio()
        .arg("demo")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Public library")
                .and(predicate::str::contains("Jouer au rugby pour les nuls"))
                .and(predicate::str::contains("Vingt mille lieues sous les mers"))
                .and(predicate::str::contains("Antoine Dupont"))
                .and(predicate::str::contains("Julia Roberts")),
        );
}

#[test]
fn demo_reports_every_rejection() {
    biblio()
        .arg("demo")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("already in catalogue")
                .and(predicate::str::contains("is already a member"))
                .and(predicate::str::contains("not in catalogue"))
                .and(predicate::str::contains("is not a member of the library"))
                .and(predicate::str::contains("already borrowed"))
                .and(predicate::str::contains("not currently borrowed")),
        );
}

#[test]
fn demo_never_trips_on_a_rejection() {
    biblio()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("unexpectedly accepted").not());
}

#[test]
fn demo_json_emits_final_snapshot() {
    let output = biblio()
        .args(["demo", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let start = stdout.find('{').expect("JSON object in output");
    let json: serde_json::Value = serde_json::from_str(&stdout[start..]).expect("valid JSON");

    assert_eq!(json["name"], "Public library");
    assert_eq!(json["catalogue"].as_array().unwrap().len(), 2);
    assert_eq!(json["members"].as_array().unwrap().len(), 2);
    // The tour ends with both books on loan to Julia.
    assert_eq!(json["loans"].as_array().unwrap().len(), 2);
    assert!(json["available"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// desk
// ---------------------------------------------------------------------------

#[test]
fn desk_scripted_session() {
    biblio()
        .arg("desk")
        .write_stdin(
            "add book Dune by Frank Herbert\n\
             add member Antoine Dupont\n\
             borrow Dune for Antoine Dupont\n\
             status\n\
             return Dune\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Added Dune (Frank Herbert) to the catalogue.")
                .and(predicate::str::contains("Antoine Dupont is now a member."))
                .and(predicate::str::contains(
                    "Dune (Frank Herbert) checked out to Antoine Dupont.",
                ))
                .and(predicate::str::contains("Public library status:"))
                .and(predicate::str::contains(
                    "Dune (Frank Herbert) returned by Antoine Dupont.",
                ))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn desk_sample_preloads_catalogue() {
    biblio()
        .args(["desk", "--sample"])
        .write_stdin("available Jouer au rugby pour les nuls\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Jouer au rugby pour les nuls (Louis BB) is available.",
        ));
}

#[test]
fn desk_error_keeps_the_session_alive() {
    biblio()
        .arg("desk")
        .write_stdin("dance wildly\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stderr(predicate::str::contains("unknown command: dance wildly"));
}

#[test]
fn desk_rejection_goes_to_stderr() {
    biblio()
        .args(["desk", "--sample"])
        .write_stdin("borrow Jouer au rugby pour les nuls for Simone Veil\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Simone Veil is not a member"));
}

#[test]
fn desk_ends_cleanly_on_eof() {
    biblio()
        .arg("desk")
        .write_stdin("status\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Public library status:"));
}
