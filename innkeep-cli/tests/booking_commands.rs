//! Integration tests for the one-shot `book`, `cancel`, `list` and `rooms`
//! commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_book_prints_id_and_summary() {
    let env = TestEnv::new();

    env.command()
        .args(["book", "--room", "102", "--name", "Ada Lovelace"])
        .args(["--email", "ada@example.com"])
        .args(["--check-in", "2024-01-01", "--check-out", "2024-01-04"])
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("Duration       : 3 night(s)"))
        .stderr(predicate::str::contains("Total cost     : $300.00"));

    let state = env.state();
    assert_eq!(state["next_reservation_id"], 2);
    assert_eq!(state["reservations"][0]["room_number"], 102);
}

#[test]
fn test_quiet_book_prints_only_id() {
    let env = TestEnv::new();
    env.command()
        .arg("--quiet")
        .args(["book", "--room", "101", "--name", "Ada"])
        .args(["--email", "ada@example.com"])
        .args(["--check-in", "2024-03-01", "--check-out", "2024-03-02"])
        .assert()
        .success()
        .stdout("1\n")
        .stderr("");
}

#[test]
fn test_ids_increase_across_runs() {
    let env = TestEnv::new();
    assert_eq!(env.book(101, "2024-01-01", "2024-01-02"), 1);
    assert_eq!(env.book(102, "2024-01-01", "2024-01-02"), 2);

    env.command().args(["cancel", "2"]).assert().success();
    assert_eq!(env.book(103, "2024-01-01", "2024-01-02"), 3);
}

#[test]
fn test_double_booking_rejected() {
    let env = TestEnv::new();
    env.book(201, "2024-01-01", "2024-01-05");

    env.command()
        .args(["book", "--room", "201", "--name", "Bob"])
        .args(["--email", "bob@example.com"])
        .args(["--check-in", "2024-02-01", "--check-out", "2024-02-03"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("room 201 is already reserved"));

    assert_eq!(env.list_json().len(), 1);
}

#[test]
fn test_cancel_frees_room() {
    let env = TestEnv::new();
    let id = env.book(301, "2024-01-01", "2024-01-02");

    env.command()
        .args(["cancel", &format!("#{id}")])
        .assert()
        .success()
        .stderr(predicate::str::contains("cancelled successfully"));

    assert!(env.list_json().is_empty());
    let state = env.state();
    let room = state["rooms"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["number"] == 301)
        .unwrap();
    assert_eq!(room["reserved"], false);

    env.book(301, "2024-01-03", "2024-01-04");
}

#[test]
fn test_list_formats() {
    let env = TestEnv::new();
    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No reservations found."));

    env.book(202, "2024-05-01", "2024-05-03");

    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Room: 202 (Double"))
        .stdout(predicate::str::contains("2024-05-01 to 2024-05-03 (2 night(s))"));

    let rows = env.list_json();
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["category"], "Double");
    assert_eq!(rows[0]["nights"], 2);

    env.command()
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,room,category,guest_name,guest_email,check_in,check_out,nights,created_at\n",
        ))
        .stdout(predicate::str::contains("1,202,Double,Ada Lovelace,ada@example.com,2024-05-01,2024-05-03,2,"));

    env.command()
        .args(["list", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t202\tDouble"));
}

#[test]
fn test_rooms_filters() {
    let env = TestEnv::new();
    env.book(201, "2024-01-01", "2024-01-02");

    env.command()
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("Room 201 | Type: Suite    | Price: $280.00/night | reserved"))
        .stdout(predicate::str::contains("Room 301"));

    env.command()
        .args(["rooms", "--available", "--category", "SUITE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Room 301"))
        .stdout(predicate::str::contains("Room 201").not())
        .stdout(predicate::str::contains("Room 101").not());

    let output = env
        .command()
        .args(["rooms", "--available", "--format", "json"])
        .output()
        .unwrap();
    let rooms: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rooms.len(), 5);
    assert_eq!(rooms[0]["nightly_rate"], "80.00");
}

#[test]
fn test_rooms_empty_notice() {
    let env = TestEnv::new();
    env.book(201, "2024-01-01", "2024-01-02");
    env.book(301, "2024-01-01", "2024-01-02");

    env.command()
        .args(["rooms", "--available", "--category", "suite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No rooms match."));
}

#[test]
fn test_currency_symbol_from_config() {
    let env = TestEnv::new();
    env.write_config("currency_symbol: \"€\"\n");

    env.command()
        .args(["rooms", "--category", "single"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Price: €80.00/night"));
}

#[test]
fn test_data_file_flag() {
    let env = TestEnv::new();
    env.command()
        .args(["--data-file", "other.json"])
        .args(["book", "--room", "101", "--name", "Ada", "--email", "ada@example.com"])
        .args(["--check-in", "2024-01-01", "--check-out", "2024-01-02"])
        .assert()
        .success();

    assert!(env.data_dir.join("other.json").exists());
    assert!(!env.state_file().exists());
}
