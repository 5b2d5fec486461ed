#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command with its save file pointed into a temp directory and a fixed
/// seed, so runs are deterministic and never touch a real save.
fn hb(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hb").unwrap();
    cmd.arg("--save")
        .arg(dir.path().join("save.json"))
        .args(["--seed", "7"]);
    cmd
}

// ---------------------------------------------------------------------------
// startup and basic rendering
// ---------------------------------------------------------------------------

#[test]
fn starts_at_home() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Type 'help' to see a list of commands")
                .and(predicate::str::contains("You are at: Home"))
                .and(predicate::str::contains(
                    "Your house. You really need to clean up the place.",
                )),
        );
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Available commands")
                .and(predicate::str::contains("Equip <weapon name>"))
                .and(predicate::str::contains("Exit - Save the game and exit")),
        );
}

#[test]
fn stats_show_a_fresh_player() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("stats\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Current hit points: 10")
                .and(predicate::str::contains("Maximum hit points: 10"))
                .and(predicate::str::contains("Level: 1"))
                .and(predicate::str::contains("Gold: 0")),
        );
}

#[test]
fn inventory_lists_the_starter_sword() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("inventory\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rusty sword: 1"));
}

#[test]
fn fresh_player_has_no_quests() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("quests\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You do not have any quests"));
}

#[test]
fn map_hides_unvisited_locations() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("map\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Home (you)").and(predicate::str::contains("?")));
}

// ---------------------------------------------------------------------------
// movement
// ---------------------------------------------------------------------------

#[test]
fn moving_north_reaches_the_town_square() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("north\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are at: Town square")
                .and(predicate::str::contains(
                    "You see a vendor here: Bob the Rat-Catcher",
                )),
        );
}

#[test]
fn cannot_move_where_there_is_no_path() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("east\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You cannot move East"));
}

#[test]
fn guard_post_is_blocked_without_the_pass() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("north\neast\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You must have a Adventurer pass to enter this location.",
        ));
}

#[test]
fn a_monster_waits_in_the_garden() {
    let dir = TempDir::new().unwrap();
    // Home -> Town square -> Alchemist's hut -> Alchemist's garden.
    hb(&dir)
        .write_stdin("north\nnorth\nnorth\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are at: Alchemist's garden")
                .and(predicate::str::contains("You see a Rat")),
        );
}

// ---------------------------------------------------------------------------
// quests
// ---------------------------------------------------------------------------

#[test]
fn farmhouse_offers_the_field_quest() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("north\nwest\nquests\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You receive the Clear the farmer's field quest.")
                .and(predicate::str::contains("To complete it, return with:"))
                .and(predicate::str::contains("3 Snake fangs"))
                .and(predicate::str::contains("Clear the farmer's field: Incomplete")),
        );
}

// ---------------------------------------------------------------------------
// trade
// ---------------------------------------------------------------------------

#[test]
fn trade_shows_both_inventories() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("north\ntrade\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("PLAYER INVENTORY")
                .and(predicate::str::contains("VENDOR INVENTORY"))
                .and(predicate::str::contains("Pieces of fur")),
        );
}

#[test]
fn buying_without_gold_fails() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("north\nbuy piece of fur\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You do not have enough gold to buy a Piece of fur",
        ));
}

#[test]
fn selling_the_sword_pays_gold() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("north\nsell rusty sword\nstats\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You receive 5 gold for your Rusty sword")
                .and(predicate::str::contains("Gold: 5")),
        );
}

#[test]
fn trading_away_from_the_vendor_fails() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("buy piece of fur\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("There is no vendor at this location"));
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_command_suggests_help() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("dance\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("I do not understand 'dance'").and(
                predicate::str::contains("Type 'help' to see a list of available commands"),
            ),
        );
}

#[test]
fn equip_requires_a_weapon_name() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("equip\nequip banana\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You must enter the name of the weapon to equip")
                .and(predicate::str::contains("You do not have the weapon: banana")),
        );
}

// ---------------------------------------------------------------------------
// persistence
// ---------------------------------------------------------------------------

#[test]
fn exit_saves_and_a_second_run_resumes() {
    let dir = TempDir::new().unwrap();
    hb(&dir)
        .write_stdin("north\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your game has been saved"));
    assert!(dir.path().join("save.json").exists());

    hb(&dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are at: Town square"));
}

#[test]
fn a_malformed_save_starts_a_fresh_game() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("save.json"), "not json").unwrap();

    hb(&dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are at: Home"));
}
