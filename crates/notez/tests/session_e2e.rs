#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn notez_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("notez"));
    cmd.env("NOTEZ_CONFIG_DIR", config_dir.as_os_str());
    cmd
}

#[test]
fn test_add_then_list_shows_the_note() {
    let temp = TempDir::new().unwrap();

    notez_cmd(temp.path())
        .write_stdin("add\nGroceries\nmilk\neggs\n.\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added: Groceries"))
        .stdout(predicate::str::contains("1. Groceries"));
}

#[test]
fn test_add_rejects_blank_fields() {
    let temp = TempDir::new().unwrap();

    // Empty name line, content closed immediately with the terminator.
    notez_cmd(temp.path())
        .write_stdin("add\n\n.\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A note needs both a name and some content.",
        ))
        .stdout(predicate::str::contains("No notes."));
}

#[test]
fn test_edit_blank_fields_keep_current_values() {
    let temp = TempDir::new().unwrap();

    // First edit: blank name keeps "A", the body is replaced.
    // Second edit: new name, content closed immediately keeps "newbody".
    let script = "add\nA\nx\n.\n\
                  edit 1\n\nnewbody\n.\n\
                  edit 1\nB\n.\n\
                  quit\n";

    notez_cmd(temp.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated (1): A"))
        .stdout(predicate::str::contains("1. A newbody"))
        .stdout(predicate::str::contains("Note updated (1): B"))
        .stdout(predicate::str::contains("1. B newbody"));
}

#[test]
fn test_search_keeps_unfiltered_positions() {
    let temp = TempDir::new().unwrap();

    // Two notes; only the second matches, and it must keep position 2.
    let script = "add\nAlpha\nplain text\n.\n\
                  add\nBeta\ncontains needle here\n.\n\
                  search needle\nquit\n";

    notez_cmd(temp.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: needle"))
        .stdout(predicate::str::contains("2. Beta"));
}

#[test]
fn test_save_writes_a_plain_json_array() {
    let temp = TempDir::new().unwrap();
    let notes_file = temp.path().join("notes.json");

    let script = format!(
        "add\nGroceries\nmilk\n.\nsave {}\nquit\n",
        notes_file.display()
    );

    notez_cmd(temp.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes saved to"));

    let saved = fs::read_to_string(&notes_file).unwrap();
    assert!(saved.trim_start().starts_with('['));
    assert!(saved.contains("\"name\": \"Groceries\""));
    assert!(saved.contains("\"content\": \"milk\""));
}

#[test]
fn test_load_replaces_the_session_notes() {
    let temp = TempDir::new().unwrap();
    let notes_file = temp.path().join("notes.json");
    fs::write(
        &notes_file,
        r#"[{"name": "From disk", "content": "a"}, {"name": "Also disk", "content": "b"}]"#,
    )
    .unwrap();

    let script = format!("add\nEphemeral\nx\n.\nload {}\nlist\nquit\n", notes_file.display());

    notez_cmd(temp.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 notes from"))
        .stdout(predicate::str::contains("1. From disk"))
        .stdout(predicate::str::contains("2. Also disk"));
}

#[test]
fn test_load_malformed_file_reports_invalid_format() {
    let temp = TempDir::new().unwrap();
    let bad_file = temp.path().join("bad.json");
    fs::write(&bad_file, "{ this is not json").unwrap();

    let script = format!("add\nKeeper\nstays\n.\nload {}\nlist\nquit\n", bad_file.display());

    notez_cmd(temp.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid file format"))
        .stdout(predicate::str::contains("1. Keeper"));
}

#[test]
fn test_load_missing_file_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.json");

    let script = format!("load {}\nquit\n", missing.display());

    notez_cmd(temp.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found"));
}

#[test]
fn test_out_of_range_delete_is_ignored_by_default() {
    let temp = TempDir::new().unwrap();

    notez_cmd(temp.path())
        .write_stdin("add\nOnly\none\n.\ndelete 5\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No note at position 5"))
        .stdout(predicate::str::contains("1. Only"));
}

#[test]
fn test_strict_flag_errors_on_out_of_range_positions() {
    let temp = TempDir::new().unwrap();

    // The error is printed and the session keeps running.
    notez_cmd(temp.path())
        .arg("--strict")
        .write_stdin("delete 5\nadd\nAfter\nstill works\n.\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No note at position 5"))
        .stdout(predicate::str::contains("Note added: After"));
}

#[test]
fn test_file_flag_loads_before_the_first_prompt() {
    let temp = TempDir::new().unwrap();
    let notes_file = temp.path().join("notes.json");
    fs::write(&notes_file, r#"[{"name": "Startup", "content": "here"}]"#).unwrap();

    notez_cmd(temp.path())
        .args(["--file", notes_file.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 notes from"))
        .stdout(predicate::str::contains("1. Startup"));
}

#[test]
fn test_config_set_persists_and_save_uses_the_default_file() {
    let temp = TempDir::new().unwrap();
    let notes_file = temp.path().join("default.json");

    // Set default_file, then save without a path.
    let script = format!(
        "config default_file {}\nconfig\nadd\nVia default\ncontent\n.\nsave\nquit\n",
        notes_file.display()
    );

    notez_cmd(temp.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("default_file set to"))
        .stdout(predicate::str::contains("strict_indexes = false"))
        .stdout(predicate::str::contains("Notes saved to"));

    // The key survived to disk and the bare save went to the default file.
    let config = fs::read_to_string(temp.path().join("config.json")).unwrap();
    assert!(config.contains("default_file"));
    assert!(fs::read_to_string(&notes_file)
        .unwrap()
        .contains("Via default"));
}

#[test]
fn test_unknown_commands_print_usage_and_continue() {
    let temp = TempDir::new().unwrap();

    notez_cmd(temp.path())
        .write_stdin("frobnicate\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();

    notez_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("notez"));
}
