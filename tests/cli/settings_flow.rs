use predicates::prelude::*;

use crate::common::{bin, json_of, write_fixture};

#[test]
fn saved_settings_apply_to_later_runs() {
    let state = tempfile::tempdir().unwrap();

    bin().arg("--state-dir").arg(state.path()).args(["--no-newlines", "--save"]).assert().success();

    let out = bin()
        .arg("--state-dir")
        .arg(state.path())
        .args(["--format", "json", "-"])
        .write_stdin("a\nb")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(json_of(&out)["result"]["totalCharacters"], 2);
}

#[test]
fn counted_text_is_autosaved_and_exported() {
    let state = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let bundle = work.path().join("bundle.json");

    bin().arg("--state-dir").arg(state.path()).arg("-").write_stdin("下書き").assert().success();
    bin().arg("--state-dir").arg(state.path()).arg("--export-settings").arg(&bundle).assert().success();

    let exported: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&bundle).unwrap()).unwrap();
    assert_eq!(exported["text"], "下書き");
    assert_eq!(exported["version"], "1.0.0");
    assert_eq!(exported["settings"]["includeNewlines"], true);
    assert!(exported["exportDate"].is_string());
}

#[test]
fn imported_bundle_restores_settings() {
    let state = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let bundle = write_fixture(
        work.path(),
        "bundle.json",
        r#"{"settings":{"excludeSpaces":true,"normalization":"NFKC"},"text":"","version":"1.0.0"}"#,
    );

    bin().arg("--state-dir").arg(state.path()).arg("--import-settings").arg(&bundle).assert().success();

    let out = bin()
        .arg("--state-dir")
        .arg(state.path())
        .args(["--format", "json", "-"])
        .write_stdin("ｶﾞ ｷﾞ")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let result = &json_of(&out)["result"];
    assert_eq!(result["totalCharacters"], 3);
    assert_eq!(result["charactersExcludingSpaces"], 2);
}

#[test]
fn malformed_bundle_is_rejected() {
    let work = tempfile::tempdir().unwrap();
    let bundle = write_fixture(work.path(), "bundle.json", "{not json");

    bin().arg("--import-settings").arg(&bundle).assert().failure().stderr(predicate::str::contains("import"));
}

#[test]
fn last_recounts_the_autosaved_text() {
    let state = tempfile::tempdir().unwrap();

    bin().arg("--state-dir").arg(state.path()).arg("-").write_stdin("下書き").assert().success();

    let out = bin()
        .arg("--state-dir")
        .arg(state.path())
        .args(["--last", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(json_of(&out)["result"]["totalCharacters"], 3);
}

#[test]
fn clear_forgets_settings_and_text() {
    let state = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let bundle = work.path().join("bundle.json");

    bin().arg("--state-dir").arg(state.path()).args(["--exclude-spaces", "--save"]).assert().success();
    bin().arg("--state-dir").arg(state.path()).arg("-").write_stdin("下書き").assert().success();
    bin().arg("--state-dir").arg(state.path()).arg("--clear").assert().success().stdout(predicate::str::is_empty());

    let out = bin()
        .arg("--state-dir")
        .arg(state.path())
        .args(["--last", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(json_of(&out)["result"]["totalCharacters"], 0);

    bin().arg("--state-dir").arg(state.path()).arg("--export-settings").arg(&bundle).assert().success();
    let exported: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&bundle).unwrap()).unwrap();
    assert_eq!(exported["text"], "");
    assert_eq!(exported["settings"]["excludeSpaces"], false);
}

#[test]
fn save_without_a_state_dir_is_rejected() {
    bin().arg("--save").assert().failure().stderr(predicate::str::contains("--state-dir"));
}
