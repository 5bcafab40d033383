use predicates::prelude::*;

use crate::common::{SAMPLE, bin, json_of, write_fixture};

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("text_count"))
        .stdout(predicate::str::contains("--normalize"));
}

#[test]
fn counts_a_file_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(dir.path(), "neko.txt", SAMPLE);

    let out = bin().args(["--format", "json"]).arg(&file).assert().success().get_output().stdout.clone();
    let json = json_of(&out);
    let result = &json["result"];

    assert_eq!(result["totalCharacters"], 17);
    assert_eq!(result["totalCharactersNoNewlines"], 16);
    assert_eq!(result["lines"], 2);
    assert_eq!(result["manuscriptPages"], 0.04);
    assert_eq!(result["bytes"]["utf16le"], 34);
    assert_eq!(result["bytes"]["shiftJis"], 33);
    assert!(json.get("topCharacters").is_none());
}

#[test]
fn reads_stdin_when_no_file_is_given() {
    let out = bin()
        .args(["--format", "json", "--no-newlines"])
        .write_stdin("a b\nc")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(json_of(&out)["result"]["totalCharacters"], 4);

    bin().args(["--format", "json", "-"]).write_stdin("").assert().success().stdout(predicate::str::contains(
        "\"totalCharacters\": 0",
    ));
}

#[test]
fn table_lists_top_characters() {
    bin()
        .args(["--top", "1"])
        .write_stdin("ねねこ")
        .assert()
        .success()
        .stdout(predicate::str::contains("総文字数\t3 文字"))
        .stdout(predicate::str::contains("1. ね\t2"));
}

#[test]
fn report_goes_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("out/report.txt");

    bin()
        .args(["--format", "report", "--output"])
        .arg(&report)
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&report).unwrap();
    assert!(written.starts_with("文字数カウント結果"));
    assert!(written.contains("  Shift_JIS: 33 bytes"));
    assert!(written.contains("計測日時: "));
}

#[test]
fn rejects_unknown_normalization() {
    bin().args(["--normalize", "nfd"]).write_stdin("x").assert().failure().stderr(predicate::str::contains("nfd"));
}

#[test]
fn missing_file_fails_with_its_path() {
    bin().arg("definitely-missing.txt").assert().failure().stderr(predicate::str::contains("definitely-missing.txt"));
}

#[test]
fn rejects_input_over_ten_mebibytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "huge.txt", &"a".repeat(10 * 1024 * 1024 + 1));

    bin()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("huge.txt").and(predicate::str::contains("limit")));
}

#[test]
fn stdin_cannot_be_watched() {
    bin()
        .args(["--watch", "-"])
        .write_stdin("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--watch"));
}
