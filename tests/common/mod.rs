use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub const SAMPLE: &str = "吾輩は猫である。\n名前はまだ無い。";

pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_text_count"));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

pub fn json_of(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout is JSON")
}
