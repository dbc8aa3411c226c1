#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};

pub const TEST_KEY: &str = "sk-or-integration";

pub struct KeyDir {
    pub dir: tempfile::TempDir,
    pub key_file: PathBuf,
}

pub fn key_dir() -> KeyDir {
    let dir = tempfile::tempdir().expect("failed to create temp directory");
    let key_file = dir.path().join("openrouter.key");
    fs::write(&key_file, format!("{TEST_KEY}\n")).expect("failed to write key file");
    KeyDir { dir, key_file }
}

pub fn command(args: &[&str], key_file: &Path, base_url: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ai-processor"));
    cmd.args(args)
        .env("OPENROUTER_KEY_FILE", key_file)
        .env("OPENROUTER_BASE_URL", base_url)
        .env_remove("MODEL_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .env_remove("LOG_OUTPUT")
        .env_remove("LOG_FORMAT")
        .env_remove("LOG_FILE_PATH")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

pub fn spawn(mut cmd: Command) -> Child {
    cmd.spawn().expect("failed to run ai-processor binary")
}

pub fn run_with_input(cmd: Command, input: &str) -> Output {
    let mut child = spawn(cmd);
    if let Some(mut stdin) = child.stdin.take() {
        // The binary may exit before reading; a broken pipe is fine here.
        let _ = stdin.write_all(input.as_bytes());
    }
    child
        .wait_with_output()
        .expect("failed to collect ai-processor output")
}
