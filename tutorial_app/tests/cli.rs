//! Runs the `tutorial` binary on paths that fail before any window is opened

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

#[cfg(feature = "use-adder")]
const SUM_LINE: &str = "Sum (adder): 8.07";
#[cfg(not(feature = "use-adder"))]
const SUM_LINE: &str = "Sum (inline): 8.07";

const BIN: &str = env!("CARGO_BIN_EXE_tutorial");

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tutorial_cli_{}_{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

fn run_with_config(path: &Path) -> Output {
    Command::new(BIN)
        .env("TUTORIAL_CONFIG", path)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to spawn tutorial binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn expected_stdout() -> Vec<String> {
    vec![
        "Hello World!".to_string(),
        SUM_LINE.to_string(),
        format!(
            "{BIN} Version {}.{}",
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR")
        ),
    ]
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let path = scratch_file("zero.toml", "[window]\nwidth = 0\n");
    let output = run_with_config(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output), expected_stdout());

    let stderr = stderr_lines(&output);
    assert_eq!(stderr.len(), 1, "stderr: {stderr:?}");
    assert!(stderr[0].starts_with("Invalid configuration"), "stderr: {stderr:?}");
}

#[test]
fn test_unsupported_config_format_reported_once() {
    let path = scratch_file("settings.json", "{}");
    let output = run_with_config(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(!output.status.success());
    assert_eq!(stdout_lines(&output), expected_stdout());

    let stderr = stderr_lines(&output);
    assert_eq!(stderr.len(), 1, "stderr: {stderr:?}");
    assert!(stderr[0].starts_with("Unsupported format"), "stderr: {stderr:?}");
}
