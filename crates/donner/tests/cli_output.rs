//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const CONFIG: &str = r#"
strategies:
  run:
    handler: docker_compose_run
    service: app
    remove: true
  run_with_docker:
    handler: docker_run
    image: alpine:latest

default_strategy: run

commands:
  ls: run_with_docker
  bundle: run
"#;

fn project_dir(config: Option<&str>) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    if let Some(config) = config {
        fs::write(dir.path().join(".donner.yml"), config).expect("Failed to write config");
    }
    dir
}

/// Execute donner in `dir` with a clean logging environment
fn run_donner(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_donner"))
        .current_dir(dir)
        .env_remove("DONNER_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute donner")
}

// =============================================================================
// aliases
// =============================================================================

#[test]
fn test_aliases_prints_one_alias_per_command() {
    let dir = project_dir(Some(CONFIG));
    let output = run_donner(dir.path(), &["aliases", "--strict"]);

    assert!(
        output.status.success(),
        "donner aliases failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("alias bundle='donner run --strict bundle';"));
    assert!(stdout.contains("alias ls='donner run --strict ls';"));
    assert!(stdout.contains("#  eval $(donner aliases --strict)"));
}

#[test]
fn test_default_mode_suppresses_info_logs() {
    let dir = project_dir(Some(CONFIG));
    let output = run_donner(dir.path(), &["aliases"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    for line in stdout.lines() {
        assert!(
            !line.trim().starts_with('{'),
            "stdout contains JSON line: {}",
            line
        );
    }
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
}

#[test]
fn test_verbose_flag_emits_json_logs() {
    let dir = project_dir(Some(CONFIG));
    let output = run_donner(dir.path(), &["-v", "aliases"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let events: Vec<String> = stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|log| log["fields"]["event"].as_str().map(str::to_string))
        .collect();

    assert!(
        events.iter().any(|e| e == "core.config.build_completed"),
        "expected config build event, got: {:?}",
        events
    );
    assert!(
        events.iter().any(|e| e == "cli.aliases_completed"),
        "expected aliases event, got: {:?}",
        events
    );
}

#[test]
fn test_rust_log_overrides_quiet_default() {
    let dir = project_dir(Some(CONFIG));
    let output = Command::new(env!("CARGO_BIN_EXE_donner"))
        .current_dir(dir.path())
        .env_remove("DONNER_CONFIG")
        .env("RUST_LOG", "donner_core=debug")
        .args(["aliases"])
        .output()
        .expect("Failed to execute donner");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let events: Vec<String> = stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|log| log["fields"]["event"].as_str().map(str::to_string))
        .collect();

    assert!(
        events.iter().any(|e| e == "core.config.strategy_built"),
        "RUST_LOG should enable core debug events, got: {:?}",
        events
    );
    assert!(
        !events.iter().any(|e| e == "cli.aliases_completed"),
        "cli events should stay quiet, got: {:?}",
        events
    );
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn test_missing_config_fails() {
    let dir = project_dir(None);
    let output = run_donner(dir.path(), &["aliases"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No config file found"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_invalid_config_names_the_strategy() {
    let dir = project_dir(Some(
        r#"
strategies:
  exec:
    handler: docker_compose_exec
    service: app
    image: alpine
commands:
  rake: exec
"#,
    ));
    let output = run_donner(dir.path(), &["run", "rake"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Strategy 'exec': additional field(s) detected: image"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_config_env_override() {
    let dir = project_dir(None);
    let custom = dir.path().join("custom.yml");
    fs::write(&custom, CONFIG).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_donner"))
        .current_dir(dir.path())
        .env("DONNER_CONFIG", &custom)
        .env_remove("RUST_LOG")
        .args(["commands"])
        .output()
        .expect("Failed to execute donner");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ls"));
    assert!(stdout.contains("run_with_docker (docker_run)"));
    assert!(stdout.contains("default strategy: run"));
}

// =============================================================================
// run
// =============================================================================

#[test]
fn test_run_strict_rejects_unmapped_command() {
    let dir = project_dir(Some(CONFIG));
    let output = run_donner(dir.path(), &["run", "--strict", "rspec"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Command 'rspec' is not defined"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_run_fallback_missing_executable_exits_127() {
    let dir = project_dir(Some(CONFIG));
    let output = run_donner(
        dir.path(),
        &["run", "--fallback", "definitely-not-a-real-binary-donner"],
    );

    assert_eq!(output.status.code(), Some(127));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "unexpected stderr: {}", stderr);
}

#[cfg(unix)]
#[test]
fn test_run_fallback_propagates_exit_code() {
    let dir = project_dir(Some(CONFIG));
    let output = run_donner(dir.path(), &["run", "--fallback", "sh", "-c", "exit 7"]);

    assert_eq!(output.status.code(), Some(7));
}

#[cfg(unix)]
#[test]
fn test_run_fallback_attaches_stdout() {
    let dir = project_dir(Some(CONFIG));
    let output = run_donner(dir.path(), &["run", "-s", "-f", "echo", "hello", "-n"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello -n\n");
}
