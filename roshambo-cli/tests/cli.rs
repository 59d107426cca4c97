use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "roshambo-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn roshambo() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roshambo"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_prints_outcome_for_valid_pair() {
    let output = roshambo()
        .args(["rock", "scissors"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "win\n");
}

#[test]
fn cli_accepts_mixed_case() {
    let output = roshambo()
        .args(["Paper", "ROCK"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "win\n");
}

#[test]
fn cli_rejects_unknown_choice_with_exit_two() {
    let output = roshambo()
        .args(["lizard", "rock"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lizard"));
    assert!(stderr.contains("rock, paper, scissors"));
}

#[test]
fn cli_missing_arguments_is_usage_error() {
    let output = roshambo().output().expect("run cli");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_table_lists_nine_rows() {
    let output = roshambo().arg("--table").output().expect("run cli");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 9);
}

#[test]
fn cli_series_from_config_file() {
    let config_path = temp_path("config");
    std::fs::write(&config_path, r#"{"rounds": 6, "seed": 31}"#).expect("write config");
    let output = roshambo()
        .args(["scissors", "--format", "json", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["rounds"].as_array().map(Vec::len), Some(6));
    assert!(value["verdict"].is_string());
    std::fs::remove_file(&config_path).expect("remove config");
}

#[test]
fn cli_invalid_config_fails_with_general_error() {
    let config_path = temp_path("bad-config");
    std::fs::write(&config_path, r#"{"rounds": 0}"#).expect("write config");
    let output = roshambo()
        .args(["rock", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("rounds must be between"));
    std::fs::remove_file(&config_path).expect("remove config");
}

#[test]
fn cli_unreadable_config_fails_even_with_both_choices() {
    let output = roshambo()
        .args(["rock", "paper", "--seed", "5", "--config"])
        .arg(temp_path("missing-config"))
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn cli_seed_with_both_choices_warns_and_resolves() {
    let output = roshambo()
        .args(["rock", "paper", "--seed", "5"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "lose\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("series options ignored"));
}

#[test]
fn cli_json_round_has_lowercase_tags() {
    let output = roshambo()
        .args(["paper", "rock", "--format", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let round: roshambo_game::Round =
        serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(round.outcome, roshambo_game::Outcome::Win);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["first"], "paper");
    assert_eq!(value["second"], "rock");
    assert_eq!(value["outcome"], "win");
}
