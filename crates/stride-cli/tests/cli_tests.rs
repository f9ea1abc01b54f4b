use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a test database
fn stride_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("stride").expect("Failed to find stride binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Fills the minimum a plan needs and jumps to the overview
fn prepare_plan(temp_dir: &TempDir, goal: &str) {
    stride_cmd(temp_dir)
        .args(["set", "--goal", goal, "--activity", "Running:km"])
        .assert()
        .success();
    stride_cmd(temp_dir)
        .args(["goto", "overview"])
        .assert()
        .success();
}

#[test]
fn test_cli_default_shows_first_step() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# create-plan: step 1 of 13"))
        .stdout(predicate::str::contains("## Goal"))
        .stdout(predicate::str::contains("- Goal: (not set)"));
}

#[test]
fn test_cli_complete_advances_and_persists() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["complete", "--goal", "Run a marathon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Completed 'goal'."))
        .stdout(predicate::str::contains("step 2 of 13"))
        .stdout(predicate::str::contains("## Emoji"));

    stride_cmd(&temp_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Goal: Run a marathon"))
        .stdout(predicate::str::contains("- Completed: goal"));
}

#[test]
fn test_cli_coaching_branch() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["goto", "coaching"])
        .assert()
        .success();

    stride_cmd(&temp_dir)
        .args(["complete", "coaching"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Visibility"));

    stride_cmd(&temp_dir)
        .args(["goto", "coaching"])
        .assert()
        .success();

    stride_cmd(&temp_dir)
        .args(["complete", "coaching", "--coached"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Coach"));
}

#[test]
fn test_cli_next_and_prev() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .arg("prev")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note: Already at the first step."));

    stride_cmd(&temp_dir)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Emoji"));

    stride_cmd(&temp_dir)
        .arg("prev")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Goal"));
}

#[test]
fn test_cli_goto_unknown_step_fails() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["goto", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown step 'nonexistent'"));

    stride_cmd(&temp_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1 of 13"));
}

#[test]
fn test_cli_steps_markers() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir).arg("complete").assert().success();

    stride_cmd(&temp_dir)
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ✓ Goal (`goal`)"))
        .stdout(predicate::str::contains("2. ➤ Emoji (`emoji`)"))
        .stdout(predicate::str::contains("13. ○ Overview (`overview`)"));
}

#[test]
fn test_cli_set_without_fields() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .arg("set")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note: Nothing to update."));
}

#[test]
fn test_cli_invalid_times_per_week() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["set", "--times-per-week", "12"])
        .assert()
        .failure();
}

#[test]
fn test_cli_save_without_activities_keeps_state() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["set", "--goal", "Half finished"])
        .assert()
        .success();

    stride_cmd(&temp_dir)
        .arg("save")
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least one activity is required"));

    stride_cmd(&temp_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Goal: Half finished"));
}

#[test]
fn test_cli_save_and_list_plans() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .arg("plans")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));

    prepare_plan(&temp_dir, "Run 5k");

    stride_cmd(&temp_dir)
        .arg("save")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("# 1. Run 5k"));

    stride_cmd(&temp_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1 of 13"))
        .stdout(predicate::str::contains("- Goal: (not set)"));

    stride_cmd(&temp_dir)
        .arg("plans")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Run 5k (ID: 1)"));

    stride_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Activities: Running (km)"));
}

#[test]
fn test_cli_edit_flow() {
    let temp_dir = create_cli_test_environment();
    prepare_plan(&temp_dir, "Old goal");
    stride_cmd(&temp_dir).arg("save").assert().success();

    stride_cmd(&temp_dir)
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Editing plan 1."))
        .stdout(predicate::str::contains("## Overview"))
        .stdout(predicate::str::contains("- Editing plan: 1"));

    stride_cmd(&temp_dir)
        .args(["section", "goal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Editing section: goal"));

    stride_cmd(&temp_dir)
        .args(["complete", "--goal", "New goal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Overview"));

    stride_cmd(&temp_dir)
        .arg("changes")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Changes to plan 1"))
        .stdout(predicate::str::contains("\"Old goal\" → \"New goal\""));

    stride_cmd(&temp_dir)
        .arg("save")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plan with ID: 1"));

    stride_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. New goal"));
}

#[test]
fn test_cli_edit_missing_plan() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["edit", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 42 not found"));
}

#[test]
fn test_cli_section_requires_edit_mode() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["section", "goal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot edit section 'goal'"));
}

#[test]
fn test_cli_changes_outside_edit_mode() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .arg("changes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not editing a plan."));
}

#[test]
fn test_cli_reset_and_events() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("No events recorded."));

    stride_cmd(&temp_dir).arg("complete").assert().success();
    stride_cmd(&temp_dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Wizard reset."));

    stride_cmd(&temp_dir)
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("`create-plan-goal-completed`"))
        .stdout(predicate::str::contains("`create-plan-reset`"));
}

#[test]
fn test_cli_keys_are_separate_runs() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["--key", "second-run", "set", "--goal", "Other run"])
        .assert()
        .success();

    stride_cmd(&temp_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Goal: (not set)"));

    stride_cmd(&temp_dir)
        .args(["--key", "second-run", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Goal: Other run"));
}
