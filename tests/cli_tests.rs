//! End-to-end tests of the clean-env binary: exit codes, report output,
//! and the interactive confirmation on stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clean_env(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clean-env").unwrap();
    cmd.arg(temp.path()).args(["--log", "off"]);
    cmd
}

#[test]
fn clean_environment_exits_zero_without_prompting() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".clean-env.yaml"),
        "required: [CLEAN_ENV_TEST_PRESENT]\nexcluded: [CLEAN_ENV_TEST_SECRET]\n",
    )
    .unwrap();

    // stdin is closed; if the binary prompted anyway, the EOF answer would
    // decline and the exit code would be 1.
    clean_env(&temp)
        .env("CLEAN_ENV_TEST_PRESENT", "1")
        .env_remove("CLEAN_ENV_TEST_SECRET")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_required_prompts_and_accepts_yes() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".clean-env.yaml"),
        "required: [CLEAN_ENV_TEST_MISSING]\n",
    )
    .unwrap();

    clean_env(&temp)
        .env_remove("CLEAN_ENV_TEST_MISSING")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CLEAN_ENV_TEST_MISSING"));
}

#[test]
fn missing_required_declined_exits_one() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".clean-env.yaml"),
        "required: [CLEAN_ENV_TEST_MISSING]\n",
    )
    .unwrap();

    clean_env(&temp)
        .env_remove("CLEAN_ENV_TEST_MISSING")
        .write_stdin("no\n")
        .assert()
        .code(1);
}

#[test]
fn answer_is_trimmed_before_comparison() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".clean-env.yaml"),
        "required: [CLEAN_ENV_TEST_MISSING]\n",
    )
    .unwrap();

    clean_env(&temp)
        .env_remove("CLEAN_ENV_TEST_MISSING")
        .write_stdin("  yes  \n")
        .assert()
        .success();
}

#[test]
fn answer_comparison_is_case_sensitive() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".clean-env.yaml"),
        "required: [CLEAN_ENV_TEST_MISSING]\n",
    )
    .unwrap();

    clean_env(&temp)
        .env_remove("CLEAN_ENV_TEST_MISSING")
        .write_stdin("YES\n")
        .assert()
        .code(1);
}

#[test]
fn found_excluded_is_reported_with_value() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".clean-env.yaml"),
        "excluded: [CLEAN_ENV_TEST_SECRET]\n",
    )
    .unwrap();

    clean_env(&temp)
        .env("CLEAN_ENV_TEST_SECRET", "hunter2")
        .write_stdin("no\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("hunter2"));
}

#[test]
fn custom_affirmative_string_is_honored() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".clean-env.json"),
        r#"{"required": ["CLEAN_ENV_TEST_MISSING"], "translations": {"yes": "ship it"}}"#,
    )
    .unwrap();

    clean_env(&temp)
        .env_remove("CLEAN_ENV_TEST_MISSING")
        .write_stdin("ship it\n")
        .assert()
        .success();

    clean_env(&temp)
        .env_remove("CLEAN_ENV_TEST_MISSING")
        .write_stdin("yes\n")
        .assert()
        .code(1);
}

#[test]
fn dotenv_file_satisfies_required_variables() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".clean-env.yaml"),
        "required: [CLEAN_ENV_TEST_FROM_DOTENV]\n",
    )
    .unwrap();
    std::fs::write(temp.path().join(".env"), "CLEAN_ENV_TEST_FROM_DOTENV=1\n").unwrap();

    clean_env(&temp)
        .env_remove("CLEAN_ENV_TEST_FROM_DOTENV")
        .assert()
        .success();
}

#[test]
fn dotenv_false_skips_the_env_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".clean-env.yaml"),
        "required: [CLEAN_ENV_TEST_FROM_DOTENV]\ndotenv: false\n",
    )
    .unwrap();
    std::fs::write(temp.path().join(".env"), "CLEAN_ENV_TEST_FROM_DOTENV=1\n").unwrap();

    clean_env(&temp)
        .env_remove("CLEAN_ENV_TEST_FROM_DOTENV")
        .write_stdin("no\n")
        .assert()
        .code(1);
}

#[test]
fn malformed_config_aborts_with_the_file_path() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".clean-env.json"), "{ not json").unwrap();

    clean_env(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".clean-env.json"));
}
