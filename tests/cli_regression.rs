// Regression test: Ensure CLI errors are rendered with miette diagnostics
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_reports_diagnostic_when_questions_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("avalia").unwrap();
    cmd.arg("--questions")
        .arg(dir.path().join("missing.txt"))
        .arg("questions");
    cmd.assert()
        .failure()
        .stderr(contains("avalia::questions::not_found"));
}

#[test]
fn cli_records_a_submission_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let questions = dir.path().join("perguntas.txt");
    let payload = dir.path().join("submission.json");
    let log = dir.path().join("respostas.txt");

    fs::write(
        &questions,
        "1. Nome do curso?\n2. [MULTIPLA_ESCOLHA] Aprovado?\na) Sim\nb) Não\n",
    )
    .unwrap();
    fs::write(&payload, r#"{"nome": "Ana", "respostas": ["Rust", "0"]}"#).unwrap();

    let mut cmd = Command::cargo_bin("avalia").unwrap();
    cmd.arg("--questions")
        .arg(&questions)
        .arg("--log")
        .arg(&log)
        .arg("record")
        .arg(&payload);
    cmd.assert()
        .success()
        .stdout(contains("Resposta registrada: Ana"));

    let recorded = fs::read_to_string(&log).unwrap();
    assert!(recorded.contains("NOME: Ana"));
    assert!(recorded.contains("RESPOSTA: a) Sim"));
}

#[test]
fn cli_rejects_submission_missing_required_field() {
    let dir = tempfile::tempdir().unwrap();
    let questions = dir.path().join("perguntas.txt");
    let payload = dir.path().join("submission.json");
    let log = dir.path().join("respostas.txt");

    fs::write(&questions, "1. Pergunta?\n").unwrap();
    fs::write(&payload, r#"{"respostas": ["a"]}"#).unwrap();

    let mut cmd = Command::cargo_bin("avalia").unwrap();
    cmd.arg("--questions")
        .arg(&questions)
        .arg("--log")
        .arg(&log)
        .arg("record")
        .arg(&payload);
    cmd.assert()
        .failure()
        .stderr(contains("avalia::submission::invalid"));

    // Rejected before any write: the log must not exist.
    assert!(!log.exists());
}

#[test]
fn cli_config_command_succeeds_without_a_config_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("avalia").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("missing-config.txt"))
        .arg("config");
    cmd.assert()
        .success()
        .stdout(contains("BIGCARD").and(contains("0, 102, 204")));
}
