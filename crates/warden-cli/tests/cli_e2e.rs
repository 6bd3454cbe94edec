//! End-to-end CLI contract tests: output shapes and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

const NET: &str = "NET:https://example.com";
const WRITE: &str = "FILE_WRITE:/tmp/demo.txt";

fn warden() -> Command {
    Command::cargo_bin("warden").expect("warden binary builds")
}

fn mint_token(scope: &str, ttl: &str) -> String {
    let output = warden()
        .args(["mint", "--scope", scope, "--ttl", ttl, "--nonce", "e2e"])
        .output()
        .expect("mint runs");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("mint prints utf-8 json")
}

#[test]
fn mint_prints_a_six_field_json_object() {
    let token = mint_token(NET, "60");
    let value: serde_json::Value = serde_json::from_str(token.trim()).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 6);
    assert_eq!(obj["nonce"], "e2e");
    assert_eq!(obj["scope"], serde_json::json!([NET]));
}

#[test]
fn minted_token_verifies_ok() {
    let token = mint_token(NET, "60");
    warden()
        .args(["verify", "--token", token.trim()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""ok":true"#))
        .stdout(predicate::str::contains("signature valid"));
}

#[test]
fn verify_under_wrong_secret_reports_bad_signature() {
    let token = mint_token(NET, "60");
    warden()
        .args(["verify", "--token", token.trim(), "--secret", "other"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""ok":false"#))
        .stdout(predicate::str::contains("bad signature"));
}

#[test]
fn act_without_token_denies_with_exit_code_one() {
    warden()
        .args(["act", "--action", NET])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("DENY"))
        .stdout(predicate::str::contains("no lease provided (deny-by-default)"));
}

#[test]
fn act_with_valid_token_allows_and_simulates() {
    let token = mint_token(NET, "60");
    warden()
        .args(["act", "--action", NET, "--token", token.trim()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALLOW"))
        .stdout(predicate::str::contains("SIMULATED_EXECUTION"));
}

#[test]
fn act_out_of_scope_denies() {
    let token = mint_token(NET, "60");
    warden()
        .args(["act", "--action", WRITE, "--token", token.trim()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("scope does not allow action"));
}

#[test]
fn real_execution_flag_trips_fatally() {
    let token = mint_token(NET, "60");
    warden()
        .args(["act", "--action", NET, "--token", token.trim()])
        .env("WARDEN_ALLOW_REAL_EXECUTION", "1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("tripwire"));
}

#[test]
fn malformed_token_is_a_fatal_error_not_a_decision() {
    warden()
        .args(["act", "--action", NET, "--token", "{not json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid JSON token"));
    warden()
        .args(["verify", "--token", "[1,2,3]"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("token must be a JSON object"));
}

#[test]
fn memory_ingest_routes_flagged_and_clean_events() {
    warden()
        .args(["memory-ingest", "--event", "note contains SECRET: 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quarantined"));
    warden()
        .args(["memory-ingest", "--event", "user prefers tabs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("accepted event into policy memory"));
}

#[test]
fn scenario_transcript_covers_every_denial_cause() {
    warden()
        .arg("run-scenario")
        .assert()
        .success()
        .stdout(predicate::str::contains("no lease provided (deny-by-default)"))
        .stdout(predicate::str::contains("scope does not allow action"))
        .stdout(predicate::str::contains("lease epoch revoked by global bump"))
        .stdout(predicate::str::contains("lease nonce revoked"))
        .stdout(predicate::str::contains("MEMORY quarantined flagged event"))
        .stdout(predicate::str::contains("MEMORY_COUNTS policy=0 quarantine=1"));
}
