//! Integration tests: commands that never reach the model.

use std::process::{Command, Output};

fn starboard(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_starboard");
    Command::new(bin)
        .args(args)
        .env_remove("GEMINI_API_KEY")
        .env("NO_COLOR", "1")
        .output()
        .expect("run starboard")
}

#[test]
fn fallback_prints_placeholder_for_unrelated_query() {
    let out = starboard(&["--output", "json", "fallback", "xyz completely unrelated text"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let envelope: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(envelope["level"], "data");
    assert_eq!(envelope["data"]["total_found"], 1);
    assert_eq!(envelope["data"]["source"], "fallback");
    assert_eq!(envelope["data"]["suggestions"][0]["name"], "Global Celebrity");
}

#[test]
fn empty_description_is_rejected() {
    let out = starboard(&["fallback", "   "]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("must not be empty"),
        "stderr should explain the validation failure; got: {}",
        stderr
    );
}

#[test]
fn prompt_embeds_description() {
    let out = starboard(&["prompt", "British rock band"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\"British rock band\""));
    assert!(stdout.contains("query_interpretation"));
}

#[test]
fn normalize_reads_reply_file() {
    let dir = tempfile::tempdir().unwrap();
    let reply = dir.path().join("reply.txt");
    std::fs::write(
        &reply,
        "```json\n{\"suggestions\":[{\"name\":\"X\",\"confidence_score\":4}]}\n```",
    )
    .unwrap();

    let out = starboard(&[
        "--output",
        "json",
        "normalize",
        "anything",
        "--file",
        reply.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    let envelope: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&out.stdout).trim()).unwrap();
    let s = &envelope["data"]["suggestions"][0];
    assert_eq!(s["name"], "X");
    assert_eq!(s["confidence_score"], 1.0);
    assert_eq!(envelope["data"]["query_interpretation"], "Search for: anything");
}

#[test]
fn normalize_missing_file_fails() {
    let out = starboard(&["normalize", "anything", "--file", "/nonexistent/reply.txt"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to read reply"));
}
