//! Integration tests for the route-bundler binary.
//!
//! These tests run the compiled binary on the networks under `demos/` and
//! check the bundle document it writes.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_route-bundler"))
}

fn demos_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path
}

/// Run the binary with the given stdin input and extra CLI args.
fn run_raw(input: &str, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run the binary and parse its stdout as JSON.
fn run_json(input: &str, extra_args: &[&str]) -> Value {
    let output = run_raw(input, extra_args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn demo(name: &str) -> String {
    let path = demos_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Cannot read {:?}: {}", path, e))
}

fn len(v: &Value) -> usize {
    v.as_array().expect("expected array").len()
}

// ─── Demo network ────────────────────────────────────────────────────────────

#[test]
fn test_demo_counts() {
    let out = run_json(&demo("gulf_routes.json"), &[]);
    // 4 placed ports + 2 + 4 + 3 + 2 + 0 control points.
    assert_eq!(len(&out["nodes"]), 15);
    assert_eq!(len(&out["links"]), 16);
    assert_eq!(len(&out["paths"]), 5);
}

#[test]
fn test_demo_ports_ordered_by_outgoing() {
    let out = run_json(&demo("gulf_routes.json"), &[]);
    let keys: Vec<&str> = (0..4)
        .map(|i| out["nodes"][i]["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["AEJEA", "PKKHI", "OMSOH", "INNSA"]);
    assert_eq!(out["nodes"][0]["label"], "Jebel Ali in Dubai, AE");
    assert!(out["nodes"][4].get("key").is_none());
}

#[test]
fn test_demo_paths_start_and_end_on_anchors() {
    let out = run_json(&demo("gulf_routes.json"), &[]);
    let paths = out["paths"].as_array().unwrap();
    assert_eq!(paths[0], serde_json::json!([0, 4, 5, 2]));
    for path in paths {
        let first = path[0].as_u64().unwrap();
        let last = path[len(path) - 1].as_u64().unwrap();
        assert!(first < 4 && last < 4);
        let node = &out["nodes"][first as usize];
        assert_eq!(node["fx"], node["x"]);
    }
    // The self-route collapses to a single direct hop.
    assert_eq!(paths[4], serde_json::json!([3, 3]));
}

#[test]
fn test_demo_outgoing_handles() {
    let out = run_json(&demo("gulf_routes.json"), &[]);
    assert_eq!(out["outgoing"]["AEJEA"], serde_json::json!([0, 1]));
    assert_eq!(out["outgoing"]["PKKHI"], serde_json::json!([2]));
    assert!(out["outgoing"].get("IRBND").is_none());
}

#[test]
fn test_demo_from_file_argument() {
    let path = demos_dir().join("gulf_routes.json");
    let out = run_json("", &[path.to_str().unwrap()]);
    assert_eq!(len(&out["paths"]), 5);
}

// ─── Options ─────────────────────────────────────────────────────────────────

#[test]
fn test_max_segments_caps_control_points() {
    let out = run_json(
        &demo("gulf_routes.json"),
        &["--min-segments", "1", "--max-segments", "1"],
    );
    // Every non-degenerate route gets exactly one control point.
    assert_eq!(len(&out["nodes"]), 4 + 4);
    assert_eq!(len(&out["links"]), 4 * 2 + 1);
}

#[test]
fn test_pretty_output_is_multiline() {
    let output = run_raw(&demo("gulf_routes.json"), &["--pretty"]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.lines().count() > 10);
}

#[test]
fn test_output_file() {
    let mut target = std::env::temp_dir();
    target.push(format!("route-bundler-{}.json", std::process::id()));
    let output = run_raw(
        &demo("gulf_routes.json"),
        &["-o", target.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written: Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(len(&written["links"]), 16);
    fs::remove_file(&target).ok();
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_json_fails() {
    let output = run_raw("{oops", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid network document"));
}

#[test]
fn test_invalid_canvas_fails() {
    let output = run_raw("{}", &["--width", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("canvas width"));
}

#[test]
fn test_missing_input_file_fails() {
    let output = run_raw("", &["/nonexistent/network.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}
