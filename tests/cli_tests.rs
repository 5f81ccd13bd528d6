//! Integration tests for the grafo CLI
//!
//! These tests run the grafo binary and verify output and exit codes.

use predicates::prelude::*;

mod common;
use common::grafo;

// ============================================================================
// Help, version, exit codes
// ============================================================================

#[test]
fn test_help_flag() {
    grafo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: grafo"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("eulerian"))
        .stdout(predicate::str::contains("hamiltonian"));
}

#[test]
fn test_version_flag() {
    grafo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grafo"));
}

#[test]
fn test_no_command_exit_code_2() {
    grafo().assert().code(2);
}

#[test]
fn test_unknown_format_exit_code_2() {
    grafo()
        .args(["--format", "records", "eulerian"])
        .assert()
        .code(2);
}

#[test]
fn test_malformed_edge_spec_exit_code_2() {
    grafo()
        .args(["path", "--edge", "a", "--from", "a", "--to", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge spec"));
}

#[test]
fn test_self_loop_exit_code_3() {
    grafo()
        .args(["eulerian", "--edge", "a,a"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid endpoints"));
}

#[test]
fn test_json_error_envelope() {
    grafo()
        .args(["--format", "json", "eulerian", "--edge", "a,a"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_endpoints\""));
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_human_output() {
    grafo()
        .args([
            "path", "--edge", "a,b:10", "--edge", "a,c:1", "--edge", "c,b:2", "--from", "a",
            "--to", "b",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("path a -> b: e1 e2 (weight 3)"));
}

#[test]
fn test_path_unreachable() {
    grafo()
        .args([
            "path", "--edge", "a,b", "--edge", "c,d", "--from", "a", "--to", "d",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from a to d"));
}

#[test]
fn test_path_respects_direction() {
    grafo()
        .args(["path", "--edge", ">a,b", "--from", "b", "--to", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from b to a"));
}

#[test]
fn test_path_json_output() {
    let output = grafo()
        .args([
            "--format", "json", "path", "--edge", "a,b:4", "--from", "a", "--to", "b",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["total_weight"], 4);
    assert_eq!(json["edges"], serde_json::json!([0]));
}

// ============================================================================
// eulerian
// ============================================================================

#[test]
fn test_eulerian_triangle() {
    grafo()
        .args([
            "eulerian", "--edge", "a,b", "--edge", "b,c", "--edge", "c,a",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("eulerian circuit:"));
}

#[test]
fn test_eulerian_star_rejected() {
    grafo()
        .args([
            "eulerian", "--edge", "hub,x", "--edge", "hub,y", "--edge", "hub,z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no eulerian circuit"));
}

#[test]
fn test_eulerian_json_output() {
    let output = grafo()
        .args([
            "--format", "json", "eulerian", "--edge", "a,b", "--edge", "b,c", "--edge", "c,a",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "eulerian");
    assert_eq!(json["found"], true);
    assert_eq!(json["edges"].as_array().unwrap().len(), 3);
}

// ============================================================================
// hamiltonian
// ============================================================================

#[test]
fn test_hamiltonian_triangle() {
    grafo()
        .args([
            "hamiltonian", "--edge", "a,b", "--edge", "b,c", "--edge", "c,a",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("hamiltonian circuit:"));
}

#[test]
fn test_hamiltonian_star_rejected() {
    grafo()
        .args([
            "hamiltonian", "--edge", "hub,x", "--edge", "hub,y", "--edge", "hub,z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no hamiltonian circuit"));
}
