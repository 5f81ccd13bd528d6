//! Integration tests for `grafo script` (stdin-driven graph editing)

use predicates::prelude::*;

mod common;
use common::grafo;

#[test]
fn test_script_add_then_query() {
    grafo()
        .arg("script")
        .write_stdin(
            "add a,b\n\
             add b,c\n\
             add c,a\n\
             eulerian\n\
             hamiltonian\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("added e0"))
        .stdout(predicate::str::contains("eulerian circuit:"))
        .stdout(predicate::str::contains("hamiltonian circuit:"));
}

#[test]
fn test_script_remove_breaks_path() {
    grafo()
        .arg("script")
        .write_stdin(
            "add a,b\n\
             add b,c\n\
             path a c\n\
             remove b\n\
             path a c\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("path a -> c: e0 e1"))
        .stdout(predicate::str::contains("removed 2 edges touching b"))
        .stdout(predicate::str::contains("no path from a to c"));
}

#[test]
fn test_script_clear_resets_all_queries() {
    grafo()
        .arg("script")
        .write_stdin(
            "add a,b\n\
             add b,c\n\
             add c,a\n\
             clear\n\
             path a b\n\
             eulerian\n\
             hamiltonian\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"))
        .stdout(predicate::str::contains("no path from a to b"))
        .stdout(predicate::str::contains("no eulerian circuit"))
        .stdout(predicate::str::contains("no hamiltonian circuit"));
}

#[test]
fn test_script_capacity_alert_keeps_going() {
    let mut input = String::new();
    for i in 0..51 {
        input.push_str(&format!("add n{},n{}\n", i, i + 1));
    }
    input.push_str("eulerian\n");

    grafo()
        .arg("script")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("edge limit reached"));
}

#[test]
fn test_script_rejected_edit_json_envelope() {
    grafo()
        .args(["--format", "json", "script"])
        .write_stdin("add a,a\nadd a,b\neulerian\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"type\":\"invalid_endpoints\""));
}

#[test]
fn test_script_comments_and_blank_lines() {
    grafo()
        .arg("script")
        .write_stdin("# building a path\n\nadd a,b:2\npath a b\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("path a -> b: e0 (weight 2)"));
}

#[test]
fn test_script_unknown_command_is_fatal() {
    grafo()
        .arg("script")
        .write_stdin("frobnicate a,b\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown script command"));
}
