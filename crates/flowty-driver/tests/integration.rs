//! Integration tests for the `flowty` binary.
//!
//! These tests write Flow sources to temp files and check the CLI's output
//! and exit status.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn flowty_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_flowty"))
}

/// Writes `source` to a fresh temp file and returns its path.
fn write_input(source: &str) -> PathBuf {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let temp_dir = std::env::temp_dir().join(format!("flowty_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&temp_dir).expect("Failed to create temp dir");

    let input_path = temp_dir.join("input.js.flow");
    fs::write(&input_path, source).expect("Failed to write test input");
    input_path
}

fn run(args: &[&str]) -> Output {
    Command::new(flowty_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run flowty")
}

fn run_on(subcommand: &str, source: &str, extra: &[&str]) -> Output {
    let input = write_input(source);
    let input = input.to_string_lossy().to_string();
    let mut args = vec![subcommand, input.as_str()];
    args.extend_from_slice(extra);
    run(&args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_parse_declaration_file() {
    let source = "\
'use strict';
import type { Node, Edge } from './graph';
const fs = require('fs');
import * as path from 'path';

export type Graph = {|
  +nodes: $ReadOnlyArray<Node>,
  edges?: Edge[],
  [id: string]: ?Node,
|};
";
    let output = run_on("parse", source, &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("UseStrict"));
    assert!(out.contains("ImportName"));
    assert!(out.contains("ImportEqual"));
    assert!(out.contains("ImportAs"));
    assert!(out.contains("TypeAlias"));
    assert!(out.contains("is_exact: true"));
}

#[test]
fn test_parse_json_output() {
    let output = run_on("parse", "type Id = string | number;", &["--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    let statements = value["statements"].as_array().expect("statements array");
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0]["span"]["start"], 0);
}

#[test]
fn test_parse_error_reports_diagnostic() {
    let output = run_on("parse", "type A = ;", &[]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("E1000"), "stderr: {}", err);
    assert!(err.contains("Parse error"), "stderr: {}", err);
}

#[test]
fn test_parse_trailing_input_fails() {
    let output = run_on("parse", "type A = number;\nnot flow at all", &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unrecognized content"));
}

#[test]
fn test_lexical_error_reported_before_parsing() {
    let output = run_on("parse", "type A = B & C;", &[]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("E0001"), "stderr: {}", err);
    assert!(!err.contains("E1000"), "stderr: {}", err);
}

#[test]
fn test_lex_with_positions() {
    let output = run_on("lex", "type A = B;", &["--positions"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Type"));
    assert!(out.contains("0..4"));
    assert!(out.contains("Total tokens: 6"));
}

#[test]
fn test_type_command() {
    let output = run(&["type", "?Array<string>[]"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Optional"));
    assert!(out.contains("Array"));
}

#[test]
fn test_type_command_json() {
    let output = run(&["type", "'a' | 'b'", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(value["Union"].as_array().map(|v| v.len()), Some(2));
}

#[test]
fn test_type_command_rejects_incomplete_type() {
    let output = run(&["type", "Foo<"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("<expr>"));
}

#[test]
fn test_missing_file() {
    let output = run(&["parse", "/nonexistent/flowty/input.js.flow"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error reading file"));
}
