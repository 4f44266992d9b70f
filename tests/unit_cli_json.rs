#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

#[test]
fn get_json_output_reports_path_and_value() {
	let json = run_json(&["get", &fixture("repository.json"), "owner.login", "--as", "string", "--json"]);

	assert_eq!(json["path"], "<root>.owner.login");
	assert_eq!(json["exists"], true);
	assert_eq!(json["value"], "yury");
}

#[test]
fn get_converts_dates_and_urls() {
	let json = run_json(&["get", &fixture("repository.json"), "pushedAt", "--as", "date", "--json"]);
	assert_eq!(json["value"], "2016-05-27T10:20:30.000Z");

	let output = run(&["get", &fixture("repository.json"), "homepage", "--as", "url"]);
	assert!(output.status.success(), "url conversion should succeed");
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "http://anjlab.com/");
}

#[test]
fn get_strict_failure_prints_wrong_type_and_exits_nonzero() {
	let output = run(&["get", &fixture("repository.json"), "owner.missing[0]", "--as", "url"]);

	assert!(!output.status.success(), "strict conversion of a missing node should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(
		stderr.contains("error: JJError.WrongType: Can't convert nil at path: '<root>.owner.missing<nil>[0]' to type 'URL'"),
		"unexpected stderr: {stderr}"
	);
}

#[test]
fn get_lenient_falls_back_to_null() {
	let json = run_json(&["get", &fixture("repository.json"), "sometimesMissingKey", "--as", "string", "--lenient", "--json"]);

	assert_eq!(json["exists"], true);
	assert!(json["value"].is_null());
}

#[test]
fn get_warns_about_deprecated_fields_on_stderr() {
	let output = run(&["get", &fixture("repository.json"), "license", "--as", "string"]);

	assert!(output.status.success(), "deprecated fields still convert");
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "MIT");
	let stderr = String::from_utf8_lossy(&output.stderr);
	if cfg!(debug_assertions) {
		assert!(stderr.contains("using deprecated field"), "unexpected stderr: {stderr}");
		assert!(stderr.contains("use licenses[0] instead"), "unexpected stderr: {stderr}");
	} else {
		assert!(!stderr.contains("using deprecated field"), "release builds stay quiet: {stderr}");
	}

	let quiet = run(&["get", &fixture("repository.json"), "license", "--as", "string", "--no-deprecation-warnings"]);
	assert!(!String::from_utf8_lossy(&quiet.stderr).contains("using deprecated field"));
}

#[test]
fn print_renders_selected_subtree() {
	let output = run(&["print", &fixture("repository.json"), "--path", "topics"]);

	assert!(output.status.success(), "print should succeed");
	assert_eq!(String::from_utf8_lossy(&output.stdout), "[\n  \"json\",\n  \"swift\",\n  \"parser\"\n]\n");
}

#[test]
fn print_rejects_malformed_path() {
	let output = run(&["print", &fixture("repository.json"), "--path", "topics["]);

	assert!(!output.status.success(), "malformed path should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("invalid field path: topics["));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_jj")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"jj command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
