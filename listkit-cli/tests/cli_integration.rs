//! Integration tests for the listkit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn listkit() -> Command {
    let mut cmd = Command::cargo_bin("listkit").unwrap();
    cmd.env_remove("LISTKIT_CONFIG");
    cmd
}

#[test]
fn test_dedup_from_stdin() {
    listkit()
        .arg("dedup")
        .write_stdin("b\na\nb\nc\na\n")
        .assert()
        .success()
        .stdout("b\na\nc\n");
}

#[test]
fn test_dedup_ignore_case() {
    listkit()
        .args(["dedup", "--ignore-case"])
        .write_stdin("Apple\napple\nBANANA\n")
        .assert()
        .success()
        .stdout("apple\nbanana\n");
}

#[test]
fn test_filter_glob_include() {
    listkit()
        .args(["filter", "-p", "*.txt"])
        .write_stdin("a.txt\nb.png\nc.txt\n")
        .assert()
        .success()
        .stdout("a.txt\nc.txt\n");
}

#[test]
fn test_filter_glob_exclude_multiple_patterns() {
    listkit()
        .args(["filter", "-p", "*.txt", "-p", "*.md", "--exclude"])
        .write_stdin("a.txt\nb.png\nREADME.md\n")
        .assert()
        .success()
        .stdout("b.png\n");
}

#[test]
fn test_filter_regex_matches_whole_item() {
    listkit()
        .args(["filter", "-p", r"\d+", "--syntax", "regex"])
        .write_stdin("123\nabc123\n42\n")
        .assert()
        .success()
        .stdout("123\n42\n");
}

#[test]
fn test_invalid_regex_exit_code() {
    listkit()
        .args(["filter", "-p", "(", "--syntax", "regex"])
        .write_stdin("a\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid pattern '('"));
}

#[test]
fn test_filter_glob_star_runs_and_literal_slash() {
    listkit()
        .args(["filter", "-p", "a**", "-p", "**/*.md"])
        .write_stdin("abc\nxbc\nnotes.md\ndocs/notes.md\n")
        .assert()
        .success()
        .stdout("abc\ndocs/notes.md\n");
}

#[test]
fn test_invalid_glob_exit_code() {
    listkit()
        .args(["filter", "-p", "[abc"])
        .write_stdin("a\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn test_contains() {
    listkit()
        .args(["contains", "err"])
        .write_stdin("error: a\nok\nstderr\n")
        .assert()
        .success()
        .stdout("error: a\nstderr\n");

    listkit()
        .args(["contains", "err", "-x"])
        .write_stdin("error: a\nok\nstderr\n")
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn test_strip_whitespace_and_chars() {
    listkit()
        .arg("strip")
        .write_stdin("  a  \n\tb\n")
        .assert()
        .success()
        .stdout("a\nb\n");

    listkit()
        .args(["strip", "--chars", "-", "--side", "trailing"])
        .write_stdin("--a--\n")
        .assert()
        .success()
        .stdout("--a\n");
}

#[test]
fn test_strip_quotes() {
    listkit()
        .args(["strip", "--quotes"])
        .write_stdin("'a'\n \"b\" \n'c\"\n")
        .assert()
        .success()
        .stdout("a\nb\n'c\"\n");
}

#[test]
fn test_chunk_text_output() {
    listkit()
        .args(["chunk", "--size", "2"])
        .write_stdin("a\nb\nc\nd\ne\n")
        .assert()
        .success()
        .stdout("a\nb\n\nc\nd\n\ne\n");
}

#[test]
fn test_chunk_json_output() {
    let output = listkit()
        .args(["chunk", "-s", "2", "-f", "json"])
        .write_stdin("a\nb\nc\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Vec<Vec<String>> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, vec![vec!["a", "b"], vec!["c"]]);
}

#[test]
fn test_chunk_size_zero_exit_code() {
    listkit()
        .args(["chunk", "--size", "0"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_chunk_missing_size_exit_code() {
    listkit()
        .arg("chunk")
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing argument: --size"));
}

#[test]
fn test_json_items_output() {
    let output = listkit()
        .args(["dedup", "--format", "json"])
        .write_stdin("x\ny\nx\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, vec!["x", "y"]);
}

#[test]
fn test_markdown_output() {
    listkit()
        .args(["chunk", "--size", "1", "-f", "markdown"])
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Chunk 1"))
        .stdout(predicate::str::contains("## Chunk 2"))
        .stdout(predicate::str::contains("1. a"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total items: 2 in 2 chunks*"));
}

#[test]
fn test_input_files_and_glob() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.txt"), "2\n3\n").unwrap();
    fs::write(temp_dir.path().join("a.txt"), "1\n2\n").unwrap();
    fs::write(temp_dir.path().join("skip.log"), "9\n").unwrap();

    let pattern = temp_dir.path().join("*.txt");
    listkit()
        .args(["dedup", "-q", "-i"])
        .arg(&pattern)
        .assert()
        .success()
        .stdout("1\n2\n3\n");
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    listkit()
        .args(["dedup", "-i"])
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.txt");

    listkit()
        .args(["dedup", "-o"])
        .arg(&out)
        .write_stdin("a\na\nb\n")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&out).unwrap(), "a\nb\n");
}

#[test]
fn test_config_file_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("listkit.toml");
    fs::write(
        &config,
        r#"
[filter]
default_syntax = "regex"

[output]
default_format = "json"
pretty_json = false

[chunk]
default_size = 2
"#,
    )
    .unwrap();

    listkit()
        .args(["filter", "-p", "a.*", "-c"])
        .arg(&config)
        .write_stdin("abc\nbcd\n")
        .assert()
        .success()
        .stdout("[\"abc\"]\n");

    listkit()
        .args(["chunk", "-f", "text", "-c"])
        .arg(&config)
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout("a\nb\n\nc\n");
}

#[test]
fn test_config_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("listkit.toml");
    fs::write(&config, "[strip]\ndefault_chars = \"#\"\n").unwrap();

    listkit()
        .env("LISTKIT_CONFIG", &config)
        .arg("strip")
        .write_stdin("## title ##\n")
        .assert()
        .success()
        .stdout(" title \n");
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[filter]\nunknown_key = 1\n").unwrap();

    listkit()
        .args(["dedup", "-c"])
        .arg(&config)
        .write_stdin("a\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_list_commands() {
    listkit()
        .args(["list", "syntaxes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glob"))
        .stdout(predicate::str::contains("regex"));

    listkit()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help_and_version() {
    listkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dedup"))
        .stdout(predicate::str::contains("filter"))
        .stdout(predicate::str::contains("chunk"));

    listkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    listkit().arg("shuffle").assert().failure();
}
