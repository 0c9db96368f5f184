//! End-to-end tests of the tinder-fasta binary.
//!
//! Each test builds a small input tree in a temporary directory, runs the
//! binary against it and inspects the files written to the output directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tinder() -> Command {
    Command::cargo_bin("tinder-fasta").expect("binary should be built")
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Two-line records, bracket matching: the literal needs a leading '|'
#[test]
fn test_bracket_mode_requires_pipe() {
    let tmp = TempDir::new().unwrap();
    let input = write(
        tmp.path(),
        "reads.fna",
        ">seq1_foo(bar)\nACGT\n>seq2_baz(qux)\nTTTT\n",
    );
    let patterns = write(tmp.path(), "patterns.txt", "alpha_foo\n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .args(["--mode", "bracket", "--layout", "paired"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out.join("foo.fasta")).unwrap(), "");
}

/// Same input, regex matching: the first record matches
#[test]
fn test_regex_mode_matches() {
    let tmp = TempDir::new().unwrap();
    let input = write(
        tmp.path(),
        "reads.fna",
        ">seq1_foo(bar)\nACGT\n>seq2_baz(qux)\nTTTT\n",
    );
    let patterns = write(tmp.path(), "patterns.txt", "alpha_foo\n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Read 2 record(s) from 1 file(s)"));

    assert_eq!(
        fs::read_to_string(out.join("foo.fasta")).unwrap(),
        ">seq1_foo(bar)\nACGT\n"
    );
}

/// `-i` takes one value, so the pattern list may follow it
#[test]
fn test_repeated_inputs_before_pattern_list() {
    let tmp = TempDir::new().unwrap();
    let first = write(tmp.path(), "a.fna", ">seq1_foo(bar)\nACGT\n");
    let second = write(tmp.path(), "b.fna", ">seq2_foo(baz)\nTTTT\n");
    let patterns = write(tmp.path(), "patterns.txt", "alpha_foo\n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg("-i")
        .arg(&first)
        .arg("-i")
        .arg(&second)
        .arg(&patterns)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Read 2 record(s) from 2 file(s)"));

    assert_eq!(
        fs::read_to_string(out.join("foo.fasta")).unwrap(),
        ">seq1_foo(bar)\nACGT\n>seq2_foo(baz)\nTTTT\n"
    );
}

#[test]
fn test_multiline_fasta_directory_input() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir(&data).unwrap();
    write(&data, "b.fna", ">b1 Escherichia coli\nAAA\nCCC\n");
    write(&data, "a.fna", ">a1 Escherichia albertii\nGGG\n>a2 Salmonella\nTTT\n");
    write(&data, "ignored.txt", ">x Escherichia\nNNN\n");
    let patterns = write(tmp.path(), "patterns.txt", "g__Escherichia\n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(&data)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out.join("escherichia.fasta")).unwrap(),
        ">a1 Escherichia albertii\nGGG\n>b1 Escherichia coli\nAAACCC\n"
    );
}

#[test]
fn test_empty_pattern_list() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "reads.fna", ">a\nAC\n");
    let patterns = write(tmp.path(), "patterns.txt", "\n   \n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_append_accumulates_recurring_name() {
    let tmp = TempDir::new().unwrap();
    let input = write(
        tmp.path(),
        "reads.fna",
        ">r1|Bacteria(2)|x(1)\nAAAA\n>r2|Bacteria(2)|y(2)\nCCCC\n",
    );
    let patterns = write(tmp.path(), "patterns.txt", "first_x\nsecond_x\n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .args(["--mode", "bracket", "--layout", "paired", "--append"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out.join("x.fasta")).unwrap(),
        ">r1|Bacteria(2)|x(1)\nAAAA\n>r1|Bacteria(2)|x(1)\nAAAA\n"
    );
}

#[test]
fn test_directory_without_matching_files() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir(&data).unwrap();
    write(&data, "reads.fastq", "@r\nAC\n+\nII\n");
    let patterns = write(tmp.path(), "patterns.txt", "a_foo\nb_bar\n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(&data)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Read 0 record(s) from 0 file(s)"));

    assert_eq!(fs::read_to_string(out.join("foo.fasta")).unwrap(), "");
    assert_eq!(fs::read_to_string(out.join("bar.fasta")).unwrap(), "");
}

#[test]
fn test_missing_input_fails_before_writing() {
    let tmp = TempDir::new().unwrap();
    let patterns = write(tmp.path(), "patterns.txt", "a_foo\n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(tmp.path().join("missing.fna"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input not found"));

    assert!(!out.exists());
}

#[test]
fn test_dangling_header_strict_and_lenient() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "reads.fna", ">a foo\nAC\n>b foo\n");
    let patterns = write(tmp.path(), "patterns.txt", "foo\n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .args(["--layout", "paired"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Header line without a sequence line"));

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .args(["--layout", "paired", "--lenient"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out.join("foo.fasta")).unwrap(),
        ">a foo\nAC\n"
    );
}

#[test]
fn test_invalid_regex_rejected() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "reads.fna", ">a\nAC\n");
    let patterns = write(tmp.path(), "patterns.txt", "x_foo((\n");
    let out = tmp.path().join("out");

    tinder()
        .arg("match")
        .arg(&patterns)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid regular expression"));

    assert!(!out.exists());
}

#[test]
fn test_patterns_from_stdin_json_report() {
    let tmp = TempDir::new().unwrap();
    let input = write(tmp.path(), "reads.fna", ">a Foo\nAC\n>b foo\nGG\n");
    let out = tmp.path().join("out");

    let output = tinder()
        .args(["--format", "json", "match", "-"])
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .write_stdin("s__Foo\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["records"], 2);
    assert_eq!(report["mode"], "regex");
    assert_eq!(report["passes"][0]["token"], "Foo");
    assert_eq!(report["passes"][0]["matched"], 1);
}

#[test]
fn test_plan_lists_output_names() {
    let tmp = TempDir::new().unwrap();
    let patterns = write(tmp.path(), "patterns.txt", "s__E. coli\nk__Bacteria\n");

    tinder()
        .args(["--format", "tsv", "plan"])
        .arg(&patterns)
        .args(["-o", "results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("s__E. coli\tE. coli\tresults/e-coli.fasta"))
        .stdout(predicate::str::contains("k__Bacteria\tBacteria\tresults/bacteria.fasta"));
}
