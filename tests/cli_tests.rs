//! Command-line tests for the `bio-ipcress` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn data(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn bio_ipcress() -> Command {
    Command::cargo_bin("bio-ipcress").expect("binary should be built")
}

#[test]
fn test_parse_text_output() {
    bio_ipcress()
        .args(["parse", &data("single_result.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results: 1"))
        .stdout(predicate::str::contains("AE12_pmid21856836_16S (forward)"))
        .stdout(predicate::str::contains("Length: 502  Start: 826"))
        .stdout(predicate::str::contains("Mismatches: forward 1, reverse 1"));
}

#[test]
fn test_parse_recalculate() {
    bio_ipcress()
        .args(["parse", &data("single_result.txt"), "--recalculate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mismatches: forward 0, reverse 0"));
}

#[test]
fn test_parse_json_output() {
    let output = bio_ipcress()
        .args(["--format", "json", "parse", &data("multi_result.txt")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 3);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["result_type"], "single_B");
    assert_eq!(results[0]["forward_mismatches"], 5);
    assert_eq!(results[1]["start"], 825);
    assert_eq!(results[2]["length"], 470);
}

#[test]
fn test_parse_tsv_output() {
    bio_ipcress()
        .args(["parse", &data("multi_result.txt"), "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("experiment\tprimers\ttarget"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 4));
}

#[test]
fn test_parse_stdin() {
    let report = std::fs::read_to_string(data("single_result.txt")).unwrap();
    bio_ipcress()
        .args(["parse", "-", "--format", "tsv"])
        .write_stdin(report)
        .assert()
        .success()
        .stdout(predicate::str::contains("\t502\t826\t1\t1\t"));
}

#[test]
fn test_parse_no_results() {
    bio_ipcress()
        .args(["parse", &data("no_results.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results: 0"));
}

#[test]
fn test_parse_malformed_report_fails() {
    bio_ipcress()
        .args(["parse", &data("malformed_result.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Result block 1"))
        .stderr(predicate::str::contains("product start"));
}

#[test]
fn test_parse_missing_file_fails() {
    bio_ipcress()
        .args(["parse", "does_not_exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does_not_exist.txt"));
}

#[test]
fn test_primers_line() {
    bio_ipcress()
        .args(["primers", "--forward", "aat", "--reverse", "GTG"])
        .assert()
        .success()
        .stdout("ID1 AAT GTG 100 1000\n");

    bio_ipcress()
        .args([
            "primers",
            "--forward",
            "AAT",
            "--reverse",
            "GTG",
            "--min-distance",
            "3",
            "--max-distance",
            "700",
        ])
        .assert()
        .success()
        .stdout("ID1 AAT GTG 3 700\n");
}

#[test]
fn test_primers_rejects_bad_input() {
    bio_ipcress()
        .args(["primers", "--forward", "AAXT", "--reverse", "GTG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid forward primer"));

    bio_ipcress()
        .args([
            "primers",
            "--forward",
            "AAT",
            "--reverse",
            "GTG",
            "--min-distance",
            "800",
            "--max-distance",
            "700",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--min-distance"));
}

#[test]
fn test_run_missing_fasta_fails() {
    bio_ipcress()
        .args([
            "run",
            "--forward",
            "GGTCACTGCTA",
            "--reverse",
            "GGCTACCTTGTTACGACTTAAC",
            "notafasta_file_fo_so.fa",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sequence database not found"));
}

#[test]
fn test_run_missing_ipcress_fails() {
    bio_ipcress()
        .args([
            "run",
            "--forward",
            "GGTCACTGCTA",
            "--reverse",
            "GGCTACCTTGTTACGACTTAAC",
            "--ipcress-path",
            "/nonexistent/ipcress",
            &data("methanocella_16s.fa"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ipcress executable not found"));
}
