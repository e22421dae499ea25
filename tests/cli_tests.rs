use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

fn universle() -> Command {
    Command::new(env!("CARGO_BIN_EXE_universle"))
}

fn play(args: &[&str], input: &str) -> String {
    let mut child = universle()
        .arg("--quiet")
        .arg("play")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn universle");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn distance_between_demo_schools() {
    let output = universle()
        .args(["distance", "University of Chicago", "stanford university"])
        .output()
        .expect("run universle");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "1852 miles W");
}

#[test]
fn unknown_name_fails_distance() {
    let output = universle()
        .args(["distance", "Hogwarts", "Stanford University"])
        .output()
        .expect("run universle");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown institution: Hogwarts"));
}

#[test]
fn guessing_both_demo_schools_wins() {
    let stdout = play(
        &["--seed", "7"],
        "Stanford University\nUniversity of Chicago\n",
    );
    assert!(stdout.contains("Correct! The answer was"), "{stdout}");
    assert!(stdout.contains(" miles "));
}

#[test]
fn unknown_guess_does_not_use_an_attempt() {
    let stdout = play(&["--seed", "1", "--attempts", "1"], "Chicag\n");
    assert!(stdout.contains("Unknown institution: Chicag"));
    assert!(stdout.contains("did you mean: University of Chicago"));
    assert!(stdout.contains("Game abandoned."));
}

#[test]
fn json_report_describes_session() {
    let stdout = play(
        &["--seed", "3", "--json"],
        "Stanford University\nUniversity of Chicago\n",
    );
    let start = stdout.find('{').expect("json in output");
    let report: serde_json::Value = serde_json::from_str(&stdout[start..]).unwrap();
    assert_eq!(report["status"], "won");
    let guesses = report["session"]["guesses"].as_array().unwrap();
    assert!(!guesses.is_empty() && guesses.len() <= 2);
}

#[test]
fn list_reads_csv_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unis.csv");
    fs::write(
        &path,
        "id,name,lat,lng,city,state\n1,Rice University,29.72,-95.40,Houston,TX\n2,Tulane University,29.94,-90.12,New Orleans,LA\n",
    )
    .unwrap();
    let output = universle()
        .args(["list", "--query", "rice", "--data", path.to_str().unwrap()])
        .output()
        .expect("run universle");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "Rice University (Houston, TX)");
}

#[test]
fn zero_attempts_is_an_error() {
    let output = universle()
        .args(["play", "--attempts", "0"])
        .stdin(Stdio::null())
        .output()
        .expect("run universle");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("max_attempts must be at least 1"));
}

#[test]
fn dataset_summary_reports_demo_coverage() {
    let output = Command::new(env!("CARGO_BIN_EXE_dataset_summary"))
        .output()
        .expect("run dataset_summary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert!(lines.contains(&"institutions: 2"), "{stdout}");
    assert!(lines.contains(&"without hints: 0"), "{stdout}");

    let coverage = |key: &str| {
        lines
            .iter()
            .find(|l| l.starts_with(key) && l[key.len()..].starts_with(' '))
            .map(|l| l.split_whitespace().rev().take(2).collect::<Vec<_>>())
    };
    assert_eq!(coverage("Mascot"), Some(vec!["(100.0%)", "2"]));
    assert_eq!(coverage("Sporting affiliations"), Some(vec!["(50.0%)", "1"]));
    assert_eq!(coverage("Endowment"), Some(vec!["(0.0%)", "0"]));
}
