mod common;

use predicates::prelude::*;

use common::TestFixture;

#[test]
fn detailed_csharp_report() {
    let fixture = TestFixture::sample_project();

    line_tally!()
        .arg("detailed")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DETAILED C# CODE ANALYSIS BY DIRECTORY AND FILE",
        ))
        .stdout(predicate::str::contains("DIRECTORY: Backend"))
        .stdout(predicate::str::contains("  DIRECTORY: Services"))
        .stdout(predicate::str::contains("UserService.cs"))
        .stdout(predicate::str::contains("OVERALL C# TOTALS"))
        .stdout(predicate::str::contains("TOP 50 LARGEST C# FILES BY CODE LINES"))
        .stdout(predicate::str::contains("app.tsx").not())
        .stdout(predicate::str::contains("Generated.cs").not());

    let saved = fixture.read("detailed_report.txt");
    assert!(saved.contains("  1. Backend/Services/UserService.cs"));
}

#[test]
fn detailed_other_language_and_top() {
    let fixture = TestFixture::sample_project();

    line_tally!()
        .args(["detailed", "--lang", "tsx", "--top", "3", "--no-report-file"])
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DETAILED TYPESCRIPT (TSX) CODE ANALYSIS"))
        .stdout(predicate::str::contains("TOP 3 LARGEST TYPESCRIPT (TSX) FILES"))
        .stdout(predicate::str::contains("  1. Frontend/src/app.tsx"));
}

#[test]
fn detailed_json_counts() {
    let fixture = TestFixture::sample_project();

    let output = line_tally!()
        .args(["detailed", "--format", "json", "--no-report-file"])
        .arg(fixture.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["language"], "C#");
    assert_eq!(value["overall"]["files"], 2);

    let largest = &value["largest_files"][0];
    assert_eq!(largest["path"], "Backend/Services/UserService.cs");
    assert_eq!(largest["code"], 4);
    assert_eq!(largest["comments"], 2);
    assert_eq!(largest["blank"], 1);
}

#[test]
fn detailed_report_write_failure_exits_with_error() {
    let fixture = TestFixture::sample_project();
    fixture.create_file("blocker", "not a directory");

    line_tally!()
        .arg("detailed")
        .arg(fixture.path())
        .arg("-o")
        .arg(fixture.path().join("blocker/report.txt"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to write report"));
}

#[test]
fn detailed_verbose_logs_to_stderr() {
    let fixture = TestFixture::sample_project();

    line_tally!()
        .args(["-v", "detailed", "--no-report-file"])
        .arg(fixture.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("scan complete"));
}
