//! Integration tests for the JSON error-report writer.

use payfeed_cli::report::write_error_report_json;
use payfeed_core::{NullSink, run_batch};

const HEADERS: &str = "Record Type,Record Sequence,Company ID,Employee ID,First Name,Last Name,\
SSN,DOB,Email,Phone,Home Street,Home City,Home State,Home Zip,Hire Date,Employment Type,\
Job Title,Department,Annual Salary,Pay Frequency,FLSA Status,Federal Filing Status,\
I9 Status,E Verify Status,DD1 Routing Number,DD1 Account Number,DD1 Account Type,\
DD1 Split Type,DD1 Split Value";

fn batch_with_bad_dob() -> String {
    let detail = "D,1,C001,E100,Ada,Lovelace,123-45-6789,13/45/2025,ada@example.com,\
843-555-0101,10 Analytical Way,Hanahan,SC,29410,2026-09-01,Full-time,Machinist,\
Fabrication,120000,Bi-weekly,Exempt,Single,Completed,Authorized,053000196,8841002200,\
Checking,Percent,100";
    format!("{HEADERS}\n{detail}\n")
}

#[test]
fn report_captures_errors_with_traceability() {
    let outcome = run_batch(&batch_with_bad_dob(), &[], &mut NullSink).expect("run");
    assert_eq!(outcome.errors.len(), 1);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_error_report_json(dir.path(), "intake.csv".as_ref(), &outcome)
        .expect("write report");
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("error_report.json"));

    let text = std::fs::read_to_string(&path).expect("read report");
    assert!(text.ends_with('\n'));
    let report: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(report["schema"], "payfeed.error-report");
    assert_eq!(report["schema_version"], 1);
    assert_eq!(report["batch_file"], "intake.csv");
    assert_eq!(report["rows"], 1);
    assert_eq!(report["error_count"], 1);

    let error = &report["errors"][0];
    assert_eq!(error["kind"], "INVALID_FORMAT");
    assert_eq!(error["field"], "dob");
    assert_eq!(error["value"], "13/45/2025");
    assert_eq!(error["row_id"], "E100");
    assert!(error["id"].as_str().is_some_and(|id| id.starts_with("err-")));
}

#[test]
fn report_on_clean_batch_has_empty_issue_arrays() {
    let text = batch_with_bad_dob().replace("13/45/2025", "1990-04-23");
    let outcome = run_batch(&text, &[], &mut NullSink).expect("run");
    assert!(!outcome.has_errors());

    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_error_report_json(dir.path(), "intake.csv".as_ref(), &outcome)
        .expect("write report");
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(report["error_count"], 0);
    assert_eq!(report["errors"].as_array().map(Vec::len), Some(0));
    assert_eq!(report["warnings"].as_array().map(Vec::len), Some(0));
    assert_eq!(report["skipped"].as_array().map(Vec::len), Some(0));
}
