use payfeed_core::{CollectingSink, NullSink, ProgressEvent, run_batch};
use payfeed_model::ErrorKind;
use payfeed_transform::default_mappings;

const HEADERS: &[&str] = &[
    "Record Type",
    "Record Sequence",
    "Company ID",
    "Employee ID",
    "First Name",
    "Last Name",
    "SSN",
    "DOB",
    "Email",
    "Phone",
    "Home Street",
    "Home City",
    "Home State",
    "Home Zip",
    "Hire Date",
    "Employment Type",
    "Job Title",
    "Department",
    "Annual Salary",
    "Pay Frequency",
    "FLSA Status",
    "Federal Filing Status",
    "I9 Status",
    "E Verify Status",
    "DD1 Routing Number",
    "DD1 Account Number",
    "DD1 Account Type",
    "DD1 Split Type",
    "DD1 Split Value",
];

fn detail_row(overrides: &[(&str, &str)]) -> String {
    let defaults: Vec<(&str, &str)> = vec![
        ("Record Type", "D"),
        ("Record Sequence", "1"),
        ("Company ID", "C001"),
        ("Employee ID", "E100"),
        ("First Name", "Ada"),
        ("Last Name", "Lovelace"),
        ("SSN", "123-45-6789"),
        ("DOB", "1990-04-23"),
        ("Email", "ada@example.com"),
        ("Phone", "843-555-0101"),
        ("Home Street", "10 Analytical Way"),
        ("Home City", "Hanahan"),
        ("Home State", "SC"),
        ("Home Zip", "29410"),
        ("Hire Date", "2026-09-01"),
        ("Employment Type", "Full-time"),
        ("Job Title", "Machinist"),
        ("Department", "Fabrication"),
        ("Annual Salary", "120000"),
        ("Pay Frequency", "Bi-weekly"),
        ("FLSA Status", "Exempt"),
        ("Federal Filing Status", "Single"),
        ("I9 Status", "Completed"),
        ("E Verify Status", "Authorized"),
        ("DD1 Routing Number", "053000196"),
        ("DD1 Account Number", "8841002200"),
        ("DD1 Account Type", "Checking"),
        ("DD1 Split Type", "Percent"),
        ("DD1 Split Value", "100"),
    ];
    HEADERS
        .iter()
        .map(|header| {
            overrides
                .iter()
                .chain(defaults.iter())
                .find(|(name, _)| name == header)
                .map(|(_, value)| *value)
                .unwrap_or("")
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn batch_of(rows: &[String]) -> String {
    let mut text = HEADERS.join(",");
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

#[test]
fn clean_batch_transforms_for_every_provider() {
    let text = batch_of(&[detail_row(&[])]);
    let outcome = run_batch(&text, &default_mappings(), &mut NullSink).expect("run");

    assert!(!outcome.has_errors());
    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.outputs.len(), 2);
    for output in &outcome.outputs {
        assert_eq!(output.records.len(), 1);
    }
    let adp = &outcome.outputs[0];
    assert_eq!(adp.provider, "adp");
    assert_eq!(adp.records[0].get("Regular Pay Rate"), Some("4615.38"));
    assert_eq!(adp.records[0].get("Payroll Name"), Some("Ada Lovelace"));
}

#[test]
fn non_compliant_record_is_skipped_with_reason_naming_both_statuses() {
    // Scenario: I-9 pending, E-Verify authorized.
    let text = batch_of(&[detail_row(&[("I9 Status", "Pending_Section_2")])]);
    let outcome = run_batch(&text, &default_mappings(), &mut NullSink).expect("run");

    assert!(!outcome.has_errors(), "gate is independent of validation");
    assert_eq!(outcome.skipped.len(), 1);
    let skipped = &outcome.skipped[0];
    assert_eq!(skipped.row_id, "E100");
    assert!(skipped.reason.contains("Pending_Section_2"));
    assert!(skipped.reason.contains("Authorized"));
    for output in &outcome.outputs {
        assert!(output.records.is_empty());
    }
}

#[test]
fn record_can_fail_validation_and_the_gate_independently() {
    let text = batch_of(&[detail_row(&[
        ("DOB", "13/45/2025"),
        ("E Verify Status", "Pending"),
    ])]);
    let outcome = run_batch(&text, &default_mappings(), &mut NullSink).expect("run");

    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].kind, ErrorKind::InvalidFormat);
    assert_eq!(outcome.errors[0].field, "dob");
    assert_eq!(outcome.skipped.len(), 1);
}

#[test]
fn invalid_record_still_transforms_when_compliant() {
    let text = batch_of(&[detail_row(&[("Home Zip", "294")])]);
    let outcome = run_batch(&text, &default_mappings(), &mut NullSink).expect("run");

    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.outputs[0].records.len(), 1);
}

#[test]
fn errors_carry_column_indexes_from_the_header_order() {
    let text = batch_of(&[detail_row(&[("DOB", "not-a-date")])]);
    let outcome = run_batch(&text, &default_mappings(), &mut NullSink).expect("run");

    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].column_index, Some(7), "dob is column 7");
}

#[test]
fn ledger_receives_errors_and_warnings() {
    let text = batch_of(&[
        detail_row(&[("Home Zip", "294")]),
        detail_row(&[("Record Sequence", "2"), ("Employee ID", "E101")]),
    ]);
    let outcome = run_batch(&text, &default_mappings(), &mut NullSink).expect("run");

    assert_eq!(outcome.ledger.errors().len(), 1);
    assert_eq!(outcome.ledger.errors()[0].row_id, "E100");
}

#[test]
fn progress_events_follow_row_order() {
    let text = batch_of(&[
        detail_row(&[]),
        detail_row(&[("Record Sequence", "2"), ("Employee ID", "E101"), ("I9 Status", "")]),
    ]);
    let mut sink = CollectingSink::default();
    let outcome = run_batch(&text, &default_mappings(), &mut sink).expect("run");

    assert_eq!(sink.events.len(), 4);
    assert_eq!(sink.events[0], ProgressEvent::BatchStarted { total_rows: 2 });
    match &sink.events[1] {
        ProgressEvent::RowProcessed { row_number, compliant, .. } => {
            assert_eq!(*row_number, 1);
            assert!(*compliant);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match &sink.events[3] {
        ProgressEvent::BatchFinished { processed, transformed, skipped, .. } => {
            assert_eq!(*processed, 2);
            assert_eq!(*transformed, 1);
            assert_eq!(*skipped, 1);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(outcome.details.len(), 2);
}

#[test]
fn batch_runs_to_completion_when_every_row_fails() {
    let text = batch_of(&[
        detail_row(&[("Email", ""), ("SSN", "nope")]),
        detail_row(&[("Record Sequence", "2"), ("Employee ID", ""), ("DOB", "bad")]),
    ]);
    let outcome = run_batch(&text, &default_mappings(), &mut NullSink).expect("run");
    assert_eq!(outcome.details.len(), 2);
    assert!(outcome.errors.len() >= 3);
}
