use std::fs::File;
use std::io::Write;

use payfeed_ingest::{parse_batch, parse_batch_from_reader};

const SAMPLE: &str = "\
Record Type,Record Sequence,Company ID,Employee ID,First Name,Last Name,Full Name,Home Street,Home City,Home State,Home Zip,Home Address
H,,,BATCH-2026-08,,,,,,,,
D,1,C001,E100,Ada,Lovelace,,10 Analytical Way,Hanahan,SC,29410,
D,2,C001,E101,,,Grace Hopper,,,,,\"700 Compiler Ct, Arlington, VA 22202\"
F,3,C001,,,,,,,,,
";

#[test]
fn full_batch_parse_with_normalization() {
    let batch = parse_batch(SAMPLE).expect("parse");
    assert_eq!(batch.details.len(), 2, "header and footer rows are skipped");

    let first = &batch.details[0].record;
    assert_eq!(batch.details[0].row_number, 2);
    assert_eq!(first.record_sequence, "1");
    assert_eq!(first.company_id, "C001");
    assert_eq!(first.employee.get("employee_id"), "E100");
    assert!(!first.employee.contains("record_type"));

    // Second row arrived with combined name and address fields.
    let second = &batch.details[1].record;
    assert_eq!(second.employee.get("first_name"), "Grace");
    assert_eq!(second.employee.get("last_name"), "Hopper");
    assert_eq!(second.employee.get("home_street"), "700 Compiler Ct");
    assert_eq!(second.employee.get("home_city"), "Arlington");
    assert_eq!(second.employee.get("home_state"), "VA");
    assert_eq!(second.employee.get("home_zip"), "22202");
    assert!(!second.employee.contains("home_address"));
    assert!(!second.employee.contains("full_name"));

    assert_eq!(batch.warnings.len(), 2);
    assert_eq!(batch.warnings[0].row_number, 3);
    assert_eq!(batch.warnings[0].row_id, "E101");

    assert_eq!(batch.header_fields[0], "record_type");
    assert_eq!(batch.header_fields[11], "home_address");
}

#[test]
fn parse_from_file_reader() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("newhires.csv");
    let mut file = File::create(&path).expect("create");
    file.write_all(SAMPLE.as_bytes()).expect("write");
    drop(file);

    let file = File::open(&path).expect("open");
    let batch = parse_batch_from_reader(file).expect("parse");
    assert_eq!(batch.details.len(), 2);
    assert!(batch.parse_errors.is_empty());
}

#[test]
fn warnings_follow_row_order() {
    let text = "\
Record Type,Employee ID,Full Name,Home Address
D,E1,Jo March,\"1 Orchard House, Concord, MA 01742\"
D,E2,Amy March,
";
    let batch = parse_batch(text).expect("parse");
    assert_eq!(batch.warnings.len(), 3);
    assert!(batch.warnings[0].row_number <= batch.warnings[1].row_number);
    assert_eq!(batch.warnings[2].row_number, 2);
}
