// File: crates/chart-core/tests/csv_decode.rs
// Purpose: Decoding the waitlist CSV, including the malformed rows real exports contain.

use waitlist_chart::{read_records, read_records_from_str, ChartError};

#[test]
fn decodes_rows_in_order() {
    let text = "time,name,waitlisted\n\
                2023-09-01T00:00:00,DSC10,5\n\
                2023-09-02T00:00:00,DSC10,3\n\
                2023-09-01T00:00:00,DSC100,2\n";
    let records = read_records_from_str(text).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "DSC10");
    assert_eq!(records[0].waitlisted, 5.0);
    assert_eq!(records[2].name, "DSC100");
    assert!(records.iter().all(|r| r.is_plottable()));
}

#[test]
fn extra_and_reordered_columns_are_fine() {
    let text = "name, enrolled ,waitlisted,time\nDSC80,120,7,2023-10-01T12:30:00\n";
    let records = read_records(text.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].waitlisted, 7.0);
    assert_eq!(records[0].time.unwrap().format("%H:%M").to_string(), "12:30");
}

#[test]
fn malformed_fields_are_kept_but_marked() {
    let text = "time,name,waitlisted\n\
                yesterday,DSC10,5\n\
                2023-09-02T00:00:00,DSC10,N/A\n\
                2023-09-03T00:00:00,DSC10,12 students\n\
                2023-09-04T00:00:00,,4\n";
    let records = read_records_from_str(text).unwrap();
    assert_eq!(records.len(), 3, "empty-name row dropped");
    assert!(!records[0].has_time());
    assert!(records[0].has_value());
    assert!(records[1].has_time());
    assert!(!records[1].has_value());
    assert_eq!(records[2].waitlisted, 12.0);
}

#[test]
fn short_rows_do_not_abort_decoding() {
    let text = "time,name,waitlisted\n2023-09-01T00:00:00,DSC10\n2023-09-02T00:00:00,DSC10,1\n";
    let records = read_records_from_str(text).unwrap();
    assert_eq!(records.len(), 2);
    assert!(!records[0].has_value());
}

#[test]
fn missing_column_is_an_error() {
    let err = read_records_from_str("time,name\n2023-09-01T00:00:00,DSC10\n").unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn("waitlisted")));
    assert_eq!(err.to_string(), "missing required column `waitlisted`");
}

#[test]
fn header_only_gives_no_records() {
    assert!(read_records_from_str("time,name,waitlisted\n").unwrap().is_empty());
}
