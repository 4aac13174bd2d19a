// File: crates/chart-core/tests/scales.rs
// Purpose: Domain computation over subsets with malformed fields.

use waitlist_chart::scale::{x_domain, y_domain, MAX_TICKS};
use waitlist_chart::{build_scales, Record};

#[test]
fn y_domain_starts_at_zero_and_ignores_nan() {
    let records = vec![
        Record::parse("2023-09-01T00:00:00", "a", "12"),
        Record::parse("2023-09-02T00:00:00", "a", "N/A"),
        Record::parse("2023-09-03T00:00:00", "b", "7"),
    ];
    assert_eq!(y_domain(&records), Some((0.0, 12.0)));
    let scales = build_scales(&records, 710.0, 350.0).expect("scales");
    assert_eq!(scales.y.domain, (0.0, 12.0));
    assert_eq!(scales.y.range, (350.0, 0.0));
    assert_eq!(scales.x.range, (0.0, 710.0));
}

#[test]
fn x_domain_skips_bad_timestamps() {
    let records = vec![
        Record::parse("2023-09-02T00:00:00", "a", "1"),
        Record::parse("2023/09/01", "a", "1"),
        Record::parse("2023-09-04T12:00:00", "a", "1"),
    ];
    let (d0, d1) = x_domain(&records).unwrap();
    assert_eq!(d0, records[0].time_ms().unwrap());
    assert_eq!(d1, records[2].time_ms().unwrap());
}

#[test]
fn no_valid_timestamp_means_no_scales() {
    let records = vec![Record::parse("??", "a", "3")];
    assert!(build_scales(&records, 100.0, 100.0).is_none());
    assert!(build_scales(&Vec::<Record>::new(), 100.0, 100.0).is_none());
}

#[test]
fn all_counts_invalid_gives_flat_zero_domain() {
    let records = vec![Record::parse("2023-09-01T00:00:00", "a", "-")];
    let scales = build_scales(&records, 100.0, 80.0).unwrap();
    assert_eq!(scales.y.domain, (0.0, 0.0));
    // degenerate domains map to the middle of the range
    assert_eq!(scales.y.to_px(0.0), 40.0);
    assert_eq!(scales.x.to_px(records[0].time_ms().unwrap()), 50.0);
}

#[test]
fn negative_counts_never_flip_the_y_domain() {
    let parsed = vec![
        Record::parse("2023-09-01T00:00:00", "a", "-3"),
        Record::parse("2023-09-02T00:00:00", "a", "-1"),
    ];
    assert!(parsed.iter().all(|r| !r.has_value()));
    assert_eq!(y_domain(&parsed), None);
    assert_eq!(build_scales(&parsed, 710.0, 350.0).unwrap().y.domain, (0.0, 0.0));

    let built = vec![Record::new(None, "a", -3.0), Record::new(None, "a", -7.0)];
    assert_eq!(y_domain(&built), Some((0.0, 0.0)));
}

#[test]
fn huge_tick_requests_are_capped() {
    let records = vec![
        Record::parse("2023-09-01T00:00:00", "a", "0"),
        Record::parse("2023-09-03T00:00:00", "a", "10"),
    ];
    let scales = build_scales(&records, 710.0, 350.0).unwrap();
    assert!(scales.x.ticks(1_000_000_000).len() <= MAX_TICKS + 1);
    assert!(scales.y.ticks(usize::MAX).len() <= MAX_TICKS + 1);
    assert!(!scales.y.ticks(0).is_empty());
}

#[test]
fn time_scale_inverts() {
    let records = vec![
        Record::parse("2023-09-01T00:00:00", "a", "1"),
        Record::parse("2023-09-11T00:00:00", "a", "1"),
    ];
    let scales = build_scales(&records, 1000.0, 100.0).unwrap();
    let mid = scales.x.from_px(500.0);
    let expected = (records[0].time_ms().unwrap() + records[1].time_ms().unwrap()) / 2.0;
    assert!((mid - expected).abs() < 1e-3);
    assert!((scales.y.from_px(50.0) - 0.5).abs() < 1e-9);
}
