use worktime::config::Config;
use worktime::core::logic::Core;
use worktime::errors::AppError;
use worktime::models::member::MemberId;
use worktime::models::record::TimeRecord;
use worktime::models::report::TOTAL_LABEL;

const EPS: f64 = 1e-6;

fn cfg(member: &str, price: f64) -> Config {
    Config::new(price, member).expect("valid config")
}

fn rec(member: &str, start: &str, seconds: f64) -> TimeRecord {
    TimeRecord::new(member, start, start, seconds)
}

fn sample() -> Vec<TimeRecord> {
    vec![
        rec("Jane Doe (jdoe)", "2024-01-10 09:00:00", 3600.0),
        rec("John Roe (jroe)", "2024-01-11 09:00:00", 7200.0),
        rec("Jane Doe (jdoe)", "2024-03-02T10:00:00", 1800.0),
        rec("Jane Doe (jdoe)", "2024-02-28 18:30:00", 5400.0),
        rec("Jane Doe (JDOE)", "2024-02-01 08:00:00", 9999.0),
        rec("Jane Doe", "2024-02-01 08:00:00", 1234.0),
        rec("Jane Doe (jdoe)", "2024-01-31 23:00:00", 900.0),
    ]
}

#[test]
fn test_member_id_extract() {
    assert_eq!(
        MemberId::extract("Jane Doe (jdoe)").map(|m| m.to_string()),
        Some("jdoe".to_string())
    );
    // first parenthesized token wins
    assert_eq!(
        MemberId::extract("A (x), B (y)").map(|m| m.as_str().to_string()),
        Some("x".to_string())
    );
    assert_eq!(MemberId::extract("Jane Doe"), None);
    assert_eq!(
        MemberId::extract("()").map(|m| m.to_string()),
        Some(String::new())
    );
}

#[test]
fn test_end_to_end_single_month() {
    let records = vec![
        rec("Jane Doe (jdoe)", "2024-01-05 09:00:00", 3600.0),
        rec("Jane Doe (jdoe)", "2024-01-20 14:00:00", 7200.0),
    ];

    let report = Core::build_report(&records, &cfg("jdoe", 10.0)).expect("report");
    let rows = report.rows();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].month, "2024-01");
    assert_eq!(rows[0].duration, "3h0m");
    assert_eq!(rows[0].total_brl, "R$ 30.00");

    assert_eq!(rows[1].month, TOTAL_LABEL);
    assert_eq!(rows[1].duration, rows[0].duration);
    assert_eq!(rows[1].total_brl, rows[0].total_brl);
}

#[test]
fn test_filter_is_exact_and_case_sensitive() {
    let records = sample();
    let matched = Core::filter_member(&records, "jdoe");

    assert_eq!(matched.len(), 4);
    assert!(
        matched
            .iter()
            .all(|r| MemberId::extract(&r.member_field).is_some_and(|id| id.is("jdoe")))
    );
}

#[test]
fn test_months_sorted_descending_total_last() {
    let report = Core::build_report(&sample(), &cfg("jdoe", 50.0)).expect("report");
    let months: Vec<&str> = report.months.iter().map(|b| b.month.as_str()).collect();

    assert_eq!(months, vec!["2024-03", "2024-02", "2024-01"]);
    assert!(months.windows(2).all(|w| w[0] > w[1]));

    let rows = report.rows();
    assert_eq!(rows.last().map(|r| r.month.as_str()), Some(TOTAL_LABEL));
}

#[test]
fn test_bucket_sums_and_amounts() {
    let report = Core::build_report(&sample(), &cfg("jdoe", 50.0)).expect("report");

    let jan = report.months.iter().find(|b| b.month == "2024-01").expect("jan");
    assert!((jan.seconds - 4500.0).abs() < EPS);
    assert!((jan.hours - 1.25).abs() < EPS);
    assert!((jan.amount - 62.5).abs() < EPS);

    let feb = report.months.iter().find(|b| b.month == "2024-02").expect("feb");
    assert!((feb.hours - 1.5).abs() < EPS);
    assert!((feb.amount - 75.0).abs() < EPS);
}

#[test]
fn test_total_is_conserved() {
    let records = sample();
    let report = Core::build_report(&records, &cfg("jdoe", 42.5)).expect("report");

    let bucket_hours: f64 = report.months.iter().map(|b| b.hours).sum();
    let bucket_amount: f64 = report.months.iter().map(|b| b.amount).sum();
    let row_hours: f64 = Core::filter_member(&records, "jdoe")
        .iter()
        .map(|r| r.seconds() / 3600.0)
        .sum();

    assert!((report.total.hours - bucket_hours).abs() < EPS);
    assert!((report.total.hours - row_hours).abs() < EPS);
    assert!((report.total.amount - bucket_amount).abs() < EPS);
    assert!((report.total.amount - row_hours * 42.5).abs() < EPS);
}

#[test]
fn test_no_match_gives_only_total_row() {
    let report = Core::build_report(&sample(), &cfg("nobody", 10.0)).expect("report");
    let rows = report.rows();

    assert!(report.months.is_empty());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].month, "Total");
    assert_eq!(rows[0].duration, "0h0m");
    assert_eq!(rows[0].total_brl, "R$ 0.00");
}

#[test]
fn test_empty_input_gives_only_total_row() {
    let report = Core::build_report(&[], &cfg("jdoe", 10.0)).expect("report");
    assert_eq!(report.rows().len(), 1);
}

#[test]
fn test_bad_timestamp_is_fatal_for_matching_rows() {
    let records = vec![
        rec("Jane Doe (jdoe)", "2024-01-05 09:00:00", 3600.0),
        rec("Jane Doe (jdoe)", "yesterday afternoon", 3600.0),
    ];

    let err = Core::build_report(&records, &cfg("jdoe", 10.0)).unwrap_err();
    assert!(matches!(err, AppError::Timestamp(ref v) if v == "yesterday afternoon"));
}

#[test]
fn test_bad_timestamp_ignored_for_filtered_out_rows() {
    let records = vec![
        rec("Jane Doe (jdoe)", "2024-01-05 09:00:00", 3600.0),
        rec("John Roe (jroe)", "not a date", 3600.0),
        rec("no id at all", "", 3600.0),
    ];

    let report = Core::build_report(&records, &cfg("jdoe", 10.0)).expect("report");
    assert_eq!(report.months.len(), 1);
}

#[test]
fn test_timestamp_formats_and_offsets() {
    let records = vec![
        rec("J (jdoe)", "2024-05-31T23:30:00-03:00", 60.0),
        rec("J (jdoe)", "2024-06-01T00:10:00.000Z", 60.0),
        rec("J (jdoe)", "2024-04-15", 60.0),
        rec("J (jdoe)", "2024-04-15 08:00", 60.0),
    ];

    let report = Core::build_report(&records, &cfg("jdoe", 10.0)).expect("report");
    let months: Vec<&str> = report.months.iter().map(|b| b.month.as_str()).collect();

    // offsets keep their own wall-clock month
    assert_eq!(months, vec!["2024-06", "2024-05", "2024-04"]);
}

#[test]
fn test_empty_duration_counts_as_zero() {
    let mut running = rec("Jane Doe (jdoe)", "2024-02-10 09:00:00", 0.0);
    running.duration_seconds = None;
    let mut other = rec("John Roe (jroe)", "2024-02-10 09:00:00", 0.0);
    other.duration_seconds = None;

    let records = vec![
        rec("Jane Doe (jdoe)", "2024-01-05 09:00:00", 3600.0),
        running,
        other,
    ];

    let report = Core::build_report(&records, &cfg("jdoe", 10.0)).expect("report");
    let rows = report.rows();

    // the running timer still opens its month, with nothing in it
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].month, "2024-02");
    assert_eq!(rows[0].duration, "0h0m");
    assert_eq!(rows[0].total_brl, "R$ 0.00");
    assert_eq!(rows[2].duration, "1h0m");
    assert_eq!(rows[2].total_brl, "R$ 10.00");
}
