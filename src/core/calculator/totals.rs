use crate::core::calculator::monthly::SECONDS_PER_HOUR;
use crate::models::record::TimeRecord;
use crate::models::report::ReportTotals;

/// Grand total, summed straight from the records rather than from the
/// (already divided) monthly buckets.
pub fn grand_total(records: &[&TimeRecord], hour_price: f64) -> ReportTotals {
    let seconds: f64 = records.iter().map(|r| r.seconds()).sum();
    let hours = seconds / SECONDS_PER_HOUR;

    ReportTotals {
        seconds,
        hours,
        amount: hours * hour_price,
    }
}
