use crate::errors::AppResult;
use crate::models::record::TimeRecord;
use crate::models::report::MonthlyBucket;
use crate::utils::time::month_key;
use std::collections::BTreeMap;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Group records by the `YYYY-MM` of their start datetime and sum durations.
///
/// Every record must carry a parseable start datetime: a single bad value
/// aborts the whole computation. Buckets come back most recent month first.
pub fn bucket_by_month(records: &[&TimeRecord], hour_price: f64) -> AppResult<Vec<MonthlyBucket>> {
    let mut seconds_by_month: BTreeMap<String, f64> = BTreeMap::new();

    for rec in records {
        let key = month_key(&rec.start_datetime)?;
        *seconds_by_month.entry(key).or_insert(0.0) += rec.seconds();
    }

    Ok(seconds_by_month
        .into_iter()
        .rev()
        .map(|(month, seconds)| {
            let hours = seconds / SECONDS_PER_HOUR;
            MonthlyBucket {
                month,
                seconds,
                hours,
                amount: hours * hour_price,
            }
        })
        .collect())
}
