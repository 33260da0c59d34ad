use crate::config::Config;
use crate::core::calculator::{monthly, totals};
use crate::errors::AppResult;
use crate::models::member::MemberId;
use crate::models::record::TimeRecord;
use crate::models::report::Report;

pub struct Core;

impl Core {
    /// Records whose member identifier is exactly `member`.
    /// Rows without a `(id)` token never match.
    pub fn filter_member<'a>(records: &'a [TimeRecord], member: &str) -> Vec<&'a TimeRecord> {
        records
            .iter()
            .filter(|r| MemberId::extract(&r.member_field).is_some_and(|id| id.is(member)))
            .collect()
    }

    pub fn build_report(records: &[TimeRecord], cfg: &Config) -> AppResult<Report> {
        let matched = Self::filter_member(records, &cfg.member);
        let months = monthly::bucket_by_month(&matched, cfg.hour_price)?;
        let total = totals::grand_total(&matched, cfg.hour_price);

        Ok(Report {
            member: cfg.member.clone(),
            hour_price: cfg.hour_price,
            months,
            total,
        })
    }
}
