use crate::utils::formatting::{format_brl, hours2readable};
use serde::Serialize;

pub const TOTAL_LABEL: &str = "Total";

/// Hours and amount for one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub month: String,
    pub seconds: f64,
    pub hours: f64,
    pub amount: f64,
}

/// Grand total across every filtered row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTotals {
    pub seconds: f64,
    pub hours: f64,
    pub amount: f64,
}

/// Monthly report for one member: buckets sorted most recent first, plus totals.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub member: String,
    pub hour_price: f64,
    pub months: Vec<MonthlyBucket>,
    pub total: ReportTotals,
}

/// One display row of the report, already formatted.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub month: String,
    pub duration: String,
    pub total_brl: String,
}

impl Report {
    /// Header labels for table / CSV / JSON outputs.
    pub fn headers() -> [&'static str; 3] {
        ["Month", "Duration", "Total (BRL)"]
    }

    /// Display rows: months in report order, `Total` always last.
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = self
            .months
            .iter()
            .map(|b| ReportRow {
                month: b.month.clone(),
                duration: hours2readable(b.hours),
                total_brl: format_brl(b.amount),
            })
            .collect();

        rows.push(ReportRow {
            month: TOTAL_LABEL.to_string(),
            duration: hours2readable(self.total.hours),
            total_brl: format_brl(self.total.amount),
        });

        rows
    }
}
