// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::report::Report;

/// JSON pretty-printed array of rows.
pub(crate) fn render_json(report: &Report) -> AppResult<String> {
    serde_json::to_string_pretty(&report.rows())
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

/// CSV (header included thanks to serde).
pub(crate) fn render_csv(report: &Report) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for item in report.rows() {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
