// src/export/text.rs

use crate::models::report::Report;
use crate::utils::table::{Align, Column, Table};

/// Plain text table: Month | Duration | Total (BRL), `Total` row last.
pub(crate) fn render_table(report: &Report) -> String {
    let [month, duration, total] = Report::headers();

    let mut table = Table::new(vec![
        Column::new(month, Align::Left),
        Column::new(duration, Align::Right),
        Column::new(total, Align::Right),
    ]);

    for row in report.rows() {
        table.add_row(vec![row.month, row.duration, row.total_brl]);
    }

    table.render()
}
