// src/export/mod.rs

mod json_csv;
mod text;

use crate::errors::AppResult;
use crate::models::report::Report;
use clap::ValueEnum;

#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Render the report in the requested format, ready to be printed.
pub fn render(report: &Report, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Table => Ok(text::render_table(report)),
        OutputFormat::Csv => json_csv::render_csv(report),
        OutputFormat::Json => json_csv::render_json(report),
    }
}
