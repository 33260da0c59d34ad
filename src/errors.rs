//! Unified application error type.
//! Every stage of the pipeline (config, path checks, loader, aggregator,
//! export) returns AppError so `main` has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path {0} does not exist.")]
    Path(String),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Missing required column '{column}' in {file}")]
    Schema { file: String, column: String },

    #[error("Invalid CSV in {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid start datetime: '{0}'")]
    Timestamp(String),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
