use crate::errors::{AppError, AppResult};
use crate::models::record::{REQUIRED_COLUMNS, TimeRecord};
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};

fn parse_error(path: &Path, source: csv::Error) -> AppError {
    AppError::Parse {
        file: path.display().to_string(),
        source,
    }
}

fn check_schema(path: &Path, headers: &StringRecord) -> AppResult<()> {
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == required) {
            return Err(AppError::Schema {
                file: path.display().to_string(),
                column: required.to_string(),
            });
        }
    }
    Ok(())
}

/// Read one comma separated export (header row required) into typed records,
/// keeping the file's row order.
pub fn load_file(path: &Path) -> AppResult<Vec<TimeRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| parse_error(path, e))?;

    let headers = rdr.headers().map_err(|e| parse_error(path, e))?.clone();
    check_schema(path, &headers)?;

    rdr.deserialize::<TimeRecord>()
        .map(|r| r.map_err(|e| parse_error(path, e)))
        .collect()
}

/// Load every file in the given order and concatenate their rows.
pub fn load_records(paths: &[PathBuf]) -> AppResult<Vec<TimeRecord>> {
    let mut all = Vec::new();
    for path in paths {
        all.extend(load_file(path)?);
    }
    Ok(all)
}
