use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;

/// Settings for one report run.
///
/// Resolved once at startup from the command line, with `HOUR_PRICE` and
/// `MEMBER` (environment or `.env`) as fallbacks, then passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub hour_price: f64,
    pub member: String,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Config {
    pub fn new(hour_price: f64, member: impl Into<String>) -> AppResult<Self> {
        let member = member.into();

        if !hour_price.is_finite() || hour_price <= 0.0 {
            return Err(AppError::Config(format!(
                "hour price must be a positive number, got {}",
                hour_price
            )));
        }

        if member.trim().is_empty() {
            return Err(AppError::Config("member identifier is empty".into()));
        }

        Ok(Self {
            hour_price,
            member,
            format: OutputFormat::Table,
            verbose: false,
        })
    }

    /// Build the config from parsed CLI arguments.
    pub fn resolve(cli: &Cli) -> AppResult<Self> {
        let hour_price = cli.hour_price.ok_or_else(|| {
            AppError::Config("hour price not set: pass --hour-price or set HOUR_PRICE".into())
        })?;

        let member = cli.member.clone().ok_or_else(|| {
            AppError::Config("member not set: pass --member or set MEMBER".into())
        })?;

        let mut cfg = Self::new(hour_price, member)?;
        cfg.format = cli.format.clone();
        cfg.verbose = cli.verbose;
        Ok(cfg)
    }
}
