use crate::export::OutputFormat;
use clap::Parser;

/// Command-line interface definition for worktime
/// CLI application to sum tracked hours per month and compute the amount owed
#[derive(Parser, Debug)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calculate total hours and total amount in BRL (R$) from time-tracking CSV exports",
    long_about = None
)]
pub struct Cli {
    /// Hour price in BRL (R$)
    #[arg(
        long = "hour-price",
        env = "HOUR_PRICE",
        value_name = "RATE",
        help = "Hour price in BRL (R$), defaults to $HOUR_PRICE"
    )]
    pub hour_price: Option<f64>,

    /// Member identifier, the token between parentheses in "Member name(s)"
    #[arg(
        long = "member",
        env = "MEMBER",
        value_name = "ID",
        help = "Member identifier (e.g. jdoe), defaults to $MEMBER"
    )]
    pub member: Option<String>,

    /// Output rendering of the report
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print progress messages on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path(s) to the CSV export file(s)
    #[arg(required = true, value_name = "FILE")]
    pub paths: Vec<String>,
}
