use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::loader::load_records;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export;
use crate::models::member::MemberId;
use crate::ui::messages::{info, warning};
use crate::utils::format_brl;
use crate::utils::path::resolve_inputs;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // every path is checked before any file is read
    let paths = resolve_inputs(&cli.paths)?;
    let records = load_records(&paths)?;

    if cfg.verbose {
        info(format!(
            "Loaded {} rows from {} file(s)",
            records.len(),
            paths.len()
        ));

        let without_id = records
            .iter()
            .filter(|r| MemberId::extract(&r.member_field).is_none())
            .count();
        if without_id > 0 {
            warning(format!(
                "{} rows have no (member) identifier and were skipped",
                without_id
            ));
        }

        let matched = Core::filter_member(&records, &cfg.member).len();
        info(format!("{} rows matched member '{}'", matched, cfg.member));
    }

    let report = Core::build_report(&records, cfg)?;

    if cfg.verbose {
        info(format!(
            "Report for '{}' at {}/h, {} month(s), rendered as {}",
            report.member,
            format_brl(report.hour_price),
            report.months.len(),
            cfg.format.as_str()
        ));
    }

    let out = export::render(&report, &cfg.format)?;

    print!("{}", out);
    if !out.ends_with('\n') {
        println!();
    }

    Ok(())
}
