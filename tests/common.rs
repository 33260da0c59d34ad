#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str =
    "Card title,Member name(s),Card labels,Start datetime,End datetime,Time (seconds),Time (formatted)";

/// worktime binary with HOUR_PRICE / MEMBER removed, so tests never pick up
/// values from the developer's shell.
pub fn wt() -> Command {
    let mut cmd = cargo_bin_cmd!("worktime");
    cmd.env_remove("HOUR_PRICE").env_remove("MEMBER");
    cmd
}

/// Create a unique CSV path inside the system temp dir and remove any existing file
pub fn temp_csv_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktime.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an arbitrary file, header included.
pub fn write_raw(name: &str, content: &str) -> String {
    let path = temp_csv_path(name);
    fs::write(&path, content).expect("write csv fixture");
    path
}

/// Write `rows` (already comma separated) under the standard export header.
pub fn write_export<S: AsRef<str>>(name: &str, rows: &[S]) -> String {
    let path = temp_csv_path(name);
    let mut content = String::from(HEADER);
    content.push('\n');
    for r in rows {
        content.push_str(r.as_ref());
        content.push('\n');
    }
    fs::write(&path, content).expect("write csv fixture");
    path
}

/// One export row: title, member, labels, start, end, seconds, formatted.
pub fn row(member: &str, start: &str, end: &str, seconds: u64) -> String {
    format!(
        "Task,\"{}\",backend,{},{},{},{}h",
        member,
        start,
        end,
        seconds,
        seconds / 3600
    )
}
