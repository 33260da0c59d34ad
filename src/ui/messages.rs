//! Status lines for the user. They all go to stderr: stdout carries only the
//! report, so `worktime ... > report.txt` stays clean.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    /// Coloured icon prefix, message left as is.
    pub fn line<T: fmt::Display>(self, msg: T) -> String {
        format!("{}{}{}{} {}", self.color(), BOLD, self.icon(), RESET, msg)
    }
}

pub fn emit<T: fmt::Display>(level: Level, msg: T) {
    eprintln!("{}", level.line(msg));
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}
