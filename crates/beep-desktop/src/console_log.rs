//! Console logger - prints log records to stderr with a tinted level tag.
//!
//! stdout belongs to the status lines, so diagnostics never mix into it.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use log::{Level, LevelFilter, Log, Metadata, Record};

// Extension trait for log::Level to provide console rendering
trait LevelExt {
    fn color(&self) -> Color;
    fn prefix(&self) -> &'static str;
}

impl LevelExt for Level {
    fn color(&self) -> Color {
        match *self {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Cyan,
            Level::Debug => Color::Grey,
            Level::Trace => Color::DarkGrey,
        }
    }

    fn prefix(&self) -> &'static str {
        match *self {
            Level::Error => "[ERROR]",
            Level::Warn => "[WARN] ",
            Level::Info => "[INFO] ",
            Level::Debug => "[DEBUG]",
            Level::Trace => "[TRACE]",
        }
    }
}

pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{} {}: {}",
            level.prefix().with(level.color()),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Global logger instance.
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger.
pub fn init(max_level: LevelFilter) {
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(max_level);
        }
        Err(_) => {
            // Logger already set
        }
    }
}

/// Map the number of `-v` flags to a level, warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
