//! Logging setup for arm executables
//!
//! Every session logs to two sinks. The terminal shows records at the level
//! chosen by the executable, while the session's log file always keeps the
//! per-cycle trace so a run can be inspected after the fact.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use log::{self, info};
use fern;
use colored::{ColoredString, Colorize};
use thiserror::Error;

// Internal imports
use crate::session;

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Level recorded in the session log file, regardless of the terminal level.
pub const FILE_LEVEL: LevelFilter = LevelFilter::Trace;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("Cannot open the session log file: {0}")]
    LogFileInitError(std::io::Error),

    #[error("A logger has already been set for this process: {0}")]
    FernInitError(log::SetLoggerError)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Initialise the logger for this session.
///
/// `term_level` only filters what is printed to stdout, the log file records
/// everything down to [`FILE_LEVEL`]. Passing `LevelFilter::Off` silences the
/// terminal entirely.
///
/// Must be called at most once per process, a second call returns
/// `FernInitError`.
pub fn logger_init(
    term_level: LevelFilter,
    session: &session::Session
) -> Result<(), LoggerInitError> {

    let log_file = fern::log_file(session.log_file_path.clone())
        .map_err(LoggerInitError::LogFileInitError)?;

    let terminal = fern::Dispatch::new()
        .level(term_level)
        .chain(std::io::stdout());

    let file = fern::Dispatch::new()
        .level(FILE_LEVEL)
        .chain(log_file);

    fern::Dispatch::new()
        .format(|out, message, record| {
            let prefix = format!(
                "[{:10.6} {}]",
                session::get_elapsed_seconds(),
                level_to_str(record.level())
            );

            if shows_target(record.level()) {
                out.finish(format_args!("{} {}: {}", prefix, record.target(), message))
            }
            else {
                out.finish(format_args!("{} {}", prefix, message))
            }
        })
        .level(std::cmp::max(term_level, FILE_LEVEL))
        .chain(terminal)
        .chain(file)
        .apply()
        .map_err(LoggerInitError::FernInitError)?;

    info!("Logging initialised");
    info!("    Session epoch: {}", session::get_epoch());
    info!("    Terminal level: {:?}, file level: {:?}", term_level, FILE_LEVEL);
    info!("    Log file path: {:?}", session.log_file_path);

    Ok(())
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Debug and trace records are per-cycle detail, so they carry the emitting
/// module.
fn shows_target(level: log::Level) -> bool {
    level > log::Level::Info
}

/// Short coloured tag for a level
fn level_to_str(level: log::Level) -> ColoredString {
    match level {
        log::Level::Trace => "TRC".dimmed().italic(),
        log::Level::Debug => "DBG".dimmed(),
        log::Level::Info  => "INF".normal(),
        log::Level::Warn  => "WRN".yellow(),
        log::Level::Error => "ERR".red().bold()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shows_target() {
        assert!(shows_target(log::Level::Trace));
        assert!(shows_target(log::Level::Debug));
        assert!(!shows_target(log::Level::Info));
        assert!(!shows_target(log::Level::Error));
    }

    #[test]
    fn test_level_tags() {
        assert!(level_to_str(log::Level::Trace).to_string().contains("TRC"));
        assert!(level_to_str(log::Level::Warn).to_string().contains("WRN"));
        assert!(level_to_str(log::Level::Error).to_string().contains("ERR"));
    }
}
