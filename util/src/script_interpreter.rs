//! # Script interpreter module
//!
//! This module provides an interpreter for arm scripts, allowing timed
//! telecommands to be replayed into the executable.
//!
//! A script is a sequence of `<time_s>: <json TC>;` entries, for example:
//!
//! ```text
//! 0.0: {"Telemetry": {"telescope_ticks": 0}};
//! 0.5: {"Controls": {"pov": "Up", "pov_button_count": 12}};
//! ```

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::collections::VecDeque;
use std::path::Path;
use std::fs;
use regex::RegexBuilder;
use thiserror::Error;

// Internal
use comms_if::tc::{Tc, TcParseError};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A command which is scripted to occur at a specific time.
struct Command {
    /// The time the command is supposed to execute at
    exec_time_s: f64,

    /// The Telecommand to run
    tc: Tc
}

/// A script interpreter.
///
/// After initialising with the path to the script to run use `.get_pending_tcs` to
/// acquire a list of telecommands that need executing.
pub struct ScriptInterpreter {
    cmds: VecDeque<Command>
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Could not find the script at {0}")]
    ScriptNotFound(String),

    #[error("Could not load the script: {0}")]
    ScriptLoadError(std::io::Error),

    #[error("The script is empty (or is so bad it can't be read)")]
    ScriptEmpty,

    #[error(
        "Script contains an invalid timestamp: {0}. \
        Should be a float (like 1.0)")]
    InvalidTimestamp(String),

    #[error("Script contains a TC at {0} s which is earlier than the one before it")]
    OutOfOrder(f64),

    #[error("Script contains an invalid TC at {0} s: {1}")]
    InvalidTc(f64, TcParseError)
}

#[derive(Debug)]
pub enum PendingTcs {
    None,
    Some(Vec<Tc>),
    EndOfScript
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ScriptInterpreter {

    /// Create a new interpreter from the given script path.
    pub fn new<P: AsRef<Path>>(script_path: P) -> Result<Self, ScriptError> {
        let path = script_path.as_ref();
        
        if !path.exists() {
            return Err(
                ScriptError::ScriptNotFound(path.display().to_string()));
        }

        let script = fs::read_to_string(path)
            .map_err(ScriptError::ScriptLoadError)?;

        Self::from_script(&script)
    }

    /// Create a new interpreter from the contents of a script.
    pub fn from_script(script: &str) -> Result<Self, ScriptError> {
        let mut tc_queue: VecDeque<Command> = VecDeque::new();

        // Each entry is `time: payload;`, payloads may not contain `;`
        let re = RegexBuilder::
            new(r"^\s*(\d+(\.\d+)?)\s*:\s*([^;]*);")
            .multi_line(true)
            .build()
            .expect("script regex is valid");

        for cap in re.captures_iter(script) {
            let exec_time_s: f64 = cap[1].parse()
                .map_err(|e| ScriptError::InvalidTimestamp(format!("{}", e)))?;

            if let Some(last) = tc_queue.back() {
                if exec_time_s < last.exec_time_s {
                    return Err(ScriptError::OutOfOrder(exec_time_s));
                }
            }

            let tc = Tc::from_json(cap[3].trim())
                .map_err(|e| ScriptError::InvalidTc(exec_time_s, e))?;

            tc_queue.push_back(Command {
                exec_time_s,
                tc
            });
        }

        if tc_queue.is_empty() {
            return Err(ScriptError::ScriptEmpty)
        }

        Ok(ScriptInterpreter {
            cmds: tc_queue
        })
    }

    /// Return all TCs due at or before `current_time_s`.
    ///
    /// Once every TC has been handed out `EndOfScript` is returned.
    pub fn get_pending_tcs(&mut self, current_time_s: f64) -> PendingTcs {

        if self.cmds.is_empty() {
            return PendingTcs::EndOfScript
        }

        let mut tc_vec: Vec<Tc> = vec![];

        while let Some(cmd) = self.cmds.front() {
            if cmd.exec_time_s > current_time_s {
                break;
            }
            if let Some(cmd) = self.cmds.pop_front() {
                tc_vec.push(cmd.tc);
            }
        }

        if tc_vec.is_empty() {
            PendingTcs::None
        }
        else {
            PendingTcs::Some(tc_vec)
        }
    }

    /// Get the number of TCs remaining in the script
    pub fn get_num_tcs(&self) -> usize {
        self.cmds.len()
    }

    /// Get the length of the script in seconds
    pub fn get_duration(&self) -> f64 {
        match self.cmds.back() {
            Some(c) => c.exec_time_s,
            None => 0f64
        }
    }
}
