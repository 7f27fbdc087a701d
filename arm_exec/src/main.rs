//! Main arm executable entry point.
//! 
//! # Architecture
//! 
//! The general execution methodology consists of:
//! 
//!     - Initialise all modules
//!     - Main loop:
//!         - Telecommand processing, updating the held controls and telemetry
//!         - Preset control processing
//!         - Archiving
//!         - Cycle management
//! 
//! # Modules
//! 
//! All modules (e.g. `preset_ctrl`) shall meet the following requirements:
//!     1. Provide a public struct implementing the `util::module::State` trait.
//!     

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use arm_lib::{data_store::DataStore, params::ArmExecParams};

mod tc_processor;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::{eyre, WrapErr}, Report};
use log::{debug, info, warn};
use std::env;
use std::thread;
use std::time::{Duration, Instant};

// Internal
use util::{
    archive::Archived,
    logger::{logger_init, LevelFilter},
    module::State,
    script_interpreter::{PendingTcs, ScriptInterpreter},
    session::Session,
};

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    // ---- EARLY INITIALISATION ----

    let session = Session::new(
        "arm_exec", 
        "sessions"
    ).wrap_err("Failed to create the session")?;

    logger_init(LevelFilter::Debug, &session)
        .wrap_err("Failed to initialise logging")?;

    info!("Arm Preset Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let exec_params: ArmExecParams = util::params::load(
        "arm_exec.toml"
    ).wrap_err("Could not load exec params")?;

    if !exec_params.cycle_period_s.is_finite() || exec_params.cycle_period_s <= 0.0 {
        return Err(eyre!(
            "Cycle period must be a positive number of seconds, found {}",
            exec_params.cycle_period_s
        ));
    }

    info!("Exec parameters loaded: {:?}", exec_params);

    // ---- LOAD SCRIPT ----

    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    let script_path = script_path_arg(&args)?;

    info!("Loading script from \"{}\"", script_path);

    let mut script = ScriptInterpreter::new(script_path)
        .wrap_err("Failed to load script")?;

    info!(
        "Loaded script lasts {:.02} s and contains {} TCs\n",
        script.get_duration(),
        script.get_num_tcs()
    );

    // ---- INITIALISE MODULES ----

    info!("Initialising modules...");

    let mut ds = DataStore::default();

    ds.preset_ctrl.init("preset_ctrl.toml", &session)
        .wrap_err("Failed to initialise PresetCtrl")?;
    info!("PresetCtrl init complete");

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    let cycle_period = Duration::from_secs_f64(exec_params.cycle_period_s);

    loop {

        let cycle_start_instant = Instant::now();

        ds.cycle_start(exec_params.cycle_period_s);

        // ---- TELECOMMAND PROCESSING ----

        match script.get_pending_tcs(ds.cycle_time_s) {
            PendingTcs::None => (),
            PendingTcs::Some(tc_vec) => {
                for tc in tc_vec.iter() {
                    tc_processor::exec(&mut ds, tc);
                }
            }
            PendingTcs::EndOfScript => {
                info!("End of TC script reached, stopping");
                break
            }
        }

        // ---- CONTROL ALGORITHM PROCESSING ----

        match ds.preset_ctrl.proc(&ds.preset_ctrl_input) {
            Ok((o, r)) => {
                ds.preset_ctrl_output = o;
                ds.preset_ctrl_status_rpt = r;
            }
            Err(e) => match e {}
        }

        // ---- WRITE ARCHIVES ----

        if let Err(e) = ds.preset_ctrl.write() {
            warn!("Could not archive PresetCtrl: {}", e);
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            },
            None => {
                warn!(
                    "Cycle overran by {:.06} s", 
                    (cycle_dur - cycle_period).as_secs_f64()
                );
                ds.num_consec_cycle_overruns += 1;

                if ds.num_consec_cycle_overruns > exec_params.max_consec_cycle_overruns {
                    return Err(eyre!(
                        "More than {} consecutive cycle overruns", 
                        exec_params.max_consec_cycle_overruns
                    ));
                }
            }
        }

        ds.cycle_end();
    }

    // ---- SHUTDOWN ----

    info!(
        "Final preset {:?} (last committed {:?}) after {} cycles",
        ds.preset_ctrl_output,
        ds.preset_ctrl.get_last_preset(),
        ds.num_cycles
    );
    info!("End of execution");

    Ok(())
}

/// Get the script path from the CLI arguments, which must be exactly one
/// positional argument after the program name.
fn script_path_arg(args: &[String]) -> Result<&str, Report> {
    match args {
        [_, path] => Ok(path.as_str()),
        _ => Err(eyre!(
            "Expected a single argument (the script path), found {}",
            args.len().saturating_sub(1)
        )),
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_script_path_arg() {
        let args = vec![String::from("arm_exec"), String::from("low_to_high.arm")];
        assert_eq!(script_path_arg(&args).unwrap(), "low_to_high.arm");

        // No program name at all must not underflow the count
        let err = script_path_arg(&[]).unwrap_err();
        assert!(err.to_string().contains("found 0"));

        let args = vec![String::from("arm_exec")];
        assert!(script_path_arg(&args).unwrap_err().to_string().contains("found 0"));

        let args = vec![
            String::from("arm_exec"), String::from("a.arm"), String::from("b.arm")
        ];
        assert!(script_path_arg(&args).unwrap_err().to_string().contains("found 2"));
    }
}
