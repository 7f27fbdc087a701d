//! # Telecommand processor module
//!
//! The telecommand processor handles various TCs coming from any source.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use arm_lib::data_store::DataStore;
use comms_if::tc::Tc;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Execute a telecommand.
///
/// Mutates the datastore so the held inputs of each module reflect the TC.
pub(crate) fn exec(ds: &mut DataStore, tc: &Tc) {
    match tc {
        Tc::Controls(c) => {
            debug!("New controls: {:?}", c);
            ds.preset_ctrl_input.controls = *c;
        }
        Tc::Telemetry(t) => {
            debug!("New arm telemetry: {:?}", t);
            ds.preset_ctrl_input.tlm = *t;
        }
        Tc::ResetPresets => {
            debug!("Recieved ResetPresets command");
            ds.preset_ctrl.reset();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use comms_if::eqpt::{
        arm::{ArmTlm, Preset},
        hid::ControlSnapshot,
    };
    use util::{
        module::State,
        script_interpreter::{PendingTcs, ScriptInterpreter},
    };

    const CYCLE_PERIOD_S: f64 = 0.02;

    #[test]
    fn test_exec_holds_inputs() {
        let mut ds = DataStore::default();

        let controls = ControlSnapshot {
            climb_button: true,
            ..Default::default()
        };
        exec(&mut ds, &Tc::Controls(controls));

        let tlm = ArmTlm {
            telescope_ticks: 1234,
            ..Default::default()
        };
        exec(&mut ds, &Tc::Telemetry(tlm));

        assert_eq!(ds.preset_ctrl_input.controls, controls);
        assert_eq!(ds.preset_ctrl_input.tlm, tlm);
    }

    #[test]
    fn test_replay_low_to_high_script() {
        let mut script = ScriptInterpreter::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../scripts/low_to_high.arm"
        ))
        .unwrap();

        let mut ds = DataStore::default();
        let mut history: Vec<Preset> = vec![];

        loop {
            ds.cycle_start(CYCLE_PERIOD_S);

            match script.get_pending_tcs(ds.cycle_time_s) {
                PendingTcs::None => (),
                PendingTcs::Some(tcs) => {
                    for tc in tcs.iter() {
                        exec(&mut ds, tc);
                    }
                }
                PendingTcs::EndOfScript => break,
            }

            let (preset, _) = ds.preset_ctrl.proc(&ds.preset_ctrl_input).unwrap();
            if history.last() != Some(&preset) {
                history.push(preset);
            }

            ds.cycle_end();
        }

        // Ball is never reached directly from High with the telescope out
        assert_eq!(
            history,
            vec![
                Preset::Manual,
                Preset::Mid,
                Preset::High,
                Preset::Manual,
                Preset::Mid,
                Preset::Manual,
            ]
        );
        assert_eq!(ds.preset_ctrl.get_last_preset(), Preset::High);
    }
}
