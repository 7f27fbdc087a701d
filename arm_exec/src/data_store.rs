//! # Data Store

use comms_if::eqpt::arm::Preset;

use crate::preset_ctrl;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u64,

    /// Time of the current cycle measured in cycle periods since the start of
    /// the execution.
    ///
    /// Units: seconds
    pub cycle_time_s: f64,

    // PresetCtrl
    pub preset_ctrl: preset_ctrl::PresetCtrl,

    /// Held between cycles, only telecommands change it.
    pub preset_ctrl_input: preset_ctrl::InputData,
    pub preset_ctrl_output: Preset,
    pub preset_ctrl_status_rpt: preset_ctrl::StatusReport,

    // Monitoring Counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Perform actions required at the start of a cycle.
    pub fn cycle_start(&mut self, cycle_period_s: f64) {
        self.cycle_time_s = self.num_cycles as f64 * cycle_period_s;
    }

    /// Perform actions required at the end of a cycle.
    pub fn cycle_end(&mut self) {
        self.num_cycles += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cycle_time() {
        let mut ds = DataStore::default();

        ds.cycle_start(0.02);
        assert_eq!(ds.cycle_time_s, 0.0);
        ds.cycle_end();

        for _ in 0..49 {
            ds.cycle_start(0.02);
            ds.cycle_end();
        }

        ds.cycle_start(0.02);
        assert_eq!(ds.num_cycles, 50);
        assert!((ds.cycle_time_s - 1.0).abs() < 1e-9);
    }
}
