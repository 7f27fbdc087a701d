//! Implementations for the PresetCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, trace};
use serde::Serialize;
use std::convert::Infallible;

// Internal
use super::{evaluate, ArbiterMemory, Interlock, Params, PresetCtrlError};
use comms_if::eqpt::{
    arm::{ArmTlm, Preset},
    hid::ControlSnapshot,
};
use util::{
    archive::{ArchiveError, Archived, Archiver},
    module::State,
    params,
    session::Session,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Preset control module state
#[derive(Default)]
pub struct PresetCtrl {
    pub(crate) params: Params,

    pub(crate) memory: ArbiterMemory,

    pub(crate) report: StatusReport,
    arch_report: Archiver,
}

/// Input data to Preset Control, sampled at the start of the cycle.
#[derive(Clone, Copy, Default, Debug)]
pub struct InputData {
    /// The operator's controls.
    pub controls: ControlSnapshot,

    /// The arm mechanism telemetry.
    pub tlm: ArmTlm,
}

/// Status report for PresetCtrl processing.
#[derive(Clone, Copy, Default, Serialize, Debug, PartialEq)]
pub struct StatusReport {
    pub arm_gate: bool,
    pub elev_gate: bool,
    pub telescope_gate: bool,
    pub wrist_gate: bool,
    pub pov_gate: bool,

    /// True if all manual gates are open.
    pub manual_allowed: bool,

    /// The request before the interlock.
    pub raw_request: Preset,

    /// The commanded preset.
    pub preset: Preset,

    /// The last committed preset after this cycle.
    pub last_preset: Preset,

    pub interlock: Interlock,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for PresetCtrl {
    type InitData = &'static str;
    type InitError = PresetCtrlError;

    type InputData = InputData;
    type OutputData = Preset;
    type StatusReport = StatusReport;
    type ProcError = Infallible;

    /// Initialise the PresetCtrl module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(
        &mut self,
        init_data: Self::InitData,
        session: &Session,
    ) -> Result<(), Self::InitError> {
        let params: Params = params::load(init_data)?;
        params.validate()?;
        self.params = params;

        self.arch_report = Archiver::from_path(session, "preset_ctrl/status_report.csv")?;

        self.reset();

        Ok(())
    }

    /// Perform cyclic processing of Preset Control.
    fn proc(
        &mut self,
        input_data: &Self::InputData,
    ) -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError> {
        let prev_preset = self.report.preset;
        let prev_last = self.memory.last_preset;

        let decision = evaluate(
            &input_data.controls,
            &input_data.tlm,
            self.memory,
            &self.params,
        );

        self.memory = decision.memory;

        self.report = StatusReport {
            arm_gate: decision.gates.arm,
            elev_gate: decision.gates.elev,
            telescope_gate: decision.gates.telescope,
            wrist_gate: decision.gates.wrist,
            pov_gate: decision.gates.pov,
            manual_allowed: decision.gates.status(),
            raw_request: decision.memory.latched_request,
            preset: decision.preset,
            last_preset: decision.memory.last_preset,
            interlock: decision.interlock,
        };

        trace!("PresetCtrl {:?}, {:?}", input_data, self.report);

        match decision.interlock {
            Interlock::Redirect if prev_last != Preset::Mid => debug!(
                "Interlock redirected {:?} to Mid (last preset {:?})",
                self.report.raw_request, prev_last
            ),
            Interlock::TransientStop if prev_preset != Preset::Mid => debug!(
                "Interlock holding at Mid before {:?}, elevator at {} ticks",
                self.report.raw_request, input_data.tlm.elevator_ticks
            ),
            _ => (),
        }

        if self.report.preset != prev_preset {
            info!(
                "Preset changed {:?} -> {:?} (requested {:?})",
                prev_preset, self.report.preset, self.report.raw_request
            );
        }

        Ok((self.report.preset, self.report))
    }
}

impl Archived for PresetCtrl {
    fn write(&mut self) -> Result<(), ArchiveError> {
        self.arch_report.serialise(self.report)
    }
}

impl PresetCtrl {
    /// Create a new PresetCtrl from the given parameters, without archiving.
    pub fn with_params(params: Params) -> Result<Self, PresetCtrlError> {
        params.validate()?;

        Ok(Self {
            params,
            ..Default::default()
        })
    }

    /// Return the arbiter to its power-on state.
    pub fn reset(&mut self) {
        self.memory = ArbiterMemory::default();
        self.report = StatusReport::default();

        info!("PresetCtrl reset, preset memory cleared");
    }

    /// True if the module has an open archive.
    pub fn is_archiving(&self) -> bool {
        self.arch_report.is_init()
    }

    /// The raw request of the last cycle, before the interlock.
    pub fn get_preset(&self) -> Preset {
        self.memory.latched_request
    }

    /// The preset motion control must target this cycle.
    pub fn get_preset_state(&self) -> Preset {
        self.report.preset
    }

    /// The last committed preset.
    pub fn get_last_preset(&self) -> Preset {
        self.memory.last_preset
    }

    /// True if all controls, excluding the POV hat and the wrist, permit presets.
    pub fn get_status(&self) -> bool {
        self.report.manual_allowed
    }

    /// True if the arm controls permit presets.
    pub fn get_arm_status(&self) -> bool {
        self.report.arm_gate
    }

    /// True if the elevator controls permit presets.
    pub fn get_elev_status(&self) -> bool {
        self.report.elev_gate
    }

    /// True if the telescope controls permit presets.
    pub fn get_telescope_status(&self) -> bool {
        self.report.telescope_gate
    }

    /// True if a preset is being requested from the POV hat or the preset buttons.
    pub fn get_pov_status(&self) -> bool {
        self.report.pov_gate
    }

    /// True if the wrist controls permit presets.
    pub fn get_wrist_status(&self) -> bool {
        self.report.wrist_gate
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use comms_if::eqpt::hid::PovDirection;

    fn input(controls: ControlSnapshot, tlm: ArmTlm) -> InputData {
        InputData { controls, tlm }
    }

    fn pov(dir: PovDirection) -> ControlSnapshot {
        ControlSnapshot {
            pov: Some(dir),
            pov_button_count: 12,
            ..Default::default()
        }
    }

    #[test]
    fn test_power_on_state() {
        let ctrl = PresetCtrl::with_params(Params::default()).unwrap();

        assert_eq!(ctrl.get_preset(), Preset::Manual);
        assert_eq!(ctrl.get_preset_state(), Preset::Manual);
        assert_eq!(ctrl.get_last_preset(), Preset::Manual);
        assert!(!ctrl.is_archiving());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = Params {
            axis_deadband: -0.2,
            ..Default::default()
        };

        match PresetCtrl::with_params(params) {
            Err(PresetCtrlError::InvalidParams(_)) => (),
            Err(e) => panic!("Expected invalid params, got {}", e),
            Ok(_) => panic!("Expected invalid params"),
        }
    }

    #[test]
    fn test_proc_sequence() {
        let mut ctrl = PresetCtrl::with_params(Params::default()).unwrap();

        // Request High from a retracted arm
        let (preset, report) = ctrl
            .proc(&input(pov(PovDirection::Up), ArmTlm::default()))
            .unwrap();
        assert_eq!(preset, Preset::Mid);
        assert_eq!(report.raw_request, Preset::High);
        assert_eq!(report.interlock, Interlock::Redirect);
        assert_eq!(ctrl.get_preset(), Preset::High);
        assert_eq!(ctrl.get_preset_state(), Preset::Mid);
        assert_eq!(ctrl.get_last_preset(), Preset::Mid);

        // Arm reaches Mid with the telescope out
        let tlm = ArmTlm {
            telescope_ticks: 7100,
            arm_at_preset: true,
            ..Default::default()
        };
        let (preset, _) = ctrl.proc(&input(pov(PovDirection::Up), tlm)).unwrap();
        assert_eq!(preset, Preset::High);
        assert_eq!(ctrl.get_last_preset(), Preset::High);

        // Operator lets go of everything with the arm raised
        let tlm = ArmTlm {
            arm_angle_deg: 70.0,
            telescope_ticks: 7100,
            ..Default::default()
        };
        let (preset, report) = ctrl.proc(&input(ControlSnapshot::default(), tlm)).unwrap();
        assert_eq!(preset, Preset::Manual);
        assert_eq!(report.interlock, Interlock::Manual);
        assert_eq!(ctrl.get_last_preset(), Preset::High);
    }

    #[test]
    fn test_gate_accessors() {
        let mut ctrl = PresetCtrl::with_params(Params::default()).unwrap();

        let controls = ControlSnapshot {
            elevator_axis: 0.9,
            wrist_block_b: true,
            telescope_block_a: true,
            climb_button: true,
            ..Default::default()
        };
        ctrl.proc(&input(controls, ArmTlm::default())).unwrap();

        assert!(ctrl.get_arm_status());
        assert!(!ctrl.get_elev_status());
        assert!(!ctrl.get_telescope_status());
        assert!(!ctrl.get_wrist_status());
        assert!(ctrl.get_pov_status());
        assert!(!ctrl.get_status());
        assert_eq!(ctrl.get_preset(), Preset::Climb);
        assert_eq!(ctrl.get_preset_state(), Preset::Climb);
    }

    #[test]
    fn test_reset() {
        let mut ctrl = PresetCtrl::with_params(Params::default()).unwrap();

        ctrl.proc(&input(pov(PovDirection::Right), ArmTlm::default()))
            .unwrap();
        assert_eq!(ctrl.get_last_preset(), Preset::Ball);

        ctrl.reset();
        assert_eq!(ctrl.get_preset(), Preset::Manual);
        assert_eq!(ctrl.get_preset_state(), Preset::Manual);
        assert_eq!(ctrl.get_last_preset(), Preset::Manual);
    }

    #[test]
    fn test_write_without_archive() {
        let mut ctrl = PresetCtrl::with_params(Params::default()).unwrap();

        match ctrl.write() {
            Err(ArchiveError::NotInitialised) => (),
            r => panic!("Expected not initialised, got {:?}", r),
        }
    }
}
