//! Preset arbitration
//!
//! Pure per-cycle decision function. Everything carried from one cycle to the
//! next lives in [`ArbiterMemory`], which is passed in and handed back.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::{Gates, Interlock, Params};
use comms_if::eqpt::{
    arm::{ArmTlm, Preset},
    hid::{ControlSnapshot, PovDirection},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// State carried between cycles.
#[derive(Clone, Copy, Default, Serialize, Debug, PartialEq, Eq)]
pub struct ArbiterMemory {
    /// The preset the mechanism was last committed to move toward.
    ///
    /// Never holds a preset which was only passed through for a single cycle.
    pub last_preset: Preset,

    /// The raw request of the previous cycle, held while the operator is using
    /// the manual controls without requesting anything new.
    pub latched_request: Preset,
}

/// Everything decided in one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// The preset to command this cycle.
    pub preset: Preset,

    /// Memory to pass to the next cycle.
    pub memory: ArbiterMemory,

    /// How the interlock handled the raw request.
    pub interlock: Interlock,

    /// The gates evaluated from this cycle's controls.
    pub gates: Gates,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Decide the preset to command this cycle.
///
/// Returns the preset and the memory for the next cycle.
pub fn decide(
    controls: &ControlSnapshot,
    tlm: &ArmTlm,
    memory: ArbiterMemory,
    params: &Params,
) -> (Preset, ArbiterMemory) {
    let decision = evaluate(controls, tlm, memory, params);

    (decision.preset, decision.memory)
}

/// Run the full arbitration for one cycle.
pub fn evaluate(
    controls: &ControlSnapshot,
    tlm: &ArmTlm,
    memory: ArbiterMemory,
    params: &Params,
) -> Decision {
    let gates = Gates::from_controls(controls, params);

    let raw = request(controls, &gates, memory.latched_request);

    let interlock = Interlock::evaluate(raw, memory.last_preset, tlm, params);
    let (preset, last_preset) = interlock.resolve(raw, memory.last_preset, tlm, params);

    Decision {
        preset,
        memory: ArbiterMemory {
            last_preset,
            latched_request: raw,
        },
        interlock,
        gates,
    }
}

/// Turn the controls into a raw request.
///
/// The POV hat has priority over the high ball button, which has priority over
/// the climb button. With nothing pressed the request becomes `Manual` if all
/// manual gates are open, otherwise `latched` is kept.
pub fn request(controls: &ControlSnapshot, gates: &Gates, latched: Preset) -> Preset {
    match controls.pov {
        Some(PovDirection::Down) => Preset::Low,
        Some(PovDirection::Left) => Preset::Mid,
        Some(PovDirection::Up) => Preset::High,
        Some(PovDirection::Right) => Preset::Ball,
        None if controls.high_ball_button => Preset::HighBall,
        None if controls.climb_button => Preset::Climb,
        None if gates.status() => Preset::Manual,
        None => latched,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pov(dir: PovDirection) -> ControlSnapshot {
        ControlSnapshot {
            pov: Some(dir),
            pov_button_count: 12,
            ..Default::default()
        }
    }

    fn driving_arm() -> ControlSnapshot {
        ControlSnapshot {
            arm_axis: 0.6,
            ..Default::default()
        }
    }

    fn memory(last_preset: Preset) -> ArbiterMemory {
        ArbiterMemory {
            last_preset,
            latched_request: last_preset,
        }
    }

    fn tlm(telescope_ticks: i64, elevator_ticks: i64) -> ArmTlm {
        ArmTlm {
            telescope_ticks,
            elevator_ticks,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_memory() {
        let m = ArbiterMemory::default();
        assert_eq!(m.last_preset, Preset::Manual);
        assert_eq!(m.latched_request, Preset::Manual);
    }

    #[test]
    fn test_request_pov_mapping() {
        let gates = Gates::default();

        assert_eq!(request(&pov(PovDirection::Down), &gates, Preset::Manual), Preset::Low);
        assert_eq!(request(&pov(PovDirection::Left), &gates, Preset::Manual), Preset::Mid);
        assert_eq!(request(&pov(PovDirection::Up), &gates, Preset::Manual), Preset::High);
        assert_eq!(request(&pov(PovDirection::Right), &gates, Preset::Manual), Preset::Ball);
    }

    #[test]
    fn test_request_priority() {
        let params = Params::default();

        // POV beats both buttons
        let mut c = pov(PovDirection::Down);
        c.climb_button = true;
        c.high_ball_button = true;
        assert_eq!(request(&c, &Gates::from_controls(&c, &params), Preset::Mid), Preset::Low);

        // High ball beats climb
        c.pov = None;
        assert_eq!(
            request(&c, &Gates::from_controls(&c, &params), Preset::Mid),
            Preset::HighBall
        );

        c.high_ball_button = false;
        assert_eq!(request(&c, &Gates::from_controls(&c, &params), Preset::Mid), Preset::Climb);

        // Buttons beat a busy manual gate
        c.arm_axis = 1.0;
        assert_eq!(request(&c, &Gates::from_controls(&c, &params), Preset::Mid), Preset::Climb);
    }

    #[test]
    fn test_request_fallback() {
        let params = Params::default();

        let idle = ControlSnapshot::default();
        assert_eq!(
            request(&idle, &Gates::from_controls(&idle, &params), Preset::High),
            Preset::Manual
        );

        let busy = driving_arm();
        assert_eq!(
            request(&busy, &Gates::from_controls(&busy, &params), Preset::High),
            Preset::High
        );
    }

    #[test]
    fn test_pov_request_without_button_count() {
        let params = Params::default();
        let mut c = pov(PovDirection::Down);
        c.pov_button_count = 0;

        let gates = Gates::from_controls(&c, &params);
        assert!(!gates.pov);
        assert_eq!(request(&c, &gates, Preset::Ball), Preset::Low);

        let (preset, m) = decide(&c, &tlm(0, 0), ArbiterMemory::default(), &params);
        assert_eq!(m.latched_request, Preset::Low);
        assert_eq!(preset, Preset::Low);

        // No direction and no buttons is no request at all
        c.pov = None;
        assert_eq!(
            request(&c, &Gates::from_controls(&c, &params), Preset::Ball),
            Preset::Manual
        );
    }

    #[test]
    fn test_manual_rebuilds_memory() {
        let params = Params::default();
        let idle = ControlSnapshot::default();

        let raised = ArmTlm {
            arm_angle_deg: 46.0,
            telescope_ticks: 7000,
            ..Default::default()
        };
        let (preset, m) = decide(&idle, &raised, memory(Preset::Ball), &params);
        assert_eq!(preset, Preset::Manual);
        assert_eq!(m.last_preset, Preset::High);

        for t in [
            ArmTlm { arm_angle_deg: 45.0, telescope_ticks: 9000, ..Default::default() },
            ArmTlm { arm_angle_deg: 80.0, telescope_ticks: 6999, ..Default::default() },
            ArmTlm::default(),
        ]
        .iter()
        {
            let (preset, m) = decide(&idle, t, memory(Preset::High), &params);
            assert_eq!(preset, Preset::Manual);
            assert_eq!(m.last_preset, Preset::Low);
        }
    }

    #[test]
    fn test_no_direct_extension() {
        let params = Params::default();

        for c in [pov(PovDirection::Up), ControlSnapshot { high_ball_button: true, ..Default::default() }]
            .iter()
        {
            for telescope_ticks in [0, 3500, 6999].iter() {
                let (preset, m) = decide(c, &tlm(*telescope_ticks, 0), memory(Preset::Low), &params);
                assert_eq!(preset, Preset::Mid);
                assert_eq!(m.last_preset, Preset::Mid);
            }
        }
    }

    #[test]
    fn test_ball_to_low_transient_stop() {
        let params = Params::default();

        let (preset, m) = decide(
            &pov(PovDirection::Down),
            &tlm(0, 1000),
            memory(Preset::Ball),
            &params,
        );

        assert_eq!(preset, Preset::Mid);
        assert_eq!(m.last_preset, Preset::Ball);
        assert_eq!(m.latched_request, Preset::Low);
    }

    #[test]
    fn test_high_is_stable() {
        let params = Params::default();
        let c = pov(PovDirection::Up);
        let t = tlm(7200, 0);

        for start in [Preset::High, Preset::HighBall].iter() {
            let mut m = memory(*start);
            for _ in 0..10 {
                let (preset, next) = decide(&c, &t, m, &params);
                assert_eq!(preset, Preset::High);
                m = next;
            }
            assert_eq!(m.last_preset, Preset::High);
        }
    }

    #[test]
    fn test_high_ball_is_stable() {
        let params = Params::default();
        let c = ControlSnapshot {
            high_ball_button: true,
            ..Default::default()
        };
        let t = tlm(7000, 0);

        let mut m = memory(Preset::HighBall);
        for _ in 0..10 {
            let (preset, next) = decide(&c, &t, m, &params);
            assert_eq!(preset, Preset::HighBall);
            assert_eq!(next.last_preset, Preset::HighBall);
            m = next;
        }
    }

    #[test]
    fn test_pov_beats_climb_in_decision() {
        let params = Params::default();
        let mut c = pov(PovDirection::Down);
        c.climb_button = true;

        let (_, m) = decide(&c, &tlm(0, 0), ArbiterMemory::default(), &params);
        assert_eq!(m.latched_request, Preset::Low);
    }

    #[test]
    fn test_ball_from_low_with_telescope_out() {
        let params = Params::default();

        let (preset, m) = decide(
            &pov(PovDirection::Right),
            &tlm(8000, 0),
            memory(Preset::Low),
            &params,
        );

        assert_eq!(preset, Preset::Ball);
        assert_eq!(m.last_preset, Preset::Ball);
    }

    #[test]
    fn test_latched_request_persists() {
        let params = Params::default();

        // Request Ball from rest
        let (preset, m) = decide(&pov(PovDirection::Right), &tlm(0, 0), memory(Preset::Low), &params);
        assert_eq!(preset, Preset::Ball);

        // Release the hat while jogging the arm, Ball is still requested
        let (preset, m) = decide(&driving_arm(), &tlm(0, 0), m, &params);
        assert_eq!(preset, Preset::Ball);
        assert_eq!(m.latched_request, Preset::Ball);

        // Release everything, control goes back to manual
        let (preset, m) = decide(&ControlSnapshot::default(), &tlm(0, 0), m, &params);
        assert_eq!(preset, Preset::Manual);
        assert_eq!(m.latched_request, Preset::Manual);
        assert_eq!(m.last_preset, Preset::Low);
    }

    #[test]
    fn test_low_to_high_sequence() {
        let params = Params::default();
        let c = pov(PovDirection::Up);

        // Stop at Mid while the telescope is in
        let (preset, m) = decide(&c, &tlm(0, 0), memory(Preset::Low), &params);
        assert_eq!(preset, Preset::Mid);

        // Telescope out but the arm hasn't reached Mid yet
        let (preset, m) = decide(&c, &tlm(7500, 0), m, &params);
        assert_eq!(preset, Preset::Mid);

        // Arm settled at Mid, go to High
        let t = ArmTlm {
            telescope_ticks: 7500,
            arm_at_preset: true,
            ..Default::default()
        };
        let (preset, m) = decide(&c, &t, m, &params);
        assert_eq!(preset, Preset::High);
        assert_eq!(m.last_preset, Preset::High);
    }

    #[test]
    fn test_evaluate_reports() {
        let params = Params::default();
        let mut c = pov(PovDirection::Up);
        c.wrist_block_a = true;

        let d = evaluate(&c, &tlm(0, 0), memory(Preset::Low), &params);

        assert_eq!(d.interlock, Interlock::Redirect);
        assert_eq!(d.memory.latched_request, Preset::High);
        assert!(d.gates.status());
        assert!(d.gates.pov);
        assert!(!d.gates.wrist);
    }
}
