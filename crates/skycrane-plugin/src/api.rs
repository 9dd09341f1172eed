//! The plugin's C ABI: raw data mirrors and the entry-point table.

use std::os::raw::{c_char, c_void};

use skycrane_core::{Control, FPoint, IPoint, Outcome, Turn};

/// C mirror of a 2-D point.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawPoint<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

/// C mirror of one turn snapshot, as the plugin reports it.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawTurnInput {
    /// Remaining propellant.
    pub fuel: i32,
    /// Thrust level.
    pub thrust: i32,
    /// Tilt angle in degrees.
    pub tilt: i32,
    /// Position in field coordinates.
    pub position: RawPoint<i32>,
    /// Velocity in m/s.
    pub velocity: RawPoint<f64>,
}

/// C mirror of the per-turn control output the plugin consumes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawTurnOutput {
    /// Requested thrust level.
    pub thrust: i32,
    /// Requested tilt angle in degrees.
    pub tilt: i32,
}

impl From<RawTurnInput> for Turn {
    fn from(raw: RawTurnInput) -> Self {
        Turn {
            fuel: raw.fuel,
            thrust: raw.thrust,
            tilt: raw.tilt,
            position: IPoint::new(raw.position.x, raw.position.y),
            velocity: FPoint::new(raw.velocity.x, raw.velocity.y),
        }
    }
}

impl From<Control> for RawTurnOutput {
    fn from(control: Control) -> Self {
        RawTurnOutput {
            thrust: control.thrust,
            tilt: control.tilt,
        }
    }
}

/// `BeginSimulation`: NUL-terminated state blob in, opaque context out
/// (null on failure).
pub type BeginFn = unsafe extern "C" fn(state: *const c_char) -> *mut c_void;

/// `EndSimulation`: releases the context and nulls the caller's pointer.
pub type EndFn = unsafe extern "C" fn(ctx: *mut *mut c_void);

/// `GetTurnInput`: snapshot of the context's current turn.
pub type TurnFn = unsafe extern "C" fn(ctx: *mut c_void) -> RawTurnInput;

/// `StepSimulation`: advance one turn under a control output; returns the
/// outcome code (`-1` aerial, `0` landed, `1` crashed, `2` lost).
pub type StepFn = unsafe extern "C" fn(ctx: *mut c_void, output: *const RawTurnOutput) -> i32;

/// The plugin's entry-point table.
///
/// A plain value type: copy it freely, inject stub entry points in tests.
/// Every pointer must follow the contract its type alias documents.
#[derive(Clone, Copy)]
pub struct PluginApi {
    /// Session construction.
    pub begin: BeginFn,
    /// Session release.
    pub end: EndFn,
    /// Current-turn query.
    pub turn: TurnFn,
    /// Discrete step.
    pub step: StepFn,
}

impl PluginApi {
    /// Decode a step return code, reading out-of-contract codes as a lost
    /// craft.
    pub(crate) fn decode_outcome(code: i32) -> Outcome {
        i8::try_from(code)
            .ok()
            .and_then(|code| Outcome::try_from(code).ok())
            .unwrap_or(Outcome::Lost)
    }
}

impl std::fmt::Debug for PluginApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginApi").finish_non_exhaustive()
    }
}

#[cfg(feature = "link")]
mod linked {
    use super::{PluginApi, RawTurnInput, RawTurnOutput};
    use std::os::raw::{c_char, c_void};

    #[link(name = "marslander-plugin")]
    extern "C" {
        fn BeginSimulation(state: *const c_char) -> *mut c_void;
        fn EndSimulation(ctx: *mut *mut c_void);
        fn GetTurnInput(ctx: *mut c_void) -> RawTurnInput;
        fn StepSimulation(ctx: *mut c_void, output: *const RawTurnOutput) -> i32;
    }

    impl PluginApi {
        /// The entry-point table of the statically linked plugin.
        pub fn linked() -> Self {
            PluginApi {
                begin: BeginSimulation,
                end: EndSimulation,
                turn: GetTurnInput,
                step: StepSimulation,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_turn_converts_to_core_turn() {
        let raw = RawTurnInput {
            fuel: 800,
            thrust: 3,
            tilt: -25,
            position: RawPoint { x: 1200, y: 2400 },
            velocity: RawPoint { x: 4.5, y: -21.0 },
        };
        let turn = Turn::from(raw);
        assert_eq!(turn.fuel, 800);
        assert_eq!(turn.position, IPoint::new(1200, 2400));
        assert_eq!(turn.velocity, FPoint::new(4.5, -21.0));
    }

    #[test]
    fn control_converts_to_raw_output() {
        let raw = RawTurnOutput::from(Control {
            thrust: 4,
            tilt: 30,
        });
        assert_eq!(raw, RawTurnOutput { thrust: 4, tilt: 30 });
    }

    #[test]
    fn outcome_codes_decode_with_lost_fallback() {
        assert_eq!(PluginApi::decode_outcome(-1), Outcome::Aerial);
        assert_eq!(PluginApi::decode_outcome(0), Outcome::Landed);
        assert_eq!(PluginApi::decode_outcome(1), Outcome::Crashed);
        assert_eq!(PluginApi::decode_outcome(2), Outcome::Lost);
        assert_eq!(PluginApi::decode_outcome(77), Outcome::Lost);
        assert_eq!(PluginApi::decode_outcome(i32::MIN), Outcome::Lost);
    }
}
