//! Turn snapshots and per-turn control outputs.

use crate::geom::{FPoint, IPoint};

/// Immutable snapshot of one discrete simulation step.
///
/// A turn covers a fixed one-second window of simulated time. Blending two
/// turns produces a new value; a `Turn` is never mutated in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// Remaining propellant, in litres.
    pub fuel: i32,
    /// Thrust level, `0..=4`.
    pub thrust: i32,
    /// Tilt angle in degrees, `-90..=90`; `0` is upright.
    pub tilt: i32,
    /// Position in simulation-field coordinates (metres).
    pub position: IPoint,
    /// Velocity in metres per second.
    pub velocity: FPoint,
}

/// Control output applied at the next discrete step boundary.
///
/// Read by the live source at the moment the step is taken — changes made
/// between steps take effect only at the following boundary, matching the
/// discrete nature of the underlying simulation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Control {
    /// Requested thrust level, `0..=4`.
    pub thrust: i32,
    /// Requested tilt angle in degrees, `-90..=90`.
    pub tilt: i32,
}
