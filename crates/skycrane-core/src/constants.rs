//! Limits and dimensions of the lander simulation zone.
//!
//! These mirror the fixed parameters of the external simulation; the
//! playback engine uses them for load-time validation, tilt rate limiting,
//! and surface projection.

use crate::geom::FPoint;

/// Gravitational acceleration, m/s².
pub const MARS_GRAVITY_ACC: f64 = -3.711;

/// Maximum propellant load, litres.
pub const FUEL_AMOUNT_MAX: i32 = 2000;

/// Maximum safe horizontal landing speed, m/s.
pub const SPEED_LIMIT_HORZ: i32 = 20;

/// Maximum safe vertical landing speed, m/s.
pub const SPEED_LIMIT_VERT: i32 = 40;

/// Minimum width of the flat safe-landing segment, metres.
pub const SURFACE_FLAT_WIDTH_MIN: i32 = 1000;

/// Maximum thrust change per turn.
pub const THRUST_DELTA_ABS: i32 = 1;

/// Thrust level range.
pub const THRUST_POWER_MIN: i32 = 0;
/// Maximum thrust level.
pub const THRUST_POWER_MAX: i32 = 4;

/// Tilt angle range, degrees.
pub const TILT_ANGLE_MIN: i32 = -90;
/// Maximum tilt angle, degrees.
pub const TILT_ANGLE_MAX: i32 = 90;

/// Maximum tilt change per turn, degrees.
///
/// Doubles as the visual tilt rate limit: blended tilt never rotates
/// faster than this many degrees per scheduler time unit.
pub const TILT_DELTA_ABS: i32 = 15;

/// Simulation zone width, metres.
pub const ZONE_WIDTH: i32 = 7000;
/// Simulation zone height, metres.
pub const ZONE_HEIGHT: i32 = 3000;

/// Largest valid x coordinate.
pub const ZONE_X_MAX: i32 = ZONE_WIDTH - 1;
/// Largest valid y coordinate.
pub const ZONE_Y_MAX: i32 = ZONE_HEIGHT - 1;

/// Hard cap on discrete steps per session.
pub const STEPS_LIMIT: usize = 256;

/// Extent of the simulation field used for render projection.
pub const FIELD_EXTENT: FPoint = FPoint {
    x: ZONE_X_MAX as f64,
    y: ZONE_Y_MAX as f64,
};
