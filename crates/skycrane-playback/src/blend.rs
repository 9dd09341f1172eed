//! Blending two discrete turns into continuous visual state.
//!
//! [`blend`] is the pure numeric contract behind the per-frame shuttle
//! pose: position, fuel, and thrust interpolate linearly (rounded to
//! integers in the output), velocity interpolates without rounding, and
//! tilt is rate-limited so the craft never appears to spin faster than
//! [`TILT_DELTA_ABS`] degrees per time unit however large the discrete
//! tilt jump between turns is.

use skycrane_core::constants::TILT_DELTA_ABS;
use skycrane_core::{lerp, FPoint, Turn};

/// Blend `current` and `next` at fractional time `t ∈ [0, 1)`.
///
/// Tilt is special-cased: a steady heading passes `next.tilt` through
/// untouched, and a changing heading rescales the interpolation parameter
/// by `15 / |next.tilt - current.tilt|`. For tilt deltas below 15° the
/// rescaled parameter saturates before `t` reaches 1 — the blended tilt
/// arrives at `next.tilt` early and holds, bounded by the clamp inside
/// [`lerp`].
pub fn blend(current: &Turn, next: &Turn, t: f64) -> Turn {
    let position = FPoint::lerp(current.position.to_f(), next.position.to_f(), t);

    let tilt = if next.tilt == current.tilt {
        f64::from(next.tilt)
    } else {
        let delta = f64::from((next.tilt - current.tilt).abs());
        lerp(
            f64::from(current.tilt),
            f64::from(next.tilt),
            t * f64::from(TILT_DELTA_ABS) / delta,
        )
    };

    Turn {
        fuel: lerp(f64::from(current.fuel), f64::from(next.fuel), t).round() as i32,
        thrust: lerp(f64::from(current.thrust), f64::from(next.thrust), t).round() as i32,
        tilt: tilt.round() as i32,
        position: position.round_to_i(),
        velocity: FPoint::lerp(current.velocity, next.velocity, t),
    }
}

/// The snap variant used at exact turn boundaries: the identity.
pub fn exact(current: &Turn) -> Turn {
    *current
}
