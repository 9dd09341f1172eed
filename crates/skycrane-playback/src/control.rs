//! Control input plumbing for live sessions.
//!
//! The scheduling model is single-threaded and cooperative, so the UI half
//! and the live source share a plain [`Cell`] behind an [`Rc`]: input
//! handlers write whenever they fire, and the source reads exactly once per
//! advance.

use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;

use skycrane_core::{Control, ControlInput, FPoint};

/// Shared control cell; clones observe the same value.
#[derive(Clone, Debug, Default)]
pub struct SharedControl {
    inner: Rc<Cell<Control>>,
}

impl SharedControl {
    /// A fresh cell holding the zero control (no thrust, upright).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current control value.
    pub fn get(&self) -> Control {
        self.inner.get()
    }

    /// Replace the whole control value.
    pub fn set(&self, control: Control) {
        self.inner.set(control);
    }

    /// Set the requested thrust level.
    pub fn set_thrust(&self, thrust: i32) {
        let mut c = self.inner.get();
        c.thrust = thrust;
        self.inner.set(c);
    }

    /// Set the requested tilt angle.
    pub fn set_tilt(&self, tilt: i32) {
        let mut c = self.inner.get();
        c.tilt = tilt;
        self.inner.set(c);
    }

    /// Re-center the craft (tilt 0).
    pub fn center(&self) {
        self.set_tilt(0);
    }
}

impl ControlInput for SharedControl {
    fn control(&self) -> Control {
        self.inner.get()
    }
}

/// Tilt angle for a pointer offset from the craft, in degrees.
///
/// `offset` is pointer position minus craft position in screen
/// coordinates. Pointing straight up is 0, left leans positive, right
/// leans negative, matching the simulation's tilt convention.
pub fn tilt_toward(offset: FPoint) -> i32 {
    (180.0 * offset.y.atan2(offset.x) / PI).round() as i32 - 90
}
