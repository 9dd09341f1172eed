//! Scoped ownership of one native simulation session.

use std::ffi::CString;
use std::os::raw::c_void;
use std::ptr;

use skycrane_core::{Control, Outcome, SimError, Simulation, SimulationHost, Turn};

use crate::api::{PluginApi, RawTurnOutput};

/// Exclusive owner of an opaque plugin context.
///
/// Created by [`begin`](PluginSession::begin), released by
/// [`end`](PluginSession::end) or on drop — whichever comes first; the
/// second is a no-op. The context pointer never escapes this type and is
/// never dereferenced on the Rust side, only passed back to the plugin.
/// Raw-pointer ownership makes the type `!Send`, which matches the
/// single-threaded session model.
#[derive(Debug)]
pub struct PluginSession {
    api: PluginApi,
    ctx: *mut c_void,
}

impl PluginSession {
    /// Begin a session re-seeded from `state`.
    ///
    /// # Errors
    ///
    /// [`SimError::BeginFailed`] when the blob cannot cross the C boundary
    /// or the plugin returns a null context.
    pub fn begin(api: PluginApi, state: &str) -> Result<Self, SimError> {
        let state = CString::new(state).map_err(|_| SimError::BeginFailed {
            reason: "state blob contains an interior NUL byte".into(),
        })?;

        // SAFETY: `state` is a valid NUL-terminated string for the duration
        // of the call; `begin` does not retain the pointer.
        let ctx = unsafe { (api.begin)(state.as_ptr()) };
        if ctx.is_null() {
            return Err(SimError::BeginFailed {
                reason: "plugin returned a null session context".into(),
            });
        }

        log::debug!("plugin session started");
        Ok(Self { api, ctx })
    }

    /// End the session and release the plugin context. Idempotent.
    pub fn end(&mut self) {
        if self.ctx.is_null() {
            return;
        }
        // SAFETY: `ctx` is the live context returned by `begin`; the plugin
        // nulls the pointer through the out-parameter, and we null our copy
        // regardless so a second call is a no-op.
        unsafe { (self.api.end)(&mut self.ctx) };
        self.ctx = ptr::null_mut();
        log::debug!("plugin session ended");
    }

    /// Whether the session has been released.
    pub fn is_ended(&self) -> bool {
        self.ctx.is_null()
    }
}

impl Simulation for PluginSession {
    fn turn(&self) -> Turn {
        assert!(!self.ctx.is_null(), "session already ended");
        // SAFETY: `ctx` is live (asserted above).
        unsafe { (self.api.turn)(self.ctx) }.into()
    }

    fn step(&mut self, control: Control) -> Outcome {
        assert!(!self.ctx.is_null(), "session already ended");
        let output = RawTurnOutput::from(control);
        // SAFETY: `ctx` is live and `output` outlives the call.
        let code = unsafe { (self.api.step)(self.ctx, &output) };
        PluginApi::decode_outcome(code)
    }
}

impl Drop for PluginSession {
    fn drop(&mut self) {
        self.end();
    }
}

/// [`SimulationHost`] over a plugin's entry-point table.
#[derive(Clone, Copy, Debug)]
pub struct PluginHost {
    api: PluginApi,
}

impl PluginHost {
    /// A host creating sessions through `api`.
    pub fn new(api: PluginApi) -> Self {
        Self { api }
    }
}

impl SimulationHost for PluginHost {
    fn begin(&self, state: &str) -> Result<Box<dyn Simulation>, SimError> {
        Ok(Box::new(PluginSession::begin(self.api, state)?))
    }
}
