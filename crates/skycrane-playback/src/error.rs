//! Session-level error types.

use std::fmt;

use skycrane_core::SimError;
use skycrane_replay::ReplayError;

/// Errors from session wiring: opening a replay and starting playback.
#[derive(Debug)]
pub enum SessionError {
    /// Playback was requested before any replay was loaded.
    NoReplay,
    /// The selected replay file failed to load or validate.
    Load(ReplayError),
    /// The live simulation could not start a session.
    Simulation(SimError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoReplay => write!(f, "no replay loaded"),
            Self::Load(e) => write!(f, "failed to load replay: {e}"),
            Self::Simulation(e) => write!(f, "failed to start live session: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Simulation(e) => Some(e),
            Self::NoReplay => None,
        }
    }
}

impl From<ReplayError> for SessionError {
    fn from(e: ReplayError) -> Self {
        Self::Load(e)
    }
}

impl From<SimError> for SessionError {
    fn from(e: SimError) -> Self {
        Self::Simulation(e)
    }
}
