//! Errors shared across the Skycrane workspace.

use std::fmt;

/// Errors from a live simulation session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The external simulation refused to start a session.
    ///
    /// Fatal for the session: no playback is attempted.
    BeginFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The session was already ended when a step was requested.
    Ended,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeginFailed { reason } => {
                write!(f, "simulation session failed to start: {reason}")
            }
            Self::Ended => write!(f, "simulation session already ended"),
        }
    }
}

impl std::error::Error for SimError {}
