//! Terminal classification of a play session.

use std::fmt;

/// Outcome of a simulation session.
///
/// `Aerial` is the in-progress sentinel; every other variant is terminal.
/// The wire encoding is the integer value (`-1`, `0`, `1`, `2`), matching
/// the persisted replay layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i8", into = "i8"))]
#[repr(i8)]
pub enum Outcome {
    /// Still airborne — the session continues.
    Aerial = -1,
    /// Touched down inside the safe area within speed and tilt limits.
    Landed = 0,
    /// Hit the surface outside the limits.
    Crashed = 1,
    /// Left the simulation zone.
    Lost = 2,
}

impl Outcome {
    /// Whether this outcome ends the session.
    pub fn is_terminal(self) -> bool {
        self != Self::Aerial
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aerial => "aerial",
            Self::Landed => "landed",
            Self::Crashed => "crashed",
            Self::Lost => "lost",
        };
        write!(f, "{name}")
    }
}

impl From<Outcome> for i8 {
    fn from(o: Outcome) -> Self {
        o as i8
    }
}

impl TryFrom<i8> for Outcome {
    type Error = UnknownOutcome;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Aerial),
            0 => Ok(Self::Landed),
            1 => Ok(Self::Crashed),
            2 => Ok(Self::Lost),
            _ => Err(UnknownOutcome { value }),
        }
    }
}

/// An integer outcome code outside the known `-1..=2` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownOutcome {
    /// The unrecognized code.
    pub value: i8,
}

impl fmt::Display for UnknownOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown outcome code {}", self.value)
    }
}

impl std::error::Error for UnknownOutcome {}
