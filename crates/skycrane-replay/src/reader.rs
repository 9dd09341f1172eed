//! Replay loading and structural validation.
//!
//! All load paths funnel through [`Replay::validate`]: a replay that
//! deserializes but breaks a turn or surface invariant fails fast here,
//! never inside a running scheduler.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use skycrane_core::constants::{
    THRUST_POWER_MAX, THRUST_POWER_MIN, TILT_ANGLE_MAX, TILT_ANGLE_MIN,
};

use crate::error::ReplayError;
use crate::types::Replay;

impl Replay {
    /// Load and validate a replay from any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReplayError> {
        let replay: Replay = serde_json::from_reader(reader)?;
        replay.validate()?;
        Ok(replay)
    }

    /// Load and validate a replay from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ReplayError> {
        let replay: Replay = serde_json::from_slice(bytes)?;
        replay.validate()?;
        Ok(replay)
    }

    /// Load and validate a replay file.
    pub fn from_path(path: &Path) -> Result<Self, ReplayError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Check the structural invariants of a deserialized replay.
    ///
    /// - at least one turn (index 0 is the initial state);
    /// - at least two surface points;
    /// - a non-empty safe-area index span within the surface points;
    /// - thrust in `0..=4` and tilt in `-90..=90` for every turn;
    /// - non-negative fuel and finite velocity components.
    pub fn validate(&self) -> Result<(), ReplayError> {
        if self.turns.is_empty() {
            return Err(ReplayError::NoTurns);
        }

        let points = self.surface.points.len();
        if points < 2 {
            return Err(ReplayError::SurfaceTooShort { count: points });
        }

        let safe = self.surface.safe_area;
        if safe.is_empty() || safe.end > points {
            return Err(ReplayError::BadSafeArea {
                start: safe.start,
                end: safe.end,
                points,
            });
        }

        for (index, turn) in self.turns.iter().enumerate() {
            if turn.thrust < THRUST_POWER_MIN || turn.thrust > THRUST_POWER_MAX {
                return Err(ReplayError::TurnOutOfRange {
                    index,
                    field: "thrust",
                    value: turn.thrust,
                });
            }
            if turn.tilt < TILT_ANGLE_MIN || turn.tilt > TILT_ANGLE_MAX {
                return Err(ReplayError::TurnOutOfRange {
                    index,
                    field: "tilt",
                    value: turn.tilt,
                });
            }
            if turn.fuel < 0 {
                return Err(ReplayError::TurnOutOfRange {
                    index,
                    field: "fuel",
                    value: turn.fuel,
                });
            }
            if !turn.velocity.x.is_finite() || !turn.velocity.y.is_finite() {
                return Err(ReplayError::NonFiniteVelocity { index });
            }
        }

        Ok(())
    }
}
