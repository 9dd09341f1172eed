//! The two [`TurnSource`] variants: pre-recorded replay and live
//! simulation.

use std::sync::Arc;

use skycrane_core::{ControlInput, Outcome, Simulation, Turn, TurnSource};
use skycrane_replay::Replay;

/// Presentation pause before a live session's first advance, in seconds.
///
/// Gives the operator a beat to orient before control input starts
/// affecting the outcome. Not a simulation requirement.
pub const LIVE_WARMUP_SECS: f64 = 1.0;

// ── ReplaySource ────────────────────────────────────────────────

/// Finite, indexable source over a loaded [`Replay`].
///
/// The replay itself stays shared and read-only; any number of sources can
/// be created over the same `Arc` across sessions.
pub struct ReplaySource {
    replay: Arc<Replay>,
    index: usize,
}

impl ReplaySource {
    /// Create a source positioned on the initial turn.
    ///
    /// # Panics
    ///
    /// Panics if the replay has no turns. Loaded replays are validated and
    /// always hold at least the initial state; an empty one here is a
    /// programming error.
    pub fn new(replay: Arc<Replay>) -> Self {
        assert!(!replay.turns.is_empty(), "replay has no turns");
        Self { replay, index: 0 }
    }

    /// Index of the turn the source is positioned on.
    pub fn position(&self) -> usize {
        self.index
    }

    fn last(&self) -> usize {
        self.replay.turn_count() - 1
    }
}

impl TurnSource for ReplaySource {
    fn current(&self) -> Turn {
        self.replay.turn(self.index)
    }

    fn advance(&mut self) -> Outcome {
        if self.index < self.last() {
            self.index += 1;
            Outcome::Aerial
        } else {
            self.replay.outcome
        }
    }

    fn outcome(&self) -> Outcome {
        if self.index == self.last() {
            self.replay.outcome
        } else {
            Outcome::Aerial
        }
    }

    fn seek(&mut self, index: usize) -> bool {
        assert!(
            index < self.replay.turn_count(),
            "turn index {index} out of range ({} turns)",
            self.replay.turn_count()
        );
        self.index = index;
        true
    }

    fn turn_count(&self) -> Option<usize> {
        Some(self.replay.turn_count())
    }
}

// ── LiveSource ──────────────────────────────────────────────────

/// Source over a live external simulation, stepped under scheduler
/// control.
///
/// Owns the simulation session exclusively; dropping the source releases
/// it. The control output is read from the [`ControlInput`] at the moment
/// each advance happens, so control changes between advances take effect
/// at the next step boundary.
pub struct LiveSource {
    sim: Box<dyn Simulation>,
    control: Box<dyn ControlInput>,
    outcome: Outcome,
}

impl LiveSource {
    /// Wrap a simulation session and its control input.
    pub fn new(sim: Box<dyn Simulation>, control: Box<dyn ControlInput>) -> Self {
        Self {
            sim,
            control,
            outcome: Outcome::Aerial,
        }
    }
}

impl TurnSource for LiveSource {
    fn current(&self) -> Turn {
        self.sim.turn()
    }

    fn advance(&mut self) -> Outcome {
        // A terminal session is never stepped again.
        if self.outcome.is_terminal() {
            return self.outcome;
        }
        self.outcome = self.sim.step(self.control.control());
        self.outcome
    }

    fn outcome(&self) -> Outcome {
        self.outcome
    }

    fn warmup(&self) -> f64 {
        LIVE_WARMUP_SECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycrane_core::{IPoint, Span};
    use skycrane_replay::SurfaceDef;

    fn replay(turn_fuels: &[i32], outcome: Outcome) -> Arc<Replay> {
        Arc::new(Replay {
            case_id: 1,
            gene_id: 1,
            outcome,
            surface: SurfaceDef {
                points: vec![IPoint::new(0, 100), IPoint::new(6999, 100)],
                safe_area: Span { start: 0, end: 2 },
            },
            turns: turn_fuels
                .iter()
                .map(|&fuel| Turn {
                    fuel,
                    ..Turn::default()
                })
                .collect(),
            state: String::new(),
        })
    }

    #[test]
    fn replay_source_walks_to_the_end() {
        let mut src = ReplaySource::new(replay(&[3, 2, 1], Outcome::Landed));
        assert_eq!(src.current().fuel, 3);
        assert_eq!(src.outcome(), Outcome::Aerial);

        assert_eq!(src.advance(), Outcome::Aerial);
        assert_eq!(src.current().fuel, 2);

        assert_eq!(src.advance(), Outcome::Aerial);
        assert_eq!(src.current().fuel, 1);
        assert_eq!(src.outcome(), Outcome::Landed);

        // Advancing past the final turn stays put.
        assert_eq!(src.advance(), Outcome::Landed);
        assert_eq!(src.current().fuel, 1);
        assert_eq!(src.position(), 2);
    }

    #[test]
    fn single_turn_replay_is_terminal_at_the_start() {
        let src = ReplaySource::new(replay(&[9], Outcome::Crashed));
        assert_eq!(src.outcome(), Outcome::Crashed);
    }

    #[test]
    fn replay_source_seeks_by_index() {
        let mut src = ReplaySource::new(replay(&[5, 4, 3, 2], Outcome::Lost));
        assert!(src.seek(2));
        assert_eq!(src.current().fuel, 3);
        assert_eq!(src.turn_count(), Some(4));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn replay_source_seek_past_the_end_panics() {
        let mut src = ReplaySource::new(replay(&[5, 4], Outcome::Lost));
        src.seek(2);
    }

    #[test]
    fn replay_source_is_reusable_across_sessions() {
        let shared = replay(&[8, 7], Outcome::Landed);
        let mut first = ReplaySource::new(Arc::clone(&shared));
        first.advance();
        let second = ReplaySource::new(shared);
        assert_eq!(second.current().fuel, 8);
        assert_eq!(first.current().fuel, 7);
    }
}
