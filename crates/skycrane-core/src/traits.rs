//! Core abstraction traits for turn sources, live simulations, and the
//! collaborators the playback scheduler notifies.

use crate::error::SimError;
use crate::outcome::Outcome;
use crate::turn::{Control, Turn};

/// A sequence of discrete turns the playback scheduler advances through.
///
/// The two variants — a finite pre-recorded replay and a live external
/// simulation stepped under scheduler control — implement this one trait so
/// the scheduler is written once. A source is owned by exactly one scheduler
/// session at a time.
pub trait TurnSource {
    /// The turn the source is currently positioned at.
    fn current(&self) -> Turn;

    /// Advance one discrete turn and return the outcome after the step.
    ///
    /// For a live source this invokes the external stepping function; for a
    /// replay it moves to the next recorded turn, reporting `Aerial` for
    /// every advance that moves (the recorded outcome belongs to the end of
    /// the run, not the turns inside it). Advancing a replay already
    /// positioned on its final turn stays put and returns the recorded
    /// outcome.
    fn advance(&mut self) -> Outcome;

    /// Outcome as of the last advance.
    ///
    /// `Aerial` before any advance for a live source; for a replay
    /// positioned on its final turn, the recorded outcome.
    fn outcome(&self) -> Outcome;

    /// Presentation delay in seconds before the first advance.
    ///
    /// Live sources return a fixed pause that lets the operator orient
    /// before control input starts affecting the outcome; replays return 0.
    fn warmup(&self) -> f64 {
        0.0
    }

    /// Reposition to the given turn index, if the source is indexable.
    ///
    /// Returns `false` (and does nothing) for sources that only move
    /// forward.
    fn seek(&mut self, _index: usize) -> bool {
        false
    }

    /// Number of turns, when finite and known in advance.
    fn turn_count(&self) -> Option<usize> {
        None
    }
}

/// The opaque external stepping function behind a live session.
///
/// One value of this trait owns one simulation session. Dropping it releases
/// the session resource; implementations also expose an explicitly
/// idempotent `end`.
pub trait Simulation {
    /// Snapshot of the simulation's current turn.
    fn turn(&self) -> Turn;

    /// Advance one discrete turn under the given control output, returning
    /// the outcome after the step.
    fn step(&mut self, control: Control) -> Outcome;
}

/// Creates live simulation sessions from a persisted state blob.
///
/// The blob comes from a replay's `state` field and re-seeds the external
/// simulation with the same initial conditions the recording was flown
/// from.
pub trait SimulationHost {
    /// Begin a new session.
    ///
    /// # Errors
    ///
    /// [`SimError::BeginFailed`] when the external simulation rejects the
    /// blob or cannot allocate a session; the caller must not attempt
    /// playback.
    fn begin(&self, state: &str) -> Result<Box<dyn Simulation>, SimError>;
}

/// Supplies the control output a live source reads when it advances.
///
/// Sampled exactly once per advance — control changes between advances take
/// effect at the next step boundary, never mid-turn.
pub trait ControlInput {
    /// The control output to apply at the next step.
    fn control(&self) -> Control;
}

/// Rendering/telemetry collaborator receiving per-frame turn state.
pub trait FrameSink {
    /// A blended turn emitted while interpolating inside a turn window.
    fn frame(&mut self, turn: &Turn);

    /// An exact turn emitted at a turn boundary (including the initial turn
    /// at session start).
    fn boundary(&mut self, turn: &Turn);
}

/// Observer of session lifecycle events.
pub trait OutcomeListener {
    /// A new session is starting; clear any previously displayed outcome.
    fn reset(&mut self);

    /// Warm-up expired and the first advance is about to happen.
    ///
    /// Used to synchronize a ghost replay with a live run; default no-op.
    fn started(&mut self) {}

    /// The session ended with the given terminal outcome.
    ///
    /// Invoked exactly once per session.
    fn complete(&mut self, outcome: Outcome);
}
