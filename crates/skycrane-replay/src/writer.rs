//! Recording a live session into the replay layout.
//!
//! [`ReplayRecorder`] accumulates the exact turns of a live run;
//! [`RecorderSink`] adapts it to the scheduler's [`FrameSink`] collaborator
//! so a driven session records itself while it renders. The recorded
//! [`Replay`] round-trips through the JSON writer and plays back with the
//! same turn sequence.

use std::io::Write;

use skycrane_core::{FrameSink, Outcome, Turn};

use crate::error::ReplayError;
use crate::types::{Replay, SurfaceDef};

impl Replay {
    /// Serialize to compact JSON.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), ReplayError> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Serialize to 2-space-indented JSON, the format the exporter tooling
    /// writes to disk.
    pub fn to_writer_pretty<W: Write>(&self, writer: W) -> Result<(), ReplayError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Pretty JSON as a string.
    pub fn to_string_pretty(&self) -> Result<String, ReplayError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Accumulates the turns of one live session.
///
/// `reset` starts a fresh recording from the session's initial state;
/// every subsequent exact turn is `push`ed; `finish` packages the result
/// as a [`Replay`].
#[derive(Clone, Debug)]
pub struct ReplayRecorder {
    surface: SurfaceDef,
    state: String,
    turns: Vec<Turn>,
}

impl ReplayRecorder {
    /// Create a recorder for sessions flown over `surface`, re-seedable
    /// from `state`.
    pub fn new(surface: SurfaceDef, state: String) -> Self {
        Self {
            surface,
            state,
            turns: Vec::new(),
        }
    }

    /// Drop any previous recording and store `initial` as turn 0.
    pub fn reset(&mut self, initial: Turn) {
        self.turns.clear();
        self.turns.push(initial);
    }

    /// Append one exact turn.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Number of turns recorded so far.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Package the recording as a [`Replay`].
    pub fn finish(self, case_id: u64, gene_id: u64, outcome: Outcome) -> Replay {
        Replay {
            case_id,
            gene_id,
            outcome,
            surface: self.surface,
            turns: self.turns,
            state: self.state,
        }
    }
}

/// [`FrameSink`] adapter that records exact turns while forwarding all
/// emissions to an inner sink.
///
/// Blended frames pass through untouched; only boundary turns (the discrete
/// simulation states) enter the recording, so playback of the result
/// reproduces the run exactly.
pub struct RecorderSink<S> {
    inner: S,
    recorder: ReplayRecorder,
    primed: bool,
}

impl<S: FrameSink> RecorderSink<S> {
    /// Wrap `inner`, recording into `recorder`.
    pub fn new(inner: S, recorder: ReplayRecorder) -> Self {
        Self {
            inner,
            recorder,
            primed: false,
        }
    }

    /// Take the recording out, consuming the adapter.
    pub fn into_recorder(self) -> ReplayRecorder {
        self.recorder
    }

    /// The wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: FrameSink> FrameSink for RecorderSink<S> {
    fn frame(&mut self, turn: &Turn) {
        self.inner.frame(turn);
    }

    fn boundary(&mut self, turn: &Turn) {
        // First boundary of a session is the initial state.
        if self.primed {
            self.recorder.push(*turn);
        } else {
            self.recorder.reset(*turn);
            self.primed = true;
        }
        self.inner.boundary(turn);
    }
}
