//! Test utilities and mock types for Skycrane development.
//!
//! Provides mock implementations of the core collaborator traits
//! ([`FrameSink`], [`OutcomeListener`], [`Simulation`], [`ControlInput`])
//! plus deterministic replay fixtures. Everything is single-threaded and
//! shares state through `Rc<RefCell<..>>`, matching the cooperative
//! frame-loop model the scheduler runs under.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use skycrane_core::{Control, ControlInput, FrameSink, Outcome, OutcomeListener, Simulation, Turn};

// ── RecordingSink ───────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
struct SinkLog {
    frames: Vec<Turn>,
    boundaries: Vec<Turn>,
}

/// [`FrameSink`] that records every emission; clones observe the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    log: Rc<RefCell<SinkLog>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blended frames seen so far.
    pub fn frames(&self) -> Vec<Turn> {
        self.log.borrow().frames.clone()
    }

    /// Exact boundary turns seen so far (the initial turn included).
    pub fn boundaries(&self) -> Vec<Turn> {
        self.log.borrow().boundaries.clone()
    }

    pub fn frame_count(&self) -> usize {
        self.log.borrow().frames.len()
    }

    pub fn boundary_count(&self) -> usize {
        self.log.borrow().boundaries.len()
    }

    /// Most recent emission of either kind, by insertion order of its kind.
    pub fn last_boundary(&self) -> Option<Turn> {
        self.log.borrow().boundaries.last().copied()
    }

    pub fn clear(&self) {
        let mut log = self.log.borrow_mut();
        log.frames.clear();
        log.boundaries.clear();
    }
}

impl FrameSink for RecordingSink {
    fn frame(&mut self, turn: &Turn) {
        self.log.borrow_mut().frames.push(*turn);
    }

    fn boundary(&mut self, turn: &Turn) {
        self.log.borrow_mut().boundaries.push(*turn);
    }
}

// ── RecordingListener ───────────────────────────────────────────

#[derive(Clone, Debug, Default)]
struct ListenerLog {
    resets: usize,
    starts: usize,
    outcomes: Vec<Outcome>,
}

/// [`OutcomeListener`] that counts lifecycle events; clones share the log.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    log: Rc<RefCell<ListenerLog>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resets(&self) -> usize {
        self.log.borrow().resets
    }

    pub fn starts(&self) -> usize {
        self.log.borrow().starts
    }

    /// Every completion notification, in order. The scheduler contract is
    /// that this never exceeds one entry per session.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.log.borrow().outcomes.clone()
    }
}

impl OutcomeListener for RecordingListener {
    fn reset(&mut self) {
        self.log.borrow_mut().resets += 1;
    }

    fn started(&mut self) {
        self.log.borrow_mut().starts += 1;
    }

    fn complete(&mut self, outcome: Outcome) {
        self.log.borrow_mut().outcomes.push(outcome);
    }
}

// ── ScriptedSimulation ──────────────────────────────────────────

#[derive(Debug, Default)]
struct SimLog {
    steps: usize,
    controls: Vec<Control>,
    dropped: bool,
}

/// Shared view into a [`ScriptedSimulation`]'s call history.
///
/// Stays valid after the simulation is boxed and moved into a live source;
/// `dropped` flips when the session resource is released.
#[derive(Clone, Debug, Default)]
pub struct SimProbe {
    log: Rc<RefCell<SimLog>>,
}

impl SimProbe {
    pub fn steps(&self) -> usize {
        self.log.borrow().steps
    }

    /// Control outputs in the order the steps read them.
    pub fn controls(&self) -> Vec<Control> {
        self.log.borrow().controls.clone()
    }

    pub fn dropped(&self) -> bool {
        self.log.borrow().dropped
    }
}

/// [`Simulation`] that plays a pre-scripted sequence of steps.
///
/// Each `step` pops the next `(turn, outcome)` pair; an exhausted script
/// keeps the final turn and reports [`Outcome::Lost`].
pub struct ScriptedSimulation {
    current: Turn,
    script: VecDeque<(Turn, Outcome)>,
    probe: SimProbe,
}

impl ScriptedSimulation {
    pub fn new(initial: Turn, script: Vec<(Turn, Outcome)>) -> Self {
        Self {
            current: initial,
            script: script.into(),
            probe: SimProbe::default(),
        }
    }

    /// A probe observing this simulation's calls.
    pub fn probe(&self) -> SimProbe {
        self.probe.clone()
    }
}

impl Simulation for ScriptedSimulation {
    fn turn(&self) -> Turn {
        self.current
    }

    fn step(&mut self, control: Control) -> Outcome {
        let mut log = self.probe.log.borrow_mut();
        log.steps += 1;
        log.controls.push(control);
        drop(log);

        match self.script.pop_front() {
            Some((turn, outcome)) => {
                self.current = turn;
                outcome
            }
            None => Outcome::Lost,
        }
    }
}

impl Drop for ScriptedSimulation {
    fn drop(&mut self) {
        self.probe.log.borrow_mut().dropped = true;
    }
}

// ── FixedControl ────────────────────────────────────────────────

/// [`ControlInput`] that always yields the same control output.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedControl(pub Control);

impl ControlInput for FixedControl {
    fn control(&self) -> Control {
        self.0
    }
}
