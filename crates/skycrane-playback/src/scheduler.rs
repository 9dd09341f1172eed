//! The playback scheduler: turning discrete turns into per-frame state.
//!
//! [`Playback`] is an explicit state object driven by the host's frame
//! loop: one [`tick`](Playback::tick) per rendered frame, on the render
//! thread. Each tick accumulates wall time into the fractional position
//! inside the current one-second turn window, emits blended frames to the
//! [`FrameSink`] while inside the window, and on crossing a boundary emits
//! the exact next turn, advances the source, and — for a live source that
//! fell behind after a frame hitch — keeps advancing until the accumulated
//! time fits inside a single window again.
//!
//! # Ownership model
//!
//! A `Playback` owns at most one [`TurnSource`] at a time. `start()` on a
//! running scheduler performs a full `stop()` first, so two playback loops
//! never run against the same target; `stop()` drops the source — and with
//! it any live-session resource — before returning.

use skycrane_core::{FrameSink, Outcome, OutcomeListener, Turn, TurnSource};

use crate::blend::{blend, exact};

// ── Phase ───────────────────────────────────────────────────────

/// Lifecycle phase of a [`Playback`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No source has ever been attached.
    Idle,
    /// A source is attached and warm-up is counting down; the initial turn
    /// has been emitted but nothing advances yet.
    Armed,
    /// Turn windows are advancing.
    Running,
    /// The session ended (terminal outcome or explicit stop). Stray ticks
    /// are suppressed here, which is what makes the final outcome
    /// notification exactly-once.
    Stopped,
}

// ── TickStatus ──────────────────────────────────────────────────

/// What one [`Playback::tick`] call did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickStatus {
    /// Nothing to do: no session, or the session already ended.
    Idle,
    /// Warm-up is still counting down.
    Warmup,
    /// A blended frame was emitted inside the current turn window.
    Frame,
    /// A turn boundary was crossed: the exact turn was emitted, the source
    /// advanced, and the next window opened.
    Boundary,
    /// The session ended this tick with the given terminal outcome.
    Finished(Outcome),
}

// ── Playback ────────────────────────────────────────────────────

/// Frame-driven playback scheduler over one [`TurnSource`].
pub struct Playback {
    source: Option<Box<dyn TurnSource>>,
    sink: Box<dyn FrameSink>,
    listener: Option<Box<dyn OutcomeListener>>,
    phase: Phase,
    /// Fractional position inside the current turn window, in time units.
    time: f64,
    /// Remaining warm-up while [`Phase::Armed`].
    warmup: f64,
    /// Outcome of the most recent source advance.
    outcome: Outcome,
    current: Turn,
    next: Turn,
}

impl Playback {
    /// Create an idle scheduler emitting into `sink`.
    pub fn new(sink: Box<dyn FrameSink>) -> Self {
        Self {
            source: None,
            sink,
            listener: None,
            phase: Phase::Idle,
            time: 0.0,
            warmup: 0.0,
            outcome: Outcome::Aerial,
            current: Turn::default(),
            next: Turn::default(),
        }
    }

    /// Register the lifecycle listener.
    pub fn set_listener(&mut self, listener: Box<dyn OutcomeListener>) {
        self.listener = Some(listener);
    }

    /// Begin a session over `source`.
    ///
    /// Stops any session in progress first (releasing its resource), resets
    /// the clock, notifies the listener's reset, and emits the source's
    /// initial turn as an exact frame. A source that is already terminal —
    /// a replay of a single turn, holding only the initial state — completes
    /// immediately without consuming any time.
    pub fn start(&mut self, source: Box<dyn TurnSource>) {
        self.stop();

        if let Some(listener) = self.listener.as_mut() {
            listener.reset();
        }

        self.current = source.current();
        let initial = exact(&self.current);
        self.sink.boundary(&initial);

        let at_start = source.outcome();
        if at_start.is_terminal() {
            log::debug!("session is terminal at start: {at_start}");
            self.phase = Phase::Stopped;
            self.notify_complete(at_start);
            return;
        }

        self.time = 0.0;
        self.outcome = Outcome::Aerial;
        self.warmup = source.warmup();
        self.source = Some(source);
        self.phase = Phase::Armed;
        log::debug!("playback armed (warmup {:.1}s)", self.warmup);

        if self.warmup <= 0.0 {
            self.begin_running();
        }
    }

    /// Advance the scheduler by `dt` seconds of host frame time.
    pub fn tick(&mut self, dt: f64) -> TickStatus {
        match self.phase {
            Phase::Idle | Phase::Stopped => TickStatus::Idle,
            Phase::Armed => {
                self.warmup -= dt;
                if self.warmup > 0.0 {
                    return TickStatus::Warmup;
                }
                // Sub-frame remainder past the warm-up is discarded; the
                // first window starts at t = 0.
                self.begin_running();
                if self.phase == Phase::Running {
                    TickStatus::Frame
                } else {
                    TickStatus::Idle
                }
            }
            Phase::Running => self.advance_window(dt),
        }
    }

    /// Stop the session, if any.
    ///
    /// Safe from any phase and idempotent: the source (and any live
    /// resource it owns) is released before this returns, and no listener
    /// notification is produced.
    pub fn stop(&mut self) {
        if self.source.take().is_some() {
            log::debug!("playback stopped");
        }
        if matches!(self.phase, Phase::Armed | Phase::Running) {
            self.phase = Phase::Stopped;
        }
    }

    /// Jump to an absolute position in time units, for indexable sources.
    ///
    /// Returns `false` when no session is active or the source does not
    /// support seeking. Seeking to (or past) the final turn emits it and
    /// completes the session.
    pub fn seek(&mut self, seconds: f64) -> bool {
        if !matches!(self.phase, Phase::Armed | Phase::Running) {
            return false;
        }
        let Some(source) = self.source.as_mut() else {
            return false;
        };
        let Some(count) = source.turn_count() else {
            return false;
        };

        let last = count - 1;
        let position = seconds.clamp(0.0, last as f64);
        let index = position.floor() as usize;
        if !source.seek(index) {
            return false;
        }

        self.current = source.current();
        if index >= last {
            let outcome = source.outcome();
            let finale = exact(&self.current);
            self.sink.boundary(&finale);
            self.finish(outcome);
            return true;
        }

        self.outcome = source.advance();
        self.next = source.current();
        self.time = position - index as f64;
        self.warmup = 0.0;
        self.phase = Phase::Running;
        let blended = blend(&self.current, &self.next, self.time);
        self.sink.frame(&blended);
        true
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a session is in progress (armed or running).
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Armed | Phase::Running)
    }

    /// Session duration in time units, when the source is finite.
    pub fn duration(&self) -> Option<f64> {
        let source = self.source.as_ref()?;
        let count = source.turn_count()?;
        Some(count.saturating_sub(1) as f64)
    }

    // ── internals ───────────────────────────────────────────────

    /// First advance after warm-up: open the initial turn window.
    fn begin_running(&mut self) {
        let Some(source) = self.source.as_mut() else {
            return;
        };

        if let Some(listener) = self.listener.as_mut() {
            listener.started();
        }

        self.outcome = source.advance();
        self.next = source.current();
        self.time = 0.0;
        self.phase = Phase::Running;
        log::debug!("playback running");

        let blended = blend(&self.current, &self.next, 0.0);
        self.sink.frame(&blended);
    }

    /// One Running-phase tick: blend inside the window or cross a boundary.
    fn advance_window(&mut self, dt: f64) -> TickStatus {
        self.time += dt;

        if self.time < 1.0 {
            let blended = blend(&self.current, &self.next, self.time);
            self.sink.frame(&blended);
            return TickStatus::Frame;
        }

        // Boundary: the next turn becomes exact and current.
        let boundary = exact(&self.next);
        self.sink.boundary(&boundary);
        self.current = self.next;
        log::trace!("turn boundary (outcome {})", self.outcome);

        if let Some(source) = self.source.as_mut() {
            // Catch-up: if a hitch made more than one window elapse, step
            // the source once per elapsed window while the run continues.
            // Skipped turns are stepped but not emitted.
            while self.time >= 1.0 && !self.outcome.is_terminal() {
                self.outcome = source.advance();
                self.time -= 1.0;
            }
            if !self.outcome.is_terminal() {
                self.next = source.current();
            }
        }

        if self.outcome.is_terminal() {
            let outcome = self.outcome;
            self.finish(outcome);
            return TickStatus::Finished(outcome);
        }

        // Same-frame remainder of the freshly opened window.
        let blended = blend(&self.current, &self.next, self.time);
        self.sink.frame(&blended);
        TickStatus::Boundary
    }

    /// Terminal transition: release the source, then notify exactly once.
    fn finish(&mut self, outcome: Outcome) {
        self.source = None;
        self.phase = Phase::Stopped;
        log::debug!("playback finished: {outcome}");
        self.notify_complete(outcome);
    }

    fn notify_complete(&mut self, outcome: Outcome) {
        if let Some(listener) = self.listener.as_mut() {
            listener.complete(outcome);
        }
    }
}

impl std::fmt::Debug for Playback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Playback")
            .field("phase", &self.phase)
            .field("time", &self.time)
            .field("outcome", &self.outcome)
            .finish()
    }
}
