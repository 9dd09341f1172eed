//! Wiring a loaded replay into viewer and driver playbacks.
//!
//! A [`Session`] is the top-level object a host application drives: it
//! owns the pending file selection, the loaded replay, a viewer
//! [`Playback`] and (in drive mode) a driver [`Playback`] running the live
//! simulation. In drive mode the viewer replays the original recording as
//! a ghost, started in sync with the live run the moment its warm-up
//! expires — the operator races the recording.

use std::sync::Arc;

use skycrane_core::SimulationHost;
use skycrane_replay::Replay;

use crate::control::SharedControl;
use crate::dialog::{FileDialog, FileFilter, Selection, SelectionPoll};
use crate::error::SessionError;
use crate::scheduler::{Phase, Playback};
use crate::source::{LiveSource, ReplaySource};

/// How a session plays a replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    /// Replay-only viewing.
    View,
    /// Interactive live driving with a synchronized ghost replay.
    Drive,
}

/// Top-level session state for a host application.
pub struct Session {
    viewer: Playback,
    driver: Option<Playback>,
    host: Option<Box<dyn SimulationHost>>,
    control: SharedControl,
    replay: Option<Arc<Replay>>,
    pending: Option<Selection>,
}

impl Session {
    /// A view-only session: the replay plays through `viewer`.
    pub fn view(viewer: Playback) -> Self {
        Self {
            viewer,
            driver: None,
            host: None,
            control: SharedControl::new(),
            replay: None,
            pending: None,
        }
    }

    /// An interactive session: `driver` runs a live simulation created by
    /// `host` while `viewer` replays the recording as a ghost.
    pub fn drive(viewer: Playback, driver: Playback, host: Box<dyn SimulationHost>) -> Self {
        Self {
            viewer,
            driver: Some(driver),
            host: Some(host),
            control: SharedControl::new(),
            replay: None,
            pending: None,
        }
    }

    /// This session's mode.
    pub fn mode(&self) -> SessionMode {
        if self.driver.is_some() {
            SessionMode::Drive
        } else {
            SessionMode::View
        }
    }

    /// Handle for input bindings to write control output through.
    pub fn control(&self) -> SharedControl {
        self.control.clone()
    }

    /// The loaded replay, if any.
    pub fn replay(&self) -> Option<&Arc<Replay>> {
        self.replay.as_ref()
    }

    /// Whether either playback is in progress.
    pub fn is_playing(&self) -> bool {
        self.viewer.is_playing()
            || self
                .driver
                .as_ref()
                .is_some_and(|driver| driver.is_playing())
    }

    /// Begin an asynchronous replay pick; the result is consumed by
    /// [`tick`](Self::tick). A pick already pending is replaced.
    pub fn open(&mut self, dialog: &dyn FileDialog) {
        self.pending = Some(dialog.pick(&FileFilter::json()));
    }

    /// Load `replay` directly, stopping any playback in progress.
    pub fn set_replay(&mut self, replay: Arc<Replay>) {
        self.viewer.stop();
        if let Some(driver) = self.driver.as_mut() {
            driver.stop();
        }
        self.replay = Some(replay);
    }

    /// Start (or re-start) playback of the loaded replay per the session
    /// mode.
    ///
    /// In drive mode the ghost viewer stays stopped here; it starts from
    /// [`tick`](Self::tick) when the driver's warm-up expires.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let replay = self.replay.as_ref().ok_or(SessionError::NoReplay)?;

        match (self.driver.as_mut(), self.host.as_ref()) {
            (Some(driver), Some(host)) => {
                self.viewer.stop();
                let sim = host.begin(&replay.state)?;
                let control = Box::new(self.control.clone());
                driver.start(Box::new(LiveSource::new(sim, control)));
            }
            _ => {
                self.viewer
                    .start(Box::new(ReplaySource::new(Arc::clone(replay))));
            }
        }
        Ok(())
    }

    /// One frame of session work: poll the pending file selection, then
    /// tick the active playbacks.
    ///
    /// When a selection arrives, the first path is loaded, validated, and
    /// playback restarts automatically. Load and live-start failures
    /// surface here; the session stays usable afterwards.
    pub fn tick(&mut self, dt: f64) -> Result<(), SessionError> {
        match self.pending.as_ref().map(Selection::poll) {
            None | Some(SelectionPoll::Pending) => {}
            Some(SelectionPoll::Canceled) => {
                log::debug!("file selection canceled");
                self.pending = None;
            }
            Some(SelectionPoll::Chosen(paths)) => {
                self.pending = None;
                if let Some(path) = paths.first() {
                    log::debug!("loading replay from {}", path.display());
                    let replay = Replay::from_path(path)?;
                    self.set_replay(Arc::new(replay));
                    self.restart()?;
                }
            }
        }

        let mut ghost_started = false;
        if let Some(driver) = self.driver.as_mut() {
            let was_warming = driver.phase() == Phase::Armed;
            driver.tick(dt);
            if was_warming && driver.phase() == Phase::Running {
                // Warm-up just expired: launch the ghost in sync.
                if let Some(replay) = &self.replay {
                    self.viewer
                        .start(Box::new(ReplaySource::new(Arc::clone(replay))));
                    ghost_started = true;
                }
            }
        }

        // The ghost's first window opens at t = 0 on the same frame the
        // driver's does; its clock starts accumulating next tick.
        if !ghost_started {
            self.viewer.tick(dt);
        }
        Ok(())
    }

    /// Seek the viewer to an absolute position in time units.
    pub fn seek(&mut self, seconds: f64) -> bool {
        self.viewer.seek(seconds)
    }

    /// Stop all playback; idempotent.
    pub fn stop(&mut self) {
        self.viewer.stop();
        if let Some(driver) = self.driver.as_mut() {
            driver.stop();
        }
    }
}
