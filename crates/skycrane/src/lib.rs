//! Skycrane: a turn playback and interpolation engine for Mars-lander
//! flight recordings.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Skycrane sub-crates. For most users, adding `skycrane` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skycrane::prelude::*;
//! use std::sync::Arc;
//!
//! // A minimal sink that prints each exact turn.
//! struct PrintSink;
//! impl FrameSink for PrintSink {
//!     fn frame(&mut self, _turn: &Turn) {}
//!     fn boundary(&mut self, turn: &Turn) {
//!         println!("fuel {}, altitude {}", turn.fuel, turn.position.y);
//!     }
//! }
//!
//! // A two-turn recorded hop.
//! let replay = Arc::new(Replay {
//!     case_id: 1,
//!     gene_id: 1,
//!     outcome: Outcome::Landed,
//!     surface: SurfaceDef {
//!         points: vec![IPoint::new(0, 100), IPoint::new(6999, 100)],
//!         safe_area: Span { start: 0, end: 2 },
//!     },
//!     turns: vec![
//!         Turn { fuel: 100, ..Turn::default() },
//!         Turn { fuel: 95, ..Turn::default() },
//!     ],
//!     state: String::new(),
//! });
//! replay.validate().unwrap();
//!
//! // Drive the scheduler like a 60 Hz frame loop would.
//! let mut playback = Playback::new(Box::new(PrintSink));
//! playback.start(Box::new(ReplaySource::new(replay)));
//! loop {
//!     if let TickStatus::Finished(outcome) = playback.tick(1.0 / 60.0) {
//!         assert_eq!(outcome, Outcome::Landed);
//!         break;
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `skycrane-core` | Geometry, turns, outcomes, constants, core traits |
//! | [`replay`] | `skycrane-replay` | Replay file format, validation, recording |
//! | [`playback`] | `skycrane-playback` | Interpolator, scheduler, sources, projection, sessions |
//!
//! The native plugin binding (`skycrane-plugin`) is deliberately not
//! re-exported: it is platform-bound and most hosts supply their own
//! [`types::SimulationHost`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry, turns, outcomes, constants, and core traits
/// (`skycrane-core`).
pub use skycrane_core as types;

/// Replay file format, validation, and recording (`skycrane-replay`).
pub use skycrane_replay as replay;

/// Interpolator, playback scheduler, turn sources, surface projection, and
/// session wiring (`skycrane-playback`).
pub use skycrane_playback as playback;

/// Common imports for typical Skycrane usage.
///
/// ```rust
/// use skycrane::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use skycrane_core::{
        Control, ControlInput, FPoint, FrameSink, IPoint, Outcome, OutcomeListener, Point,
        SimError, Simulation, SimulationHost, Span, Turn, TurnSource,
    };

    // Replay format
    pub use skycrane_replay::{Replay, ReplayError, ReplayRecorder, SurfaceDef};

    // Playback engine
    pub use skycrane_playback::{
        blend, exact, surface_strip, FileDialog, FileFilter, LiveSource, Phase, Playback,
        ReplaySource, Selection, SelectionPoll, Session, SessionError, SessionMode, SharedControl,
        TickStatus, Viewport,
    };
}
