//! Turn interpolation and playback scheduling for Skycrane lander
//! sessions.
//!
//! This crate turns a discrete sequence of one-second simulation turns
//! into continuous per-frame visual state:
//!
//! - [`blend`](blend::blend) computes the pure numeric interpolation
//!   between two consecutive turns, with rate-limited tilt;
//! - [`Playback`](scheduler::Playback) owns the per-frame clock and the
//!   advance/emit state machine, written once against the
//!   [`TurnSource`](skycrane_core::TurnSource) trait;
//! - [`ReplaySource`](source::ReplaySource) and
//!   [`LiveSource`](source::LiveSource) are its two variants;
//! - [`projection`] maps field coordinates and terrain onto a render
//!   viewport;
//! - [`Session`](session::Session) wires a picked replay file into viewer
//!   and driver playbacks.
//!
//! Everything runs on the host's frame loop thread; the only cross-thread
//! edge is the asynchronous file selection in [`dialog`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blend;
pub mod control;
pub mod dialog;
pub mod error;
pub mod projection;
pub mod scheduler;
pub mod session;
pub mod source;

pub use blend::{blend, exact};
pub use control::{tilt_toward, SharedControl};
pub use dialog::{FileDialog, FileFilter, Selection, SelectionPoll};
pub use error::SessionError;
pub use projection::{surface_strip, SurfaceStrip, Viewport};
pub use scheduler::{Phase, Playback, TickStatus};
pub use session::{Session, SessionMode};
pub use source::{LiveSource, ReplaySource, LIVE_WARMUP_SECS};
