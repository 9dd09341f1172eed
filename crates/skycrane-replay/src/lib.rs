//! Replay file format for Skycrane lander sessions.
//!
//! A replay is the persisted record of one flight: the terrain, the
//! terminal outcome, every discrete turn from the initial state onward,
//! and an opaque state blob that can re-seed a live simulation with the
//! same initial conditions.
//!
//! # Format
//!
//! Replays are JSON documents:
//!
//! ```text
//! {
//!   "case_id":  <u64>,
//!   "gene_id":  <u64>,
//!   "outcome":  -1 | 0 | 1 | 2,
//!   "surface":  { "surface": [{"x","y"}...], "safe_area": {"start","end"} },
//!   "turns":    [{"fuel","thrust","tilt","position","velocity"}...],
//!   "state":    "<opaque base64 blob>"
//! }
//! ```
//!
//! Loading validates structure eagerly ([`Replay::from_reader`]); a replay
//! that deserializes but violates the turn or surface invariants never
//! reaches a scheduler. [`ReplayRecorder`] accumulates a live session into
//! the same shape for later playback.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

pub use error::ReplayError;
pub use types::{Replay, SurfaceDef};
pub use writer::{RecorderSink, ReplayRecorder};
