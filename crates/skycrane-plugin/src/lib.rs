//! Binding to the closed native lander-simulation plugin.
//!
//! The plugin exposes four C entry points — begin a session from a state
//! blob, read the current turn, step one turn under a control output, end
//! the session — and hands back an opaque context pointer. This crate is
//! the only one in the workspace allowed to contain `unsafe` code; it
//! confines the raw calls behind [`PluginSession`], a scoped owner that
//! releases the context on every exit path.
//!
//! The entry points are carried as a function-pointer table
//! ([`PluginApi`]) rather than hard extern declarations, so session logic
//! is testable without the native library; enable the `link` feature to
//! resolve the table from a statically linked `marslander-plugin`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod session;

pub use api::{PluginApi, RawPoint, RawTurnInput, RawTurnOutput};
pub use session::{PluginHost, PluginSession};
