//! Benchmark profiles for the Skycrane playback engine.
//!
//! Provides deterministic replay profiles at bench-relevant sizes so the
//! criterion benches and ad-hoc profiling runs measure identical inputs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skycrane_replay::Replay;
use skycrane_test_utils::fixtures::random_replay;

/// Reference profile: a 64-turn descent (about a minute of flight).
pub fn reference_replay(seed: u64) -> Replay {
    random_replay(seed, 64)
}

/// Stress profile: the 256-turn cap, the longest session the simulation
/// permits.
pub fn stress_replay(seed: u64) -> Replay {
    random_replay(seed, 256)
}
