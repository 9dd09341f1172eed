//! Data types for the persisted replay layout.

use serde::{Deserialize, Serialize};

use skycrane_core::{IPoint, Outcome, Span, Turn};

/// Terrain definition: the surface polyline plus the safe-landing segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDef {
    /// Ordered surface points, left to right, in field coordinates.
    #[serde(rename = "surface")]
    pub points: Vec<IPoint>,
    /// Indices into [`points`](Self::points) spanning the flat segment the
    /// craft may land on.
    pub safe_area: Span<usize>,
}

impl SurfaceDef {
    /// The safe-landing points, in order.
    ///
    /// Empty when the span is out of bounds; load-time validation rejects
    /// such replays before they reach a scheduler.
    pub fn safe_points(&self) -> &[IPoint] {
        self.points
            .get(self.safe_area.start..self.safe_area.end)
            .unwrap_or(&[])
    }
}

/// One recorded flight.
///
/// Immutable once loaded and reusable across any number of scheduler
/// sessions; share it behind an `Arc`. `turns[0]` is the initial state, so
/// a well-formed replay always has at least one turn and spans
/// `turns.len() - 1` scheduler time units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    /// Identifier of the landing case this flight was flown against.
    pub case_id: u64,
    /// Identifier of the pilot genome that flew it.
    #[serde(default)]
    pub gene_id: u64,
    /// Terminal outcome of the flight (`Aerial` for an in-progress dump).
    pub outcome: Outcome,
    /// Terrain the flight was flown over.
    pub surface: SurfaceDef,
    /// Discrete turns, index 0 = initial state.
    pub turns: Vec<Turn>,
    /// Opaque blob that re-seeds a live simulation with the same initial
    /// conditions. Empty when unavailable.
    #[serde(default)]
    pub state: String,
}

impl Replay {
    /// Duration in scheduler time units: `turns.len() - 1`.
    pub fn duration(&self) -> usize {
        self.turns.len().saturating_sub(1)
    }

    /// Number of recorded turns.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// The turn at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= turn_count()`. An out-of-range turn request is a
    /// contract violation, not a recoverable condition.
    pub fn turn(&self, index: usize) -> Turn {
        self.turns[index]
    }
}
