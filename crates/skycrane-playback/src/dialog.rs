//! The asynchronous file-selection boundary.
//!
//! Picking a replay file is the one operation that leaves the frame loop's
//! thread: a platform dialog (out of scope here) runs elsewhere and
//! eventually delivers zero or one selections. This module models that
//! boundary as a trait plus a channel-backed pending result the session
//! polls once per tick. Dropping the sender without sending is
//! cancellation.

use std::path::PathBuf;

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};

/// A file-type filter for the selection dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFilter {
    /// Display name, e.g. `"JSON"`.
    pub name: String,
    /// Glob pattern, e.g. `"*.json"`.
    pub pattern: String,
}

impl FileFilter {
    /// Create a filter from a display name and glob pattern.
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// The replay file filter.
    pub fn json() -> Self {
        Self::new("JSON", "*.json")
    }
}

/// An external file-selection dialog.
///
/// Implementations show a platform picker somewhere off the frame loop and
/// fulfill the returned [`Selection`] when the user decides.
pub trait FileDialog {
    /// Begin an asynchronous pick restricted by `filter`.
    fn pick(&self, filter: &FileFilter) -> Selection;
}

/// Result of polling a [`Selection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionPoll {
    /// The dialog is still open.
    Pending,
    /// The user chose these paths (empty means nothing was selected).
    Chosen(Vec<PathBuf>),
    /// The dialog went away without delivering a result.
    Canceled,
}

/// A pending asynchronous file selection.
pub struct Selection {
    rx: Receiver<Vec<PathBuf>>,
}

impl Selection {
    /// Wrap a receiver that will carry the dialog's result.
    pub fn new(rx: Receiver<Vec<PathBuf>>) -> Self {
        Self { rx }
    }

    /// A fulfillment sender paired with its selection.
    ///
    /// The channel holds a single result; the dialog side sends once (or
    /// drops the sender to cancel).
    pub fn channel() -> (Sender<Vec<PathBuf>>, Selection) {
        let (tx, rx) = bounded(1);
        (tx, Selection { rx })
    }

    /// Non-blocking check for the dialog's result.
    pub fn poll(&self) -> SelectionPoll {
        match self.rx.try_recv() {
            Ok(paths) => SelectionPoll::Chosen(paths),
            Err(TryRecvError::Empty) => SelectionPoll::Pending,
            Err(TryRecvError::Disconnected) => SelectionPoll::Canceled,
        }
    }

    /// Block until the dialog delivers or goes away.
    ///
    /// For hosts without a frame loop (tools, tests). Returns `None` on
    /// cancellation.
    pub fn wait(&self) -> Option<Vec<PathBuf>> {
        self.rx.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_reports_pending_then_chosen() {
        let (tx, selection) = Selection::channel();
        assert_eq!(selection.poll(), SelectionPoll::Pending);

        tx.send(vec![PathBuf::from("flight.json")]).unwrap();
        assert_eq!(
            selection.poll(),
            SelectionPoll::Chosen(vec![PathBuf::from("flight.json")])
        );
    }

    #[test]
    fn dropping_the_sender_cancels() {
        let (tx, selection) = Selection::channel();
        drop(tx);
        assert_eq!(selection.poll(), SelectionPoll::Canceled);
        assert_eq!(selection.wait(), None);
    }

    #[test]
    fn empty_choice_is_distinct_from_cancellation() {
        let (tx, selection) = Selection::channel();
        tx.send(Vec::new()).unwrap();
        assert_eq!(selection.poll(), SelectionPoll::Chosen(Vec::new()));
    }

    #[test]
    fn json_filter_matches_replay_files() {
        let f = FileFilter::json();
        assert_eq!(f.name, "JSON");
        assert_eq!(f.pattern, "*.json");
    }
}
