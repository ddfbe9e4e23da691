//! Cursor invariant: the viewed step always indexes a recorded snapshot.

use super::Invariant;
use crate::history::History;

/// Invariant: `step` is a valid index into the snapshot list.
///
/// Truncation after a jump shrinks the list, so this guards against a
/// cursor left dangling past the new end.
pub struct StepInBoundsInvariant;

impl Invariant<History> for StepInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.step() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Viewed step indexes a recorded snapshot"
    }
}
