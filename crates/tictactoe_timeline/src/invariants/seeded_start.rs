//! Seed invariant: every history begins with an untouched board.

use super::Invariant;
use crate::history::History;

/// Invariant: the first snapshot is an empty board with no recorded move.
///
/// Time travel can rewrite any later snapshot, but step 0 is the one
/// point every game can always return to.
pub struct SeededStartInvariant;

impl Invariant<History> for SeededStartInvariant {
    fn holds(history: &History) -> bool {
        match history.snapshots().first() {
            Some(seed) => {
                seed.placed().is_none()
                    && seed.board().squares().iter().all(|s| s.is_empty())
            }
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with an empty board and no recorded move"
    }
}
