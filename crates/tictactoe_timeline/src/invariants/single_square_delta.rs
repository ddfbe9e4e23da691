//! Delta invariant: adjacent snapshots differ by exactly one new mark.

use super::Invariant;
use crate::history::History;
use crate::position::Position;
use crate::types::{Player, Square};
use strum::IntoEnumIterator;

/// Invariant: each snapshot extends its predecessor by one mark.
///
/// For every adjacent pair, exactly one square changed; it was empty
/// before, it sits at the recorded position, and it carries the mark
/// of the player whose turn it was (X on even steps, O on odd).
pub struct SingleSquareDeltaInvariant;

impl Invariant<History> for SingleSquareDeltaInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let Some(placed) = after.placed() else {
                    return false;
                };
                let expected = if prev_step % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };

                let mut changed = 0;
                for pos in Position::iter() {
                    let was = before.board().get(pos);
                    let now = after.board().get(pos);
                    if was != now {
                        changed += 1;
                        if pos != *placed
                            || was != Square::Empty
                            || now != Square::Occupied(expected)
                        {
                            return false;
                        }
                    }
                }
                changed == 1
            })
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by exactly one new mark at the recorded position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_history_holds() {
        assert!(SingleSquareDeltaInvariant::holds(&History::new()));
    }

    #[test]
    fn test_holds_for_alternating_play() {
        let history = History::replay(&[
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
        ])
        .unwrap();
        assert!(SingleSquareDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_holds_after_truncating_rewrite() {
        let history = History::replay(&[
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
        ])
        .unwrap();

        // Rewriting from step 1 replaces O's move; parity must still line up.
        let rewritten = history
            .jump_to(1)
            .unwrap()
            .apply(Position::MiddleLeft)
            .unwrap();
        assert!(SingleSquareDeltaInvariant::holds(&rewritten));
    }
}
