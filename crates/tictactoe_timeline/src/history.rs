//! Append-only board history with a time-travel cursor.
//!
//! A [`History`] records every position reached during a game and which
//! step is currently being viewed. Histories are immutable values:
//! [`History::apply`] and [`History::jump_to`] return new histories and
//! leave the receiver untouched, so a snapshot handed to an earlier
//! reader never changes underneath it.

use crate::invariants;
use crate::position::Position;
use crate::rules::{self, Verdict};
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One point in game history.
///
/// Holds the board as it stood at this step and the position occupied
/// by the move that produced it (`None` only for the seed snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board as it stood at this step.
    board: Board,
    /// Position occupied by the move that produced this snapshot.
    placed: Option<Position>,
}

/// Row of the moves list consumed by the history/jump UI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    step: usize,
    /// Human-readable label for the jump button.
    label: String,
}

/// Error rejecting an attempted move.
///
/// All causes are recoverable: the caller reports or ignores the
/// rejection and the prior history value stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Cell index outside the board.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error rejecting a jump to a step outside recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Step {} is out of range (history has {} snapshots)", step, len)]
pub struct StepOutOfRange {
    /// The requested step.
    pub step: usize,
    /// Number of snapshots actually recorded.
    pub len: usize,
}

impl std::error::Error for StepOutOfRange {}

/// Every position reached during a game plus the step currently viewed.
///
/// Invariants: there is always at least the seed snapshot (empty board,
/// no recorded move) and the viewed step indexes a recorded snapshot.
/// The player to move at a step is X if the step is even, O if odd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
    step: usize,
}

impl History {
    /// Creates a history seeded with the empty board at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot {
                board: Board::new(),
                placed: None,
            }],
            step: 0,
        }
    }

    /// Returns the recorded snapshots in step order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Returns the step currently viewed.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns the snapshot currently viewed.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.step]
    }

    /// Returns the player to move at the viewed step.
    pub fn to_move(&self) -> Player {
        if self.step % 2 == 0 { Player::X } else { Player::O }
    }

    /// Applies a move at the viewed step, returning the extended history.
    ///
    /// Any snapshot recorded after the viewed step is discarded before
    /// the new one is appended, so moving after a jump rewrites the
    /// future from that point. The receiver is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the viewed board already has a
    /// winner, or [`MoveError::SquareOccupied`] if the square holds a mark.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply(&self, position: Position) -> Result<History, MoveError> {
        let viewed = self.current();

        if let Verdict::Won { .. } = rules::evaluate(viewed.board()) {
            warn!(%position, "Move rejected: game already has a winner");
            return Err(MoveError::GameOver);
        }
        if !viewed.board().is_empty(position) {
            debug!(%position, "Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let mark = self.to_move();
        let board = viewed.board().with(position, Square::Occupied(mark));

        let mut snapshots = self.snapshots[..=self.step].to_vec();
        snapshots.push(Snapshot {
            board,
            placed: Some(position),
        });

        let next = Self {
            step: snapshots.len() - 1,
            snapshots,
        };
        invariants::assert_invariants(&next);
        Ok(next)
    }

    /// Index-addressed variant of [`History::apply`] for the rendering
    /// boundary, which works in flat cell indices (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index outside 0-8, and
    /// otherwise the same errors as [`History::apply`].
    pub fn apply_index(&self, index: usize) -> Result<History, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply(position)
    }

    /// Moves the viewed step without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`StepOutOfRange`] unless `step` indexes a recorded snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&self, step: usize) -> Result<History, StepOutOfRange> {
        if step >= self.snapshots.len() {
            warn!(step, len = self.snapshots.len(), "Jump rejected: step out of range");
            return Err(StepOutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }
        Ok(Self {
            snapshots: self.snapshots.clone(),
            step,
        })
    }

    /// Returns one entry per snapshot for the history/jump UI.
    ///
    /// The seed snapshot is labeled "Go to game start"; every other entry
    /// names its step and the 1-based (row, column) of the move behind it.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                let label = match snapshot.placed() {
                    None => "Go to game start".to_string(),
                    Some(position) => format!(
                        "Go to move #{} ({}, {})",
                        step,
                        position.row(),
                        position.column()
                    ),
                };
                MoveEntry { step, label }
            })
            .collect()
    }

    /// Replays a sequence of moves from a fresh history.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its [`MoveError`].
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<History, MoveError> {
        let mut history = History::new();
        for &position in positions {
            history = history.apply(position)?;
        }
        Ok(history)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
