//! Composition surface consumed by the rendering layer.
//!
//! The controller owns the single authoritative [`History`] value and
//! applies player input to it. Rendering code feeds it flat cell
//! indices and step numbers, and reads back the board, the status line
//! and the moves list; it never needs to know how history is stored.

use crate::history::{History, MoveEntry, MoveError, StepOutOfRange};
use crate::rules::{self, Line, Verdict};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Game status as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line, for the renderer's highlight.
        line: Line,
    },
    /// The board filled up with no winner.
    Draw,
    /// The game continues.
    InProgress {
        /// Player whose turn it is.
        next_player: Player,
    },
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Won { player, .. } => {
                write!(f, "The winner is... {}. Congrats!", player)
            }
            Status::Draw => write!(f, "Tie! Nobody won"),
            Status::InProgress { next_player } => write!(f, "Next player: {}", next_player),
        }
    }
}

/// Applies player input to the authoritative game history.
///
/// Mutations swap in the new history value on success; on failure the
/// previous value is untouched and the error is returned for the caller
/// to report or ignore. Clicking an occupied square or jumping to a
/// step that was never recorded is a no-op, not a crash.
#[derive(Debug, Clone)]
pub struct GameController {
    history: History,
}

impl GameController {
    /// Creates a controller over a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Returns the authoritative history value.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the board at the viewed step, for grid display.
    pub fn current_board(&self) -> &Board {
        self.history.current().board()
    }

    /// Derives the status line input from the viewed board.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        match rules::evaluate(self.current_board()) {
            Verdict::Won { player, line } => Status::Won { player, line },
            Verdict::Draw => Status::Draw,
            Verdict::Undecided => Status::InProgress {
                next_player: self.history.to_move(),
            },
        }
    }

    /// Returns the winning line on the viewed board, if any.
    ///
    /// The renderer highlights these three cells directly; it never
    /// re-derives them.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.current_board()).map(|(_, line)| line)
    }

    /// Returns the moves list for the history/jump UI.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.history.moves()
    }

    /// Applies a move at the given cell index (0-8).
    ///
    /// # Errors
    ///
    /// Passes through [`MoveError`] from the history; the prior state
    /// is untouched on failure.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        self.history = self.history.apply_index(index)?;
        info!(index, step = self.history.step(), "Move applied");
        Ok(())
    }

    /// Jumps the view to a recorded step.
    ///
    /// # Errors
    ///
    /// Passes through [`StepOutOfRange`] from the history; the prior
    /// state is untouched on failure.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StepOutOfRange> {
        self.history = self.history.jump_to(step)?;
        Ok(())
    }

    /// Starts a new game, discarding all recorded history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        self.history = History::new();
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
