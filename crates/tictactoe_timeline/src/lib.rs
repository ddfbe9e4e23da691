//! Tic-tac-toe game logic with move history and time travel.
//!
//! This library is the UI-agnostic core of a turn-based 3x3 board game:
//! it records every position reached during a game, lets the viewer jump
//! back to any earlier step (rewriting the future on the next move), and
//! evaluates boards for wins and draws. Rendering, input wiring and
//! visual effects live entirely outside this crate.
//!
//! # Architecture
//!
//! - **[`History`]**: append-only snapshot sequence with a time-travel
//!   cursor; every mutation returns a new immutable value
//! - **[`rules`]**: pure win/draw evaluation over any well-formed board
//! - **[`GameController`]**: owns the authoritative [`History`] and
//!   exposes the query surface a rendering layer consumes
//! - **[`invariants`]**: first-class, independently testable properties
//!   of history values, asserted in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameController, Player, Status};
//!
//! let mut game = GameController::new();
//! game.apply_move(4).expect("center is open");
//! assert!(matches!(
//!     game.status(),
//!     Status::InProgress { next_player: Player::O }
//! ));
//!
//! // Time travel: view the empty board again without losing the move.
//! game.jump_to(0).expect("step 0 always exists");
//! assert_eq!(game.moves().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

// Crate-level exports - controller surface
pub use controller::{GameController, Status};

// Crate-level exports - history
pub use history::{History, MoveEntry, MoveError, Snapshot, StepOutOfRange};

// Crate-level exports - board addressing
pub use position::Position;

// Crate-level exports - evaluation
pub use rules::{Line, Verdict, evaluate, is_full, winning_line};

// Crate-level exports - domain types
pub use types::{Board, Player, Square};
