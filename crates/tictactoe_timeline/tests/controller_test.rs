//! End-to-end tests driving the controller the way a rendering layer would.

use tictactoe_timeline::{
    GameController, MoveError, Player, Position, Square, Status, StepOutOfRange,
};

#[test]
fn test_x_wins_top_row() {
    let mut game = GameController::new();

    // X: 0, O: 4, X: 1, O: 5, X: 2 completes the top row.
    for index in [0, 4, 1, 5, 2] {
        game.apply_move(index).expect("square is open");
    }

    match game.status() {
        Status::Won { player, line } => {
            assert_eq!(player, Player::X);
            assert_eq!(
                line,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            );
        }
        other => panic!("Expected a win, got {:?}", other),
    }
    assert_eq!(game.status().to_string(), "The winner is... X. Congrats!");
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    // The game is decided: further moves are rejected and change nothing.
    let before = game.history().clone();
    assert_eq!(game.apply_move(3), Err(MoveError::GameOver));
    assert_eq!(game.history(), &before);
}

#[test]
fn test_full_board_without_winner_is_a_tie() {
    let mut game = GameController::new();

    // X takes 0, 1, 5, 6, 8 and O takes 2, 3, 4, 7; nobody lines up.
    for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        game.apply_move(index).expect("square is open");
    }

    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "Tie! Nobody won");
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_jump_restores_earlier_view() {
    let mut game = GameController::new();
    for index in [0, 4, 1] {
        game.apply_move(index).expect("square is open");
    }

    game.jump_to(1).expect("step 1 is recorded");

    let board = game.current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(
        board.squares().iter().filter(|s| !s.is_empty()).count(),
        1
    );
    assert_eq!(
        game.status(),
        Status::InProgress {
            next_player: Player::O
        }
    );
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_jump_out_of_range_is_a_recoverable_no_op() {
    let mut game = GameController::new();
    for index in [4, 0, 8] {
        game.apply_move(index).expect("square is open");
    }
    assert_eq!(game.history().len(), 4);

    let before = game.history().clone();
    assert_eq!(
        game.jump_to(99),
        Err(StepOutOfRange { step: 99, len: 4 })
    );
    assert_eq!(game.history(), &before);

    // The controller is still playable afterwards.
    game.apply_move(2).expect("square is open");
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_occupied_cell_click_is_a_recoverable_no_op() {
    let mut game = GameController::new();
    game.apply_move(4).expect("center is open");

    let before = game.history().clone();
    assert_eq!(
        game.apply_move(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(game.history(), &before);
    assert_eq!(
        game.status(),
        Status::InProgress {
            next_player: Player::O
        }
    );
}

#[test]
fn test_moves_list_matches_history_for_jump_ui() {
    let mut game = GameController::new();
    for index in [8, 4] {
        game.apply_move(index).expect("square is open");
    }

    let moves = game.moves();
    assert_eq!(moves.len(), 3);
    assert_eq!(moves[0].label(), "Go to game start");
    assert_eq!(moves[1].label(), "Go to move #1 (3, 3)");
    assert_eq!(moves[2].label(), "Go to move #2 (2, 2)");

    // Every listed step is jumpable.
    for entry in &moves {
        game.jump_to(*entry.step()).expect("listed step exists");
    }
}

#[test]
fn test_rewriting_the_future_after_a_jump() {
    let mut game = GameController::new();
    for index in [0, 4, 1, 5] {
        game.apply_move(index).expect("square is open");
    }

    game.jump_to(2).expect("step 2 is recorded");
    game.apply_move(8).expect("square is open in the viewed board");

    // Steps 3 and 4 were discarded; the new move became step 3.
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.history().step(), 3);
    assert_eq!(
        game.current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert!(game.current_board().is_empty(Position::MiddleRight));
}

#[test]
fn test_reset_starts_a_fresh_game() {
    let mut game = GameController::new();
    for index in [0, 4, 1, 5, 2] {
        game.apply_move(index).expect("square is open");
    }
    assert!(matches!(game.status(), Status::Won { .. }));

    game.reset();

    assert_eq!(game.history().len(), 1);
    assert_eq!(
        game.status(),
        Status::InProgress {
            next_player: Player::X
        }
    );
    game.apply_move(4).expect("fresh board accepts moves");
}
