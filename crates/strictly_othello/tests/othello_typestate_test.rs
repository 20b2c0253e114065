//! Tests for the turn state machine.

use strictly_othello::{
    Coord, EngineError, GameInProgress, GameResult, GameSetup, Grid, IllegalReason, Move,
    MoveError, Outcome, Piece, Side, Termination, Turn, TurnState,
};

fn in_progress(result: GameResult) -> GameInProgress {
    match result {
        GameResult::InProgress(game) => game,
        GameResult::Finished(_) => panic!("Game shouldn't finish"),
    }
}

#[test]
fn test_typestate_lifecycle() {
    let game = in_progress(GameSetup::new(8).expect("valid size").start());
    assert_eq!(game.turn_state(), TurnState::AwaitingMove(Side::First));

    let action = Move::new(Side::First, Coord::new(5, 4));
    let game = in_progress(game.make_move(action).expect("Valid move"));
    assert_eq!(game.to_move(), Side::Second);
    assert_eq!(game.grid().get(Coord::new(4, 4)), Ok(Piece::First));

    let action = Move::new(Side::Second, Coord::new(5, 5));
    let game = in_progress(game.make_move(action).expect("Valid move"));
    assert_eq!(game.to_move(), Side::First);
    assert_eq!(game.placements(), 2);
    assert_eq!(game.score().first + game.score().second, 6);
}

#[test]
fn test_wrong_side_rejected() {
    let game = in_progress(GameSetup::new(8).expect("valid size").start());
    let rejected = game
        .make_move(Move::new(Side::Second, Coord::new(4, 2)))
        .unwrap_err();
    assert_eq!(rejected.error(), &MoveError::WrongSide(Side::Second));
}

#[test]
fn test_check_does_not_consume_game() {
    let game = in_progress(GameSetup::new(8).expect("valid size").start());
    assert!(game.check(&Move::new(Side::First, Coord::new(2, 3))).is_ok());
    assert_eq!(
        game.check(&Move::new(Side::First, Coord::new(20, 3))),
        Err(MoveError::Engine(EngineError::OutOfBounds {
            coord: Coord::new(20, 3),
            size: 8
        }))
    );
    assert_eq!(game.placements(), 0);
}

#[test]
fn test_rejected_game_can_continue() {
    let game = in_progress(GameSetup::new(8).expect("valid size").start());
    let (game, error) = game.place(Coord::new(7, 7)).unwrap_err().into_parts();
    assert!(matches!(
        error,
        MoveError::Engine(EngineError::IllegalMove {
            reason: IllegalReason::NoCapture,
            ..
        })
    ));

    let game = in_progress(game.place(Coord::new(2, 3)).expect("Valid move"));
    assert_eq!(game.to_move(), Side::Second);
}

#[test]
fn test_skip_then_move_clears_flag() {
    // Row 0 reads `S F . .`: First cannot move, Second captures at (2,0).
    let mut grid = Grid::new(4).expect("valid size");
    grid.set(Coord::new(0, 0), Piece::Second).expect("on grid");
    grid.set(Coord::new(1, 0), Piece::First).expect("on grid");

    let game = in_progress(GameSetup::from_position(grid, Side::First).start());
    assert_eq!(game.turn_state(), TurnState::Skipped(Side::First));

    let game = in_progress(game.pass().expect("First must pass"));
    assert!(game.previous_skipped());
    assert_eq!(game.turn_state(), TurnState::AwaitingMove(Side::Second));

    let game = in_progress(game.place(Coord::new(2, 0)).expect("Valid move"));
    assert!(!game.previous_skipped());
    assert_eq!(game.grid().count(Piece::Second), 3);
    assert_eq!(game.passes(), 1);
}

#[test]
fn test_double_skip_terminates_without_mutation() {
    let mut grid = Grid::new(6).expect("valid size");
    grid.set(Coord::new(0, 0), Piece::First).expect("on grid");
    grid.set(Coord::new(5, 5), Piece::First).expect("on grid");
    grid.set(Coord::new(2, 3), Piece::Second).expect("on grid");
    let snapshot = grid.clone();

    let game = in_progress(GameSetup::from_position(grid, Side::First).start());
    let game = in_progress(game.pass().expect("First must pass"));
    let GameResult::Finished(done) = game.pass().expect("Second must pass") else {
        panic!("Two passes must finish the game");
    };

    assert_eq!(done.termination(), Termination::BothSidesStuck);
    assert_eq!(done.grid(), &snapshot);
    assert_eq!(done.outcome(), Outcome::Winner(Side::First));
    assert_eq!(done.last_turn(), Some(&Turn::Passed(Side::Second)));
    assert_eq!(done.passes(), 2);
}

#[test]
fn test_full_grid_ignores_skip_history() {
    let mut grid = Grid::new(4).expect("valid size");
    for coord in grid.coords() {
        grid.set(coord, Piece::First).expect("on grid");
    }
    grid.set(Coord::new(0, 0), Piece::Second).expect("on grid");

    let GameResult::Finished(done) = GameSetup::from_position(grid, Side::Second).start() else {
        panic!("A full grid must finish at once");
    };
    assert_eq!(done.termination(), Termination::BoardFull);
    assert_eq!(done.turn_state(), TurnState::Terminated);
    assert_eq!(done.outcome(), Outcome::Winner(Side::First));
    assert_eq!(done.score().empty, 0);
}

#[test]
fn test_restart_after_finish() {
    let mut grid = Grid::new(4).expect("valid size");
    grid.set(Coord::new(0, 0), Piece::First).expect("on grid");
    let game = in_progress(GameSetup::from_position(grid, Side::First).start());
    let game = in_progress(game.pass().expect("pass"));
    let GameResult::Finished(done) = game.pass().expect("pass") else {
        panic!("Two passes must finish the game");
    };

    let game = in_progress(done.restart().start());
    assert_eq!(game.grid().size(), 4);
    assert_eq!(game.grid().occupied(), 4);
    assert_eq!(game.to_move(), Side::First);
}
