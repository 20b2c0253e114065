//! Game orchestration between move selectors.

use crate::players::{MoveSelector, SelectorError};
use crate::{
    Coord, GameFinished, GameInProgress, GameResult, GameSetup, Grid, Move, MoveError, Outcome,
    Score, Side, Termination, Turn, TurnState,
};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

/// Default number of selections a side may try before the loop gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Messages sent from the orchestrator to an observer.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Start position is on the grid and a side is to move.
    ///
    /// Not sent when the starting grid is already full.
    Started {
        /// Grid after the start position was placed.
        grid: Grid,
        /// Side that moves first.
        to_move: Side,
    },
    /// A disc was placed.
    MovePlayed {
        /// The accepted move.
        mov: Move,
        /// Cells turned to the mover's colour.
        flipped: Vec<Coord>,
        /// Grid after the move.
        grid: Grid,
    },
    /// A selection was refused; the same side is asked again.
    MoveRejected {
        /// Side whose selection was refused.
        side: Side,
        /// Refused cell.
        coord: Coord,
        /// Why it was refused.
        error: MoveError,
    },
    /// A side had no legal move.
    Passed {
        /// Side that passed.
        side: Side,
    },
    /// Game ended.
    Finished {
        /// Final grid.
        grid: Grid,
        /// Why the game ended.
        termination: Termination,
        /// Winner or draw.
        outcome: Outcome,
        /// Final disc counts.
        score: Score,
    },
}

/// Receives events while a game is played.
pub trait GameObserver {
    /// Called once per event, in order.
    fn on_event(&mut self, event: &GameEvent);
}

/// Failure that stops the game loop.
#[derive(Debug, Display, Error, From)]
pub enum OrchestratorError {
    /// A selector could not produce a cell.
    #[display("{_0}")]
    Selector(SelectorError),
    /// A side kept choosing refused cells.
    #[display("{side} made {attempts} refused selections in a row")]
    #[from(ignore)]
    AttemptsExhausted {
        /// Side that gave up.
        side: Side,
        /// Refused selections.
        attempts: usize,
    },
    /// The engine refused a turn the loop could not retry.
    #[display("{_0}")]
    Move(MoveError),
}

/// Orchestrates gameplay between two selectors.
pub struct Orchestrator {
    first: Box<dyn MoveSelector>,
    second: Box<dyn MoveSelector>,
    observer: Option<Box<dyn GameObserver>>,
    max_attempts: usize,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(first: Box<dyn MoveSelector>, second: Box<dyn MoveSelector>) -> Self {
        Self {
            first,
            second,
            observer: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Reports events to `observer`.
    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Caps refused selections per turn; zero is treated as one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Name of the selector playing `side`.
    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::First => self.first.name(),
            Side::Second => self.second.name(),
        }
    }

    /// Runs the game loop until the game finishes.
    #[instrument(skip(self, setup), fields(size = setup.grid().size()))]
    pub fn play(&mut self, setup: GameSetup) -> Result<GameFinished, OrchestratorError> {
        info!(
            first = %self.first.name(),
            second = %self.second.name(),
            "Starting game orchestration"
        );

        let mut result = setup.start();
        if let GameResult::InProgress(game) = &result {
            self.emit(|| GameEvent::Started {
                grid: game.grid().clone(),
                to_move: game.to_move(),
            });
        }

        loop {
            let game = match result {
                GameResult::InProgress(game) => game,
                GameResult::Finished(done) => {
                    info!(
                        termination = %done.termination(),
                        outcome = %done.outcome(),
                        "Game over"
                    );
                    self.emit(|| GameEvent::Finished {
                        grid: done.grid().clone(),
                        termination: done.termination(),
                        outcome: done.outcome(),
                        score: done.score(),
                    });
                    return Ok(done);
                }
            };

            result = match game.turn_state() {
                TurnState::AwaitingMove(_) => self.take_turn(game)?,
                TurnState::Skipped(side) => {
                    debug!(%side, "No legal move, passing");
                    self.emit(|| GameEvent::Passed { side });
                    game.pass().map_err(|rejected| rejected.into_parts().1)?
                }
                TurnState::Terminated => {
                    unreachable!("a game in progress always has a side to move or pass")
                }
            };
        }
    }

    /// Asks the active selector until the engine accepts a cell.
    fn take_turn(&mut self, game: GameInProgress) -> Result<GameResult, OrchestratorError> {
        let side = game.to_move();
        let mut game = game;

        for attempt in 1..=self.max_attempts {
            let coord = self.selector(side).select(&game)?;
            debug!(%side, %coord, attempt, "Selection received");

            match game.place(coord) {
                Ok(result) => {
                    if let Some(Turn::Placed { mov, flipped }) = result.last_turn() {
                        let (mov, flipped) = (*mov, flipped.clone());
                        self.emit(|| GameEvent::MovePlayed {
                            mov,
                            flipped,
                            grid: result.grid().clone(),
                        });
                    }
                    return Ok(result);
                }
                Err(rejected) => {
                    let (untouched, error) = rejected.into_parts();
                    if matches!(error, MoveError::InvariantViolation(_)) {
                        return Err(error.into());
                    }
                    warn!(%side, %coord, %error, "Selection refused");
                    self.selector(side).on_rejected(coord, &error);
                    self.emit(|| GameEvent::MoveRejected { side, coord, error });
                    game = untouched;
                }
            }
        }

        Err(OrchestratorError::AttemptsExhausted {
            side,
            attempts: self.max_attempts,
        })
    }

    fn selector(&mut self, side: Side) -> &mut dyn MoveSelector {
        match side {
            Side::First => self.first.as_mut(),
            Side::Second => self.second.as_mut(),
        }
    }

    fn emit(&mut self, event: impl FnOnce() -> GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{FirstLegalSelector, RandomSelector};
    use crate::Piece;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<GameEvent>>>);

    impl GameObserver for Recorder {
        fn on_event(&mut self, event: &GameEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    /// Always picks the same cell and counts refusals.
    struct Stubborn {
        coord: Coord,
        refusals: Rc<RefCell<usize>>,
    }

    impl MoveSelector for Stubborn {
        fn select(&mut self, _game: &GameInProgress) -> Result<Coord, SelectorError> {
            Ok(self.coord)
        }

        fn on_rejected(&mut self, _coord: Coord, _error: &MoveError) {
            *self.refusals.borrow_mut() += 1;
        }

        fn name(&self) -> &str {
            "stubborn"
        }
    }

    struct Broken;

    impl MoveSelector for Broken {
        fn select(&mut self, _game: &GameInProgress) -> Result<Coord, SelectorError> {
            Err(SelectorError::new("input closed"))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn test_random_game_runs_to_completion() {
        let mut orchestrator = Orchestrator::new(
            Box::new(RandomSelector::seeded("a", 1)),
            Box::new(RandomSelector::seeded("b", 2)),
        );
        let done = orchestrator.play(GameSetup::new(8).unwrap()).unwrap();
        let score = done.score();
        assert_eq!(score.first + score.second + score.empty, 64);
        assert_eq!(done.placements() + 4, score.first + score.second);
    }

    #[test]
    fn test_events_bracket_the_game() {
        let recorder = Recorder::default();
        let mut orchestrator = Orchestrator::new(
            Box::new(FirstLegalSelector::new("a")),
            Box::new(FirstLegalSelector::new("b")),
        )
        .with_observer(Box::new(recorder.clone()));

        let done = orchestrator.play(GameSetup::new(6).unwrap()).unwrap();
        let events = recorder.0.borrow();

        assert!(matches!(events.first(), Some(GameEvent::Started { to_move: Side::First, .. })));
        assert!(matches!(
            events.last(),
            Some(GameEvent::Finished { termination, .. }) if *termination == done.termination()
        ));
        let played = events
            .iter()
            .filter(|event| matches!(event, GameEvent::MovePlayed { .. }))
            .count();
        let passed = events
            .iter()
            .filter(|event| matches!(event, GameEvent::Passed { .. }))
            .count();
        assert_eq!(played, done.placements());
        assert_eq!(passed, done.passes());
    }

    #[test]
    fn test_refused_selections_exhaust_attempts() {
        let refusals = Rc::new(RefCell::new(0));
        let recorder = Recorder::default();
        let mut orchestrator = Orchestrator::new(
            Box::new(Stubborn {
                coord: Coord::new(0, 0),
                refusals: refusals.clone(),
            }),
            Box::new(FirstLegalSelector::new("b")),
        )
        .with_observer(Box::new(recorder.clone()))
        .with_max_attempts(3);

        let error = orchestrator.play(GameSetup::new(8).unwrap()).unwrap_err();
        assert!(matches!(
            error,
            OrchestratorError::AttemptsExhausted {
                side: Side::First,
                attempts: 3
            }
        ));
        assert_eq!(*refusals.borrow(), 3);
        let rejected = recorder
            .0
            .borrow()
            .iter()
            .filter(|event| matches!(event, GameEvent::MoveRejected { .. }))
            .count();
        assert_eq!(rejected, 3);
    }

    #[test]
    fn test_selector_error_stops_the_loop() {
        let mut orchestrator =
            Orchestrator::new(Box::new(Broken), Box::new(FirstLegalSelector::new("b")));
        let error = orchestrator.play(GameSetup::new(8).unwrap()).unwrap_err();
        assert!(matches!(error, OrchestratorError::Selector(_)));
        assert_eq!(orchestrator.name(Side::First), "broken");
    }

    #[test]
    fn test_stuck_position_passes_twice() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(Coord::new(0, 0), Piece::First).unwrap();
        grid.set(Coord::new(3, 3), Piece::Second).unwrap();

        let recorder = Recorder::default();
        let mut orchestrator = Orchestrator::new(Box::new(Broken), Box::new(Broken))
            .with_observer(Box::new(recorder.clone()));
        let done = orchestrator
            .play(GameSetup::from_position(grid, Side::First))
            .unwrap();

        assert_eq!(done.termination(), Termination::BothSidesStuck);
        let events = recorder.0.borrow();
        assert_eq!(events[1], GameEvent::Passed { side: Side::First });
        assert_eq!(events[2], GameEvent::Passed { side: Side::Second });
    }

    #[test]
    fn test_full_start_grid_skips_started_event() {
        let recorder = Recorder::default();
        let mut orchestrator = Orchestrator::new(Box::new(Broken), Box::new(Broken))
            .with_observer(Box::new(recorder.clone()));
        let done = orchestrator.play(GameSetup::new(2).unwrap()).unwrap();

        assert_eq!(done.termination(), Termination::BoardFull);
        let events = recorder.0.borrow();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            GameEvent::Finished {
                termination: Termination::BoardFull,
                outcome: Outcome::Draw,
                ..
            }
        ));
    }
}
