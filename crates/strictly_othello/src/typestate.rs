//! Phase-specific typestate structs for Othello.
//!
//! Each phase is its own type. A `GameSetup` has not placed its start
//! position yet, a `GameInProgress` always has an empty cell and an active
//! side, and a `GameFinished` always has a termination reason and offers no
//! way to move.

use super::action::{Move, MoveError};
use super::contracts::{Contract, LegalMove, MoveContract};
use super::phases::{Outcome, Termination, Turn, TurnState};
use super::rules::{Score, apply_move, has_any_legal_move, legal_moves};
use super::{Coord, EngineError, Grid, Side};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
#[derive(Debug, Clone)]
pub struct GameSetup {
    grid: Grid,
    to_move: Side,
    /// True when the grid was supplied already arranged.
    arranged: bool,
}

impl GameSetup {
    /// Creates a game on an empty `size`×`size` grid.
    ///
    /// The start position is placed by [`GameSetup::start`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Ok(Self {
            grid: Grid::new(size)?,
            to_move: Side::First,
            arranged: false,
        })
    }

    /// Creates a game from an already arranged grid.
    ///
    /// The grid is used as-is; no start position is added.
    #[instrument(skip(grid), fields(size = grid.size()))]
    pub fn from_position(grid: Grid, to_move: Side) -> Self {
        Self {
            grid,
            to_move,
            arranged: true,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Starts the game (consumes setup).
    ///
    /// Places the start position exactly once. A grid that is already full
    /// finishes immediately.
    #[instrument(skip(self), fields(size = self.grid.size(), arranged = self.arranged))]
    pub fn start(self) -> GameResult {
        let mut grid = self.grid;
        if !self.arranged {
            grid.initialize_start_position();
        }

        info!(to_move = %self.to_move, "Game started");
        GameInProgress {
            initial_occupied: grid.occupied(),
            grid,
            to_move: self.to_move,
            previous_skipped: false,
            placements: 0,
            passes: 0,
            last_turn: None,
        }
        .settle()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves and passes.
///
/// Invariants enforced by construction:
/// - the grid has at least one empty cell
/// - the skip flag is only set by a pass
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) grid: Grid,
    pub(crate) to_move: Side,
    pub(crate) previous_skipped: bool,
    pub(crate) placements: usize,
    pub(crate) passes: usize,
    pub(crate) initial_occupied: usize,
    pub(crate) last_turn: Option<Turn>,
}

impl GameInProgress {
    /// Whether the active side must play or pass.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn turn_state(&self) -> TurnState {
        if has_any_legal_move(&self.grid, self.to_move.piece()) {
            TurnState::AwaitingMove(self.to_move)
        } else {
            TurnState::Skipped(self.to_move)
        }
    }

    /// Validates a move without applying it.
    pub fn check(&self, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, self)
    }

    /// Places a disc for the side to move.
    pub fn place(self, coord: Coord) -> Result<GameResult, Rejected> {
        let side = self.to_move;
        self.make_move(Move::new(side, coord))
    }

    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// On failure the untouched game comes back inside [`Rejected`] so the
    /// caller can try another cell.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalMove)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<GameResult, Rejected> {
        if let Err(error) = MoveContract::pre(&self, &action) {
            warn!(%error, "Move rejected");
            return Err(Rejected::new(self, error));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        let flipped = match apply_move(&mut game.grid, action.coord, action.side.piece()) {
            Ok(flipped) => flipped,
            Err(error) => {
                warn!(%error, "Grid refused move");
                return Err(Rejected::new(game, error.into()));
            }
        };

        debug!(flipped = flipped.len(), "Move applied");
        game.placements += 1;
        game.previous_skipped = false;
        game.to_move = action.side.opponent();
        game.last_turn = Some(Turn::Placed {
            mov: action,
            flipped,
        });

        if game.grid.is_full() {
            return Ok(game.settle());
        }

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        if let Err(error) = MoveContract::post(&before, &game) {
            warn!(%error, "Postcondition failed; move rolled back");
            return Err(Rejected::new(before, error));
        }

        Ok(GameResult::InProgress(game))
    }

    /// Records a forced skip for the side to move.
    ///
    /// Refused while that side still has a legal move. A second consecutive
    /// skip terminates the game.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn pass(self) -> Result<GameResult, Rejected> {
        let side = self.to_move;
        if has_any_legal_move(&self.grid, side.piece()) {
            return Err(Rejected::new(self, MoveError::PassNotAllowed(side)));
        }

        let mut game = self;
        game.passes += 1;
        game.last_turn = Some(Turn::Passed(side));

        if game.previous_skipped {
            info!("Both sides passed in a row");
            return Ok(GameResult::Finished(GameFinished::from_game(
                game,
                Termination::BothSidesStuck,
            )));
        }

        debug!(%side, "Side passes");
        game.previous_skipped = true;
        game.to_move = side.opponent();
        Ok(game.settle())
    }

    /// Finishes the game if the grid has no empty cell left.
    fn settle(self) -> GameResult {
        if self.grid.is_full() {
            info!("Board is full");
            GameResult::Finished(GameFinished::from_game(self, Termination::BoardFull))
        } else {
            GameResult::InProgress(self)
        }
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns true if the immediately preceding turn was a pass.
    pub fn previous_skipped(&self) -> bool {
        self.previous_skipped
    }

    /// Number of discs placed since the start.
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Number of passes since the start.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// The most recent turn, if any.
    pub fn last_turn(&self) -> Option<&Turn> {
        self.last_turn.as_ref()
    }

    /// Legal targets for the side to move.
    pub fn legal_moves(&self) -> Vec<Coord> {
        legal_moves(&self.grid, self.to_move.piece())
    }

    /// Current disc counts.
    pub fn score(&self) -> Score {
        Score::of(&self.grid)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - termination reason determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    grid: Grid,
    termination: Termination,
    last_turn: Option<Turn>,
    placements: usize,
    passes: usize,
}

impl GameFinished {
    fn from_game(game: GameInProgress, termination: Termination) -> Self {
        Self {
            grid: game.grid,
            termination,
            last_turn: game.last_turn,
            placements: game.placements,
            passes: game.passes,
        }
    }

    /// Returns the outcome derived from the final disc counts.
    pub fn outcome(&self) -> Outcome {
        match self.score().leader() {
            Some(side) => Outcome::Winner(side),
            None => Outcome::Draw,
        }
    }

    /// Final disc counts.
    pub fn score(&self) -> Score {
        Score::of(&self.grid)
    }

    /// Why the game ended.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Always [`TurnState::Terminated`].
    pub fn turn_state(&self) -> TurnState {
        TurnState::Terminated
    }

    /// Returns the final grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The turn that ended the game, if any was played.
    pub fn last_turn(&self) -> Option<&Turn> {
        self.last_turn.as_ref()
    }

    /// Number of discs placed during the game.
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Number of passes during the game.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Restarts on a fresh grid of the same size (consumes finished).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup {
            grid: Grid::blank(self.grid.size()),
            to_move: Side::First,
            arranged: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Types
// ─────────────────────────────────────────────────────────────

/// Result of a completed turn.
#[derive(Debug, Clone)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Current turn state.
    pub fn turn_state(&self) -> TurnState {
        match self {
            GameResult::InProgress(game) => game.turn_state(),
            GameResult::Finished(game) => game.turn_state(),
        }
    }

    /// Returns the grid for either phase.
    pub fn grid(&self) -> &Grid {
        match self {
            GameResult::InProgress(game) => game.grid(),
            GameResult::Finished(game) => game.grid(),
        }
    }

    /// The most recent turn for either phase.
    pub fn last_turn(&self) -> Option<&Turn> {
        match self {
            GameResult::InProgress(game) => game.last_turn(),
            GameResult::Finished(game) => game.last_turn(),
        }
    }
}

/// A refused move or pass, handing the unchanged game back.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("{error}")]
pub struct Rejected {
    game: Box<GameInProgress>,
    error: MoveError,
}

impl Rejected {
    fn new(game: GameInProgress, error: MoveError) -> Self {
        Self {
            game: Box::new(game),
            error,
        }
    }

    /// Why the turn was refused.
    pub fn error(&self) -> &MoveError {
        &self.error
    }

    /// Returns the game as it was before the attempt.
    pub fn into_game(self) -> GameInProgress {
        *self.game
    }

    /// Splits into the untouched game and the error.
    pub fn into_parts(self) -> (GameInProgress, MoveError) {
        (*self.game, self.error)
    }
}
