//! Batch random-vs-random games with a summary.

use derive_more::{Display, Error, From};
use serde::Serialize;
use strictly_othello::{
    EngineError, GameSetup, Orchestrator, OrchestratorError, Outcome, RandomSelector, Side,
    Termination,
};
use tracing::{debug, info, instrument};

/// Aggregate results of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Games played.
    pub games: usize,
    /// Board dimension.
    pub size: usize,
    /// Games won by the side moving first.
    pub first_wins: usize,
    /// Games won by the side moving second.
    pub second_wins: usize,
    /// Games with equal disc counts.
    pub draws: usize,
    /// Games ended by a full board.
    pub board_full: usize,
    /// Games ended by two consecutive passes.
    pub both_stuck: usize,
    /// Mean discs placed per game.
    pub average_placements: f64,
    /// Mean passes per game.
    pub average_passes: f64,
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games played:   {} on {}x{}", self.games, self.size, self.size)?;
        writeln!(f, "First wins:     {}", self.first_wins)?;
        writeln!(f, "Second wins:    {}", self.second_wins)?;
        writeln!(f, "Draws:          {}", self.draws)?;
        writeln!(f, "Board full:     {}", self.board_full)?;
        writeln!(f, "Both stuck:     {}", self.both_stuck)?;
        writeln!(f, "Avg placements: {:.1}", self.average_placements)?;
        write!(f, "Avg passes:     {:.2}", self.average_passes)
    }
}

/// Failure while running a simulation.
#[derive(Debug, Display, Error, From)]
pub enum SimulationError {
    /// The board could not be created.
    #[display("{_0}")]
    Engine(EngineError),
    /// A game stopped before finishing.
    #[display("{_0}")]
    Orchestrator(OrchestratorError),
}

/// Plays `games` random games on a `size`×`size` board.
///
/// With a seed every game is reproducible; game `i` seeds its two selectors
/// with `seed + 2i` and `seed + 2i + 1`.
#[instrument]
pub fn simulate(
    games: usize,
    size: usize,
    seed: Option<u64>,
) -> Result<SimulationSummary, SimulationError> {
    let mut summary = SimulationSummary {
        games,
        size,
        first_wins: 0,
        second_wins: 0,
        draws: 0,
        board_full: 0,
        both_stuck: 0,
        average_placements: 0.0,
        average_passes: 0.0,
    };
    let mut placements = 0usize;
    let mut passes = 0usize;

    for index in 0..games {
        let selector = |side: Side| {
            let name = format!("random {}", side);
            match seed {
                Some(seed) => {
                    let offset = 2 * index as u64 + u64::from(side == Side::Second);
                    RandomSelector::seeded(name, seed.wrapping_add(offset))
                }
                None => RandomSelector::new(name),
            }
        };

        let done = Orchestrator::new(
            Box::new(selector(Side::First)),
            Box::new(selector(Side::Second)),
        )
        .play(GameSetup::new(size)?)?;

        match done.outcome() {
            Outcome::Winner(Side::First) => summary.first_wins += 1,
            Outcome::Winner(Side::Second) => summary.second_wins += 1,
            Outcome::Draw => summary.draws += 1,
        }
        match done.termination() {
            Termination::BoardFull => summary.board_full += 1,
            Termination::BothSidesStuck => summary.both_stuck += 1,
        }
        placements += done.placements();
        passes += done.passes();
        debug!(game = index, outcome = %done.outcome(), "Simulated game finished");
    }

    if games > 0 {
        summary.average_placements = placements as f64 / games as f64;
        summary.average_passes = passes as f64 / games as f64;
    }

    info!(
        first_wins = summary.first_wins,
        second_wins = summary.second_wins,
        draws = summary.draws,
        "Simulation complete"
    );
    Ok(summary)
}
