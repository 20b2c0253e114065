//! Console observer that narrates a game.

use super::render::render_grid;
use super::{INFO_COLOR, WARNING_COLOR, paint};
use std::io::Write;
use std::time::Duration;
use strictly_othello::{GameEvent, GameObserver, Side};
use tracing::warn;

/// Prints events and the board to a text stream.
///
/// Refused selections are left to the selector that made them, see
/// [`MoveSelector::on_rejected`](strictly_othello::MoveSelector::on_rejected).
pub struct ConsoleReporter<W: Write> {
    output: W,
    first_name: String,
    second_name: String,
    colored: bool,
    delay: Duration,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter naming the two players.
    pub fn new(output: W, first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            output,
            first_name: first_name.into(),
            second_name: second_name.into(),
            colored: false,
            delay: Duration::ZERO,
        }
    }

    /// Colours passes and the final verdict.
    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Pauses for `delay` after every placement or pass.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the output stream.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn name(&self, side: Side) -> &str {
        match side {
            Side::First => &self.first_name,
            Side::Second => &self.second_name,
        }
    }

    fn describe(&self, event: &GameEvent) -> Option<String> {
        let text = match event {
            GameEvent::Started { grid, to_move } => format!(
                "New game on a {size}x{size} board. {} (●) vs {} (○).\n{}{} moves first.",
                self.first_name,
                self.second_name,
                render_grid(grid),
                self.name(*to_move),
                size = grid.size(),
            ),
            GameEvent::MovePlayed { mov, flipped, grid } => format!(
                "{} played {}, flipping {}.\n{}",
                self.name(mov.side),
                mov.coord,
                flipped.len(),
                render_grid(grid),
            ),
            GameEvent::MoveRejected { .. } => return None,
            GameEvent::Passed { side } => paint(
                format!("{} has no legal move and passes.", self.name(*side)),
                WARNING_COLOR,
                self.colored,
            ),
            GameEvent::Finished {
                termination,
                outcome,
                score,
                ..
            } => {
                let verdict = match outcome.winner() {
                    Some(side) => format!("Winner: {}", self.name(side)),
                    None => "It's a draw.".to_string(),
                };
                format!(
                    "Game over: {}.\n{} {} - {} {}\n{}",
                    termination,
                    self.first_name,
                    score.first,
                    score.second,
                    self.second_name,
                    paint(verdict, INFO_COLOR, self.colored)
                )
            }
        };
        Some(text)
    }
}

impl<W: Write> GameObserver for ConsoleReporter<W> {
    fn on_event(&mut self, event: &GameEvent) {
        let Some(text) = self.describe(event) else {
            return;
        };
        if let Err(error) = writeln!(self.output, "{}", text).and_then(|()| self.output.flush()) {
            warn!(%error, "Failed to write game event");
        }

        let paced = matches!(event, GameEvent::MovePlayed { .. } | GameEvent::Passed { .. });
        if paced && !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}
