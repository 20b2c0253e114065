//! Human player that reads cells from a text stream.

use super::{INFO_COLOR, WARNING_COLOR, paint};
use std::io::{BufRead, Write};
use strictly_othello::{Coord, GameInProgress, MoveError, MoveSelector, SelectorError};
use tracing::debug;

/// Human player typing `column row` pairs.
///
/// Refused cells are reported here, not by the game narrator.
pub struct HumanPlayer<R: BufRead, W: Write> {
    name: String,
    input: R,
    output: W,
    colored: bool,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            colored: false,
        }
    }

    /// Colours prompts and refusals.
    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses `column row`, separated by whitespace or a comma.
pub fn parse_coord(line: &str) -> Option<Coord> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let column = parts.next()?.parse().ok()?;
    let row = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(column, row))
}

impl<R: BufRead, W: Write> MoveSelector for HumanPlayer<R, W> {
    fn select(&mut self, game: &GameInProgress) -> Result<Coord, SelectorError> {
        let legal = game
            .legal_moves()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let prompt = paint(
            format!("{} ({}) to move. Legal: {}", self.name, game.to_move(), legal),
            INFO_COLOR,
            self.colored,
        );

        loop {
            write!(self.output, "{}\nEnter column row (or q to quit): ", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SelectorError::new("Input closed"));
            }

            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Err(SelectorError::new("Player quit"));
            }

            match parse_coord(line) {
                Some(coord) => {
                    debug!(player = %self.name, %coord, "Human chose cell");
                    return Ok(coord);
                }
                None => {
                    let warning = format!("Could not read '{}'. Type two numbers, e.g. 3 2.", line);
                    writeln!(self.output, "{}", paint(warning, WARNING_COLOR, self.colored))?;
                }
            }
        }
    }

    fn on_rejected(&mut self, coord: Coord, error: &MoveError) {
        let warning = paint(
            format!("Cannot play {}: {}", coord, error),
            WARNING_COLOR,
            self.colored,
        );
        if let Err(e) = writeln!(self.output, "{}", warning) {
            debug!(error = %e, "Failed to report rejected move");
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
