//! Console front end: rendering, keyboard input and narration.

mod human;
mod render;
mod reporter;

pub use human::{HumanPlayer, parse_coord};
pub use render::{render_grid, symbol};
pub use reporter::ConsoleReporter;

use crossterm::style::{Color, Stylize};

/// Colour for refusals and other warnings.
pub const WARNING_COLOR: Color = Color::Red;

/// Colour for prompts and verdicts.
pub const INFO_COLOR: Color = Color::Blue;

/// Wraps `text` in `color` when `enabled`, otherwise returns it unchanged.
pub fn paint(text: impl Into<String>, color: Color, enabled: bool) -> String {
    let text = text.into();
    if enabled {
        text.with(color).to_string()
    } else {
        text
    }
}
