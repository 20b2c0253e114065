//! Game rules for Othello.
//!
//! Pure functions over a [`Grid`](crate::Grid). Legality and capture share
//! the single per-direction scan in [`scan`], so "is this move legal" and
//! "what gets flipped" can never disagree.

pub mod capture;
pub mod legality;
pub mod scan;
pub mod score;

pub use capture::apply_move;
pub use legality::{flips, has_any_legal_move, is_legal, legal_moves};
pub use scan::{capture_run, would_flip};
pub use score::Score;
