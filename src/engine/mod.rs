//! The codebreaker engine and its feedback rendering
//!
//! No presentation code lives here; adapters call in and render the results.

mod feedback;
mod game;

pub use feedback::{BIG_MOO, COWBELLS, LITTLE_MOO, render_feedback, render_feedback_with};
pub use game::{Engine, GameError, GameState, GameStatus, Turn};
