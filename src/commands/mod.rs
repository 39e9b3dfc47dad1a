//! Command implementations

pub mod score;
pub mod session;
pub mod simple;
pub mod simulate;

pub use score::{ScoreReport, parse_code_arg, score_codes};
pub use session::Statistics;
pub use simple::run_simple;
pub use simulate::{GameOutcome, SimulationResult, play_game, run_simulation};
