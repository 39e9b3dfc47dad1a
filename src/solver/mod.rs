//! Code-breaking auto-player
//!
//! Strategies that only ever guess codes consistent with earlier feedback.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{ConsistentStrategy, RandomStrategy, Strategy, StrategyType};
