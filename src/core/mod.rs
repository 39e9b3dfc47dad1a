//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod score;

pub use code::{Code, CodeError};
pub use score::Score;

/// Number of digits in every code
pub const CODE_LENGTH: usize = 4;

/// Largest integer a code can represent
pub const MAX_CODE_VALUE: u16 = 9999;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: u32 = 10;
