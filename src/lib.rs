//! LaurieMOO
//!
//! A four-digit code-breaking game in the Bulls and Cows family. Each guess is
//! answered with one "MOO!" per digit in the right place and one "moo." per
//! digit that belongs elsewhere.
//!
//! # Quick Start
//!
//! ```rust
//! use laurie_moo::core::Code;
//! use laurie_moo::engine::{Engine, GameStatus, render_feedback};
//!
//! let mut engine = Engine::seeded(42);
//! engine.restart_with(1234).unwrap();
//!
//! let turn = engine.submit_guess("4231".parse::<Code>().unwrap()).unwrap();
//! assert_eq!((turn.score.big, turn.score.little), (2, 2));
//! assert_eq!(turn.status, GameStatus::InProgress);
//! println!("{}", render_feedback(turn.score));
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod engine;

// Auto-player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
