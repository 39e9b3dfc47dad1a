//! Codebreaker engine
//!
//! Owns the secret, the attempt counter and the game status. Presentation
//! layers drive it through `submit_guess` and render what it returns.

use crate::core::{Code, MAX_ATTEMPTS, MAX_CODE_VALUE, Score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or Lost
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Error type for rejected engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidSecretValue(i32),
    GameOver(GameStatus),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSecretValue(value) => {
                write!(f, "Secret value {value} is outside 0-9999")
            }
            Self::GameOver(status) => write!(f, "Game is already {status}"),
        }
    }
}

impl std::error::Error for GameError {}

/// Snapshot of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Code,
    attempt: u32,
    status: GameStatus,
}

impl GameState {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            attempt: 1,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }
}

/// Result of one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Attempt number this guess used (1-10)
    pub attempt: u32,
    pub guess: Code,
    pub score: Score,
    /// Status after the guess was scored
    pub status: GameStatus,
}

/// The codebreaker engine
///
/// One engine plays one game at a time. Scoring and attempt progression are
/// separate operations; `submit_guess` combines them for adapters.
#[derive(Debug, Clone)]
pub struct Engine {
    rng: StdRng,
    state: GameState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine seeded from the operating system and start a game
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an engine whose secrets follow a fixed seed
    ///
    /// # Examples
    /// ```
    /// use laurie_moo::engine::Engine;
    ///
    /// let a = Engine::seeded(7);
    /// let b = Engine::seeded(7);
    /// assert_eq!(a.secret(), b.secret());
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let state = GameState::new(random_code(&mut rng));
        Self { rng, state }
    }

    /// Start a new game with a fresh random secret
    ///
    /// Discards whatever game was in progress.
    pub fn new_game(&mut self) -> &GameState {
        self.state = GameState::new(random_code(&mut self.rng));
        log::debug!("new game started");
        log::trace!("secret is {}", self.state.secret);
        &self.state
    }

    /// Replace the secret with an explicit value (0-9999)
    ///
    /// The attempt counter and status are left alone; see `restart_with`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecretValue` if the value is out of range.
    /// The previous secret is kept in that case.
    pub fn set_secret(&mut self, value: i32) -> Result<(), GameError> {
        let code = secret_code(value)?;
        self.state.secret = code;
        log::debug!("secret set explicitly");
        Ok(())
    }

    /// Start a new game with an explicit secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecretValue` if the value is out of range,
    /// leaving the current game untouched.
    pub fn restart_with(&mut self, value: i32) -> Result<&GameState, GameError> {
        let code = secret_code(value)?;
        self.state = GameState::new(code);
        log::debug!("new game started with explicit secret");
        Ok(&self.state)
    }

    /// Score a guess without spending an attempt
    #[must_use]
    pub fn score_guess(&self, guess: &Code) -> Score {
        let score = Score::calculate(guess, &self.state.secret);
        log::trace!("{guess} scored {} big, {} little", score.big, score.little);
        score
    }

    /// Whether `guess` is exactly the secret
    #[must_use]
    pub fn is_winning_guess(&self, guess: &Code) -> bool {
        *guess == self.state.secret
    }

    pub fn advance_attempt(&mut self) {
        self.state.attempt = self.state.attempt.saturating_add(1);
    }

    #[must_use]
    pub const fn current_attempt(&self) -> u32 {
        self.state.attempt
    }

    /// Put the counter back to 1 and reopen the game, keeping the secret
    ///
    /// Paired with `set_secret` this starts a fresh game on a chosen code.
    pub fn reset_attempt(&mut self) {
        self.state.attempt = 1;
        self.state.status = GameStatus::InProgress;
    }

    /// Score a guess, update the status and spend an attempt
    ///
    /// The 10th scored guess ends the game if it is not a win.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has already been won or lost.
    /// Nothing changes in that case.
    ///
    /// # Examples
    /// ```
    /// use laurie_moo::core::Code;
    /// use laurie_moo::engine::{Engine, GameStatus};
    ///
    /// let mut engine = Engine::seeded(1);
    /// engine.restart_with(423).unwrap();
    ///
    /// let turn = engine.submit_guess(Code::try_from(423).unwrap()).unwrap();
    /// assert_eq!(turn.status, GameStatus::Won);
    /// assert!(engine.is_over());
    /// ```
    pub fn submit_guess(&mut self, guess: Code) -> Result<Turn, GameError> {
        if self.state.status.is_terminal() {
            return Err(GameError::GameOver(self.state.status));
        }

        let attempt = self.state.attempt;
        let score = self.score_guess(&guess);

        if score.is_perfect() {
            self.state.status = GameStatus::Won;
            log::debug!("game won on attempt {attempt}");
        } else if attempt >= MAX_ATTEMPTS {
            self.state.status = GameStatus::Lost;
            log::debug!("game lost after {attempt} attempts");
        }
        self.advance_attempt();

        Ok(Turn {
            attempt,
            guess,
            score,
            status: self.state.status,
        })
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.status.is_terminal()
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The secret, for revealing once the game is over
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.state.secret
    }

    /// Guesses scored so far in this game
    #[must_use]
    pub const fn guesses_used(&self) -> u32 {
        self.state.attempt.saturating_sub(1)
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> u32 {
        if self.state.status.is_terminal() {
            0
        } else {
            MAX_ATTEMPTS.saturating_sub(self.guesses_used())
        }
    }
}

/// Four independent uniform digits, drawn as one uniform value in 0-9999
fn random_code<R: Rng + ?Sized>(rng: &mut R) -> Code {
    Code::from_value_unchecked(rng.random_range(0..=MAX_CODE_VALUE))
}

fn secret_code(value: i32) -> Result<Code, GameError> {
    Code::try_from(value).map_err(|_| GameError::InvalidSecretValue(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: i32) -> Code {
        Code::try_from(value).unwrap()
    }

    fn engine_with_secret(value: i32) -> Engine {
        let mut engine = Engine::seeded(42);
        engine.restart_with(value).unwrap();
        engine
    }

    #[test]
    fn new_engine_starts_in_progress_at_attempt_one() {
        let engine = Engine::seeded(0);
        assert_eq!(engine.current_attempt(), 1);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.guesses_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn seeded_engines_share_secret_sequence() {
        let mut a = Engine::seeded(99);
        let mut b = Engine::seeded(99);
        for _ in 0..5 {
            assert_eq!(a.new_game().secret(), b.new_game().secret());
        }
    }

    #[test]
    fn new_game_discards_progress() {
        let mut engine = engine_with_secret(1234);
        engine.submit_guess(code(1234)).unwrap();
        assert!(engine.is_over());

        engine.new_game();
        assert_eq!(engine.current_attempt(), 1);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn set_secret_rejects_out_of_range_and_keeps_old_secret() {
        let mut engine = Engine::seeded(3);
        engine.set_secret(9999).unwrap();
        assert_eq!(engine.set_secret(-1), Err(GameError::InvalidSecretValue(-1)));
        assert_eq!(engine.secret().digits(), &[9, 9, 9, 9]);

        assert_eq!(
            engine.set_secret(10_000),
            Err(GameError::InvalidSecretValue(10_000))
        );
        assert_eq!(engine.secret().value(), 9999);
    }

    #[test]
    fn set_secret_keeps_attempt_counter() {
        let mut engine = Engine::seeded(3);
        engine.advance_attempt();
        engine.advance_attempt();
        engine.set_secret(7).unwrap();
        assert_eq!(engine.current_attempt(), 3);
        assert_eq!(engine.secret().digits(), &[0, 0, 0, 7]);
    }

    #[test]
    fn score_guess_does_not_spend_attempt() {
        let engine = engine_with_secret(1123);
        let score = engine.score_guess(&code(1119));
        assert_eq!(score, Score::new(2, 0));
        assert_eq!(engine.current_attempt(), 1);
    }

    #[test]
    fn is_winning_guess_is_pure() {
        let engine = engine_with_secret(423);
        assert!(engine.is_winning_guess(&code(423)));
        assert!(engine.is_winning_guess(&code(423)));
        assert!(!engine.is_winning_guess(&code(4230)));
        assert_eq!(engine.current_attempt(), 1);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn attempt_counter_lifecycle() {
        let mut engine = Engine::seeded(5);
        engine.reset_attempt();
        assert_eq!(engine.current_attempt(), 1);
        for _ in 0..9 {
            engine.advance_attempt();
        }
        assert_eq!(engine.current_attempt(), 10);
        engine.reset_attempt();
        assert_eq!(engine.current_attempt(), 1);
    }

    #[test]
    fn set_secret_then_reset_reopens_finished_game() {
        let mut engine = engine_with_secret(1234);
        engine.submit_guess(code(1234)).unwrap();
        assert_eq!(engine.status(), GameStatus::Won);

        engine.set_secret(5678).unwrap();
        engine.reset_attempt();
        assert_eq!(engine.current_attempt(), 1);
        assert_eq!(engine.status(), GameStatus::InProgress);

        let turn = engine.submit_guess(code(5678)).unwrap();
        assert_eq!(turn.attempt, 1);
        assert_eq!(turn.status, GameStatus::Won);
    }

    #[test]
    fn advance_attempt_saturates() {
        let mut engine = Engine::seeded(6);
        engine.state.attempt = u32::MAX;
        engine.advance_attempt();
        assert_eq!(engine.current_attempt(), u32::MAX);
    }

    #[test]
    fn submit_guess_win() {
        let mut engine = engine_with_secret(5678);
        let first = engine.submit_guess(code(1234)).unwrap();
        assert_eq!(first.attempt, 1);
        assert_eq!(first.status, GameStatus::InProgress);

        let second = engine.submit_guess(code(5678)).unwrap();
        assert_eq!(second.attempt, 2);
        assert_eq!(second.score, Score::PERFECT);
        assert_eq!(second.status, GameStatus::Won);
        assert_eq!(engine.guesses_used(), 2);
        assert_eq!(engine.guesses_remaining(), 0);
    }

    #[test]
    fn tenth_wrong_guess_loses() {
        let mut engine = engine_with_secret(5678);
        for n in 1..MAX_ATTEMPTS {
            let turn = engine.submit_guess(code(1234)).unwrap();
            assert_eq!(turn.attempt, n);
            assert_eq!(turn.status, GameStatus::InProgress);
        }
        let last = engine.submit_guess(code(1234)).unwrap();
        assert_eq!(last.attempt, MAX_ATTEMPTS);
        assert_eq!(last.status, GameStatus::Lost);
        assert_eq!(engine.guesses_used(), MAX_ATTEMPTS);
    }

    #[test]
    fn tenth_guess_can_still_win() {
        let mut engine = engine_with_secret(5678);
        for _ in 1..MAX_ATTEMPTS {
            engine.submit_guess(code(1234)).unwrap();
        }
        let last = engine.submit_guess(code(5678)).unwrap();
        assert_eq!(last.status, GameStatus::Won);
    }

    #[test]
    fn finished_game_rejects_guesses_unchanged() {
        let mut engine = engine_with_secret(1);
        engine.submit_guess(code(1)).unwrap();
        let attempt = engine.current_attempt();

        let err = engine.submit_guess(code(2)).unwrap_err();
        assert_eq!(err, GameError::GameOver(GameStatus::Won));
        assert_eq!(engine.current_attempt(), attempt);
        assert_eq!(err.to_string(), "Game is already won");
    }

    #[test]
    fn restart_with_invalid_value_keeps_game() {
        let mut engine = engine_with_secret(1111);
        engine.submit_guess(code(2222)).unwrap();
        assert!(engine.restart_with(12_345).is_err());
        assert_eq!(engine.secret().value(), 1111);
        assert_eq!(engine.current_attempt(), 2);
    }

    #[test]
    fn random_secrets_use_every_digit_position() {
        let mut engine = Engine::seeded(2024);
        let mut seen = [[false; 10]; 4];
        for _ in 0..500 {
            let secret = engine.new_game().secret();
            for (pos, &d) in secret.digits().iter().enumerate() {
                seen[pos][d as usize] = true;
            }
        }
        assert!(seen.iter().all(|row| row.iter().all(|&s| s)));
    }
}
