//! Four-digit code representation
//!
//! A `Code` is used both for the secret and for each guess. Digits are stored
//! most-significant first, so `Code::try_from(423)` is `[0, 4, 2, 3]`.

use super::{CODE_LENGTH, MAX_CODE_VALUE};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of exactly four decimal digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for values that cannot form a code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidDigit(char),
    DigitOutOfRange(u8),
    OutOfRange(i32),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::InvalidDigit(ch) => write!(f, "Code contains a non-digit character '{ch}'"),
            Self::DigitOutOfRange(d) => write!(f, "Digit {d} is outside 0-9"),
            Self::OutOfRange(value) => {
                write!(f, "Code value {value} is outside 0-{MAX_CODE_VALUE}")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from individual digits
    ///
    /// # Errors
    /// Returns `CodeError::DigitOutOfRange` if any digit is greater than 9.
    ///
    /// # Examples
    /// ```
    /// use laurie_moo::core::Code;
    ///
    /// let code = Code::from_digits([0, 4, 2, 3]).unwrap();
    /// assert_eq!(code.to_string(), "0423");
    /// assert!(Code::from_digits([1, 2, 3, 10]).is_err());
    /// ```
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(CodeError::DigitOutOfRange(bad));
        }
        Ok(Self(digits))
    }

    /// Get the digits, most significant first
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Integer value of the code (0-9999)
    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d))
    }

    /// Iterate every possible code in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=MAX_CODE_VALUE).map(Self::from_value_unchecked)
    }

    /// Split a value known to be in range into digits
    pub(crate) fn from_value_unchecked(value: u16) -> Self {
        debug_assert!(value <= 9999, "Code value must be <= 9999");
        let mut digits = [0u8; CODE_LENGTH];
        let mut n = value;
        for slot in digits.iter_mut().rev() {
            *slot = (n % 10) as u8;
            n /= 10;
        }
        Self(digits)
    }
}

impl TryFrom<i32> for Code {
    type Error = CodeError;

    /// Convert an integer in 0-9999, keeping leading zeros
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .filter(|&v| v <= MAX_CODE_VALUE)
            .map(Self::from_value_unchecked)
            .ok_or(CodeError::OutOfRange(value))
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse exactly four ASCII digits, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let count = trimmed.chars().count();
        if count != CODE_LENGTH {
            return Err(CodeError::InvalidLength(count));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(trimmed.chars()) {
            let d = ch.to_digit(10).ok_or(CodeError::InvalidDigit(ch))?;
            *slot = d as u8;
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
