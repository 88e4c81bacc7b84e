//! Random short identifier generation.
//!
//! An [`IdGenerator`] is an immutable value built once from configuration. It
//! draws identifiers uniformly at random, with replacement, from its alphabet
//! and carries the collision retry budget used by
//! [`crate::application::services::LinkService`].

use rand::Rng;

/// Default alphabet: digits, uppercase and lowercase ASCII letters.
pub const DEFAULT_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Default identifier length.
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Default number of generate-and-insert attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Upper bound on the identifier length.
pub const MAX_ID_LENGTH: usize = 64;

/// Errors raised when building an [`IdGenerator`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdGeneratorError {
    #[error("Alphabet must not be empty")]
    EmptyAlphabet,

    #[error("Alphabet character {0:?} is not allowed (use ASCII letters, digits, '-' or '_')")]
    InvalidCharacter(char),

    #[error("Alphabet contains duplicate character {0:?}")]
    DuplicateCharacter(char),

    #[error("Identifier length must be between 1 and {MAX_ID_LENGTH}, got {0}")]
    InvalidLength(usize),

    #[error("Maximum attempts must be at least 1")]
    ZeroAttempts,
}

/// Generates fixed-length random identifiers.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    alphabet: Vec<u8>,
    length: usize,
    max_attempts: Option<u32>,
}

impl IdGenerator {
    /// Builds a generator.
    ///
    /// `max_attempts = None` retries without limit.
    ///
    /// # Errors
    ///
    /// Returns [`IdGeneratorError`] if the alphabet is empty, contains
    /// characters outside `[A-Za-z0-9_-]` or duplicates, if `length` is outside
    /// `1..=MAX_ID_LENGTH`, or if `max_attempts` is `Some(0)`.
    pub fn new(
        alphabet: &str,
        length: usize,
        max_attempts: Option<u32>,
    ) -> Result<Self, IdGeneratorError> {
        if alphabet.is_empty() {
            return Err(IdGeneratorError::EmptyAlphabet);
        }

        let mut seen = Vec::with_capacity(alphabet.len());
        for c in alphabet.chars() {
            if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                return Err(IdGeneratorError::InvalidCharacter(c));
            }
            if seen.contains(&(c as u8)) {
                return Err(IdGeneratorError::DuplicateCharacter(c));
            }
            seen.push(c as u8);
        }

        if length == 0 || length > MAX_ID_LENGTH {
            return Err(IdGeneratorError::InvalidLength(length));
        }

        if max_attempts == Some(0) {
            return Err(IdGeneratorError::ZeroAttempts);
        }

        Ok(Self {
            alphabet: seen,
            length,
            max_attempts,
        })
    }

    /// Produces a new random identifier.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| char::from(self.alphabet[rng.random_range(0..self.alphabet.len())]))
            .collect()
    }

    /// Returns true if `id` has the configured length and only alphabet characters.
    #[cfg(test)]
    pub fn is_well_formed(&self, id: &str) -> bool {
        id.len() == self.length && id.bytes().all(|b| self.alphabet.contains(&b))
    }

    #[cfg(test)]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Retry budget, `None` when unbounded.
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    #[cfg(test)]
    pub fn alphabet(&self) -> &str {
        // Alphabet is validated as ASCII in `new`.
        std::str::from_utf8(&self.alphabet).unwrap_or_default()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.as_bytes().to_vec(),
            length: DEFAULT_ID_LENGTH,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}
