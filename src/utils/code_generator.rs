//! Random short code generation.
//!
//! Codes are drawn uniformly from a fixed alphabet with a fixed length. The
//! length never depends on the URL being shortened.

use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// The 52 upper and lower case Latin letters.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default number of candidates tried before giving up on a shorten request.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Longest code the generator will produce.
pub const MAX_CODE_LENGTH: usize = 64;

/// Reasons a generator configuration is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeGeneratorError {
    #[error("code length must be between 1 and {max}, got {0}", max = MAX_CODE_LENGTH)]
    InvalidLength(usize),

    #[error("alphabet needs at least 2 characters, got {0}")]
    AlphabetTooSmall(usize),

    #[error("alphabet contains duplicate character '{0}'")]
    DuplicateCharacter(char),

    #[error("alphabet character '{0}' is not URL-safe (allowed: ASCII letters, digits, '-', '_')")]
    UnsafeCharacter(char),
}

/// Generates fixed-length random codes from a configured alphabet.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    alphabet: Vec<char>,
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// Returns [`CodeGeneratorError`] if the length is out of range or the
    /// alphabet is too small, repeats a character, or contains characters
    /// that cannot appear verbatim in a URL path.
    pub fn new(alphabet: &str, length: usize) -> Result<Self, CodeGeneratorError> {
        if length == 0 || length > MAX_CODE_LENGTH {
            return Err(CodeGeneratorError::InvalidLength(length));
        }

        let mut seen = HashSet::new();
        let mut chars = Vec::with_capacity(alphabet.len());

        for c in alphabet.chars() {
            if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                return Err(CodeGeneratorError::UnsafeCharacter(c));
            }
            if !seen.insert(c) {
                return Err(CodeGeneratorError::DuplicateCharacter(c));
            }
            chars.push(c);
        }

        if chars.len() < 2 {
            return Err(CodeGeneratorError::AlphabetTooSmall(chars.len()));
        }

        Ok(Self {
            alphabet: chars,
            length,
        })
    }

    /// Draws one candidate code.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Number of distinct codes this generator can produce, saturating at
    /// `u128::MAX`.
    pub fn code_space(&self) -> u128 {
        let base = self.alphabet.len() as u128;
        (0..self.length).fold(1u128, |acc, _| acc.saturating_mul(base))
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            length: DEFAULT_CODE_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generator_produces_six_letters() {
        let generator = CodeGenerator::default();
        let code = generator.generate();

        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_generated_code_uses_only_alphabet() {
        let generator = CodeGenerator::new("ab", 32).unwrap();

        for _ in 0..100 {
            let code = generator.generate();
            assert_eq!(code.len(), 32);
            assert!(code.chars().all(|c| c == 'a' || c == 'b'));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = CodeGenerator::new(DEFAULT_ALPHABET, 12).unwrap();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_every_alphabet_character_is_reachable() {
        let generator = CodeGenerator::new("xyz", 1).unwrap();
        let seen: HashSet<String> = (0..500).map(|_| generator.generate()).collect();

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_rejects_zero_length() {
        assert_eq!(
            CodeGenerator::new(DEFAULT_ALPHABET, 0).unwrap_err(),
            CodeGeneratorError::InvalidLength(0)
        );
    }

    #[test]
    fn test_rejects_overlong_codes() {
        assert!(CodeGenerator::new(DEFAULT_ALPHABET, MAX_CODE_LENGTH + 1).is_err());
        assert!(CodeGenerator::new(DEFAULT_ALPHABET, MAX_CODE_LENGTH).is_ok());
    }

    #[test]
    fn test_rejects_single_character_alphabet() {
        assert_eq!(
            CodeGenerator::new("a", 6).unwrap_err(),
            CodeGeneratorError::AlphabetTooSmall(1)
        );
        assert_eq!(
            CodeGenerator::new("", 6).unwrap_err(),
            CodeGeneratorError::AlphabetTooSmall(0)
        );
    }

    #[test]
    fn test_rejects_duplicate_characters() {
        assert_eq!(
            CodeGenerator::new("abca", 6).unwrap_err(),
            CodeGeneratorError::DuplicateCharacter('a')
        );
    }

    #[test]
    fn test_rejects_url_unsafe_characters() {
        assert_eq!(
            CodeGenerator::new("ab/", 6).unwrap_err(),
            CodeGeneratorError::UnsafeCharacter('/')
        );
        assert!(CodeGenerator::new("ab c", 6).is_err());
        assert!(CodeGenerator::new("abé", 6).is_err());
    }

    #[test]
    fn test_accepts_digits_and_separators() {
        assert!(CodeGenerator::new("0123456789-_", 8).is_ok());
    }

    #[test]
    fn test_code_space() {
        let generator = CodeGenerator::default();
        assert_eq!(generator.code_space(), 52u128.pow(6));

        let huge = CodeGenerator::new(DEFAULT_ALPHABET, MAX_CODE_LENGTH).unwrap();
        assert_eq!(huge.code_space(), u128::MAX);
    }
}
