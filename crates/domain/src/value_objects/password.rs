//! Password strength policy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Minimum number of characters in an acceptable password.
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// One requirement of the password policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength => write!(f, "at least {MIN_PASSWORD_LENGTH} characters"),
            Self::Lowercase => write!(f, "a lowercase letter"),
            Self::Uppercase => write!(f, "an uppercase letter"),
            Self::Digit => write!(f, "a digit"),
            Self::Symbol => write!(f, "a character that is neither letter nor digit"),
        }
    }
}

/// Pure predicate over candidate passwords.
///
/// A password passes when it has at least ten characters and contains a
/// lowercase letter, an uppercase letter, a digit, and one character that is
/// neither letter nor digit. Letter classes follow Unicode, so `é` counts as
/// lowercase; digits are the decimal digits `0`-`9` only, so `²` or `½` count
/// as symbols rather than digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Rules the candidate fails, in a stable order. Empty when acceptable.
    pub fn unmet_rules(candidate: &str) -> Vec<PasswordRule> {
        let mut unmet = Vec::new();
        if candidate.chars().count() < MIN_PASSWORD_LENGTH {
            unmet.push(PasswordRule::MinLength);
        }
        if !candidate.chars().any(char::is_lowercase) {
            unmet.push(PasswordRule::Lowercase);
        }
        if !candidate.chars().any(char::is_uppercase) {
            unmet.push(PasswordRule::Uppercase);
        }
        if !candidate.chars().any(is_digit) {
            unmet.push(PasswordRule::Digit);
        }
        if !candidate.chars().any(|c| !(c.is_alphabetic() || is_digit(c))) {
            unmet.push(PasswordRule::Symbol);
        }
        unmet
    }

    pub fn is_satisfied_by(candidate: &str) -> bool {
        Self::unmet_rules(candidate).is_empty()
    }

    /// # Errors
    ///
    /// Returns `DomainError::WeakPassword` listing every unmet rule.
    pub fn check(candidate: &str) -> Result<(), DomainError> {
        let unmet = Self::unmet_rules(candidate);
        if unmet.is_empty() {
            Ok(())
        } else {
            Err(DomainError::WeakPassword { unmet })
        }
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
