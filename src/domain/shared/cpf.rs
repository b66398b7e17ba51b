// src/domain/shared/cpf.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const CPF_LENGTH: usize = 11;

/// Brazilian taxpayer number, kept as its 11 bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Strips punctuation and checks length, repeated digits and both check digits.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let digits: Vec<usize> = raw
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as usize)
            .collect();

        if digits.len() != CPF_LENGTH {
            return Err(DomainError::Validation("cpf must contain 11 digits".into()));
        }

        if digits.iter().all(|d| *d == digits[0]) {
            return Err(DomainError::Validation("cpf is invalid".into()));
        }

        if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
            return Err(DomainError::Validation("cpf is invalid".into()));
        }

        Ok(Self(Self::normalize(raw)))
    }

    /// Digits only, without validating them.
    pub fn normalize(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Weights run from len + 1 down to 2.
fn check_digit(digits: &[usize]) -> usize {
    let sum: usize = digits
        .iter()
        .zip((2..=digits.len() + 1).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.0
    }
}
