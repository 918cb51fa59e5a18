//! Errors from reading token weights out of text.
//!
//! Game play itself cannot fail; only input handling can.

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid token weight '{input}': {source}")]
    InvalidToken {
        input: String,
        source: ParseFloatError,
    },

    #[error("Token weight must not be negative, got {0}")]
    NegativeToken(f64),

    #[error("Token weight must be finite, got '{0}'")]
    NonFiniteToken(String),
}

/// Parse one token weight: a finite, non-negative number.
pub fn parse_token(input: &str) -> Result<f64, GameError> {
    let trimmed = input.trim();
    let value: f64 = trimmed.parse().map_err(|source| GameError::InvalidToken {
        input: trimmed.to_owned(),
        source,
    })?;

    if !value.is_finite() {
        return Err(GameError::NonFiniteToken(trimmed.to_owned()));
    }
    if value < 0.0 {
        return Err(GameError::NegativeToken(value));
    }
    Ok(value)
}

/// Parse a list of token weights separated by whitespace and/or commas.
pub fn parse_tokens(input: &str) -> Result<Vec<f64>, GameError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_token)
        .collect()
}
