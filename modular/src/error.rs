//! This module defines some errors that
//! may occur during the execution of the library.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that may occur when it comes to [`Modular`](crate::Modular) values.
#[derive(Error, Debug)]
pub enum ModularError {
    /// Error that occurs when the divisor of a division or remainder is zero.
    #[error("Division by zero!")]
    DivisionByZero,
    /// Error that occurs when the text is not a signed decimal integer.
    #[error("Failed to parse a modular value: {0}")]
    Parse(#[from] ParseIntError),
    /// Error that occurs when the input ends before a value token was found.
    #[error("Unexpected end of input while reading a modular value")]
    UnexpectedEof,
    /// Error that occurs when the underlying stream fails.
    #[error("I/O error while reading or writing a modular value: {0}")]
    Io(#[from] std::io::Error),
}

impl ModularError {
    /// Returns `true` if this is [`ModularError::DivisionByZero`].
    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}
