/*!
This module contains error types specific to chaincmp.

Building and evaluating comparators is infallible. The only fallible surface is turning
configuration text into typed values like [`Direction`](crate::Direction).
*/

use std::fmt;

/// Alias for a [`Result`] that wraps a [`ParseError`].
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors encountered while parsing configuration text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Variant for text that does not name a sort direction. Holds the rejected input.
    UnknownDirection(String),
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownDirection(input) => write!(
                f,
                "Unknown sort direction {:?}. Expected one of: asc, ascending, desc, descending.",
                input
            ),
        }
    }
}
