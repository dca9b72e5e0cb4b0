//! Parse errors.
//!
//! Every failure is one of two categories:
//! - [`FormatError`]: the formula itself is malformed (bad symbol, bad
//!   nesting, stray characters, nothing to count).
//! - [`UnexpectedError`]: the formula was accepted but the symbol table could
//!   not back it up (a validated symbol without a weight).
//!
//! [`ParseError`] wraps both and prefixes the message with its category, which
//! is the text callers show to users.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(
        "ambiguous symbol `{token}` (two uppercase letters); the IUPAC spelling is `{suggestion}`"
    )]
    AmbiguousSymbol { token: String, suggestion: String },

    #[error("unrecognized symbol `{0}`; check that it is a valid chemical element")]
    UnrecognizedSymbol(String),

    #[error("group opener `{0}` has no matching closing bracket")]
    UnmatchedOpener(char),

    #[error("unbalanced groups: {unclosed} closing bracket(s) without a matching opener")]
    UnbalancedGroups { unclosed: usize },

    #[error("invalid token `{0}` in formula")]
    InvalidToken(String),

    #[error("subscript `{0}` must be a positive integer that fits in 32 bits")]
    InvalidSubscript(String),

    #[error("atom count overflow")]
    CountOverflow,

    #[error("empty or fully invalid formula")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnexpectedError {
    #[error("no atomic weight available for `{0}`")]
    MissingWeight(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Format Error: {0}")]
    Format(#[from] FormatError),

    #[error("Unexpected Error: {0}")]
    Unexpected(#[from] UnexpectedError),
}

impl ParseError {
    pub fn is_format(&self) -> bool {
        matches!(self, ParseError::Format(_))
    }

    /// The ambiguous token's IUPAC spelling, if that is what went wrong.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            ParseError::Format(FormatError::AmbiguousSymbol { suggestion, .. }) => {
                Some(suggestion)
            }
            _ => None,
        }
    }
}
