//! Error types for JWT decoding
//!
//! This module defines the two error types that can surface from the decode
//! pipeline. Both implement `std::error::Error` and carry descriptive
//! messages; `InvalidTokenError` additionally names the 1-based token part
//! (1 = header, 2 = payload) that was implicated.

/// Errors from the base64url decoder
///
/// Raised by [`crate::utils::base64url`] when an input string is not valid
/// base64url. These are the only two failure modes of the decoder: an input
/// whose length cannot correspond to any encoded byte sequence, or a byte
/// outside the base64 alphabets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input length mod 4 equals 1, with or without padding stripped
    IncorrectLength,

    /// A byte outside the base64/base64url alphabets (or a non-trailing `=`)
    InvalidCharacter(char),
}

/// Errors from the token decode pipeline
///
/// Every variant that concerns a token segment carries the 1-based part
/// number so callers can tell whether the header or the payload was at
/// fault. Decode and parse failures wrap the underlying error.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidTokenError {
    /// The token has too few dot-separated segments
    MissingPart(usize),

    /// A segment was not valid base64url
    InvalidBase64 { part: usize, source: DecodeError },

    /// A decoded segment was not valid JSON
    InvalidJson { part: usize, message: String },

    /// A decoded segment was valid JSON but not an object at the top level
    NotAnObject { part: usize },

    /// Well-known fields were present with implausible types
    InvalidFields { part: usize, fields: Vec<String> },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::IncorrectLength => {
                write!(f, "base64 string is not of the correct length")
            }
            DecodeError::InvalidCharacter(c) => {
                write!(f, "invalid base64 character: {c:?}")
            }
        }
    }
}

impl std::fmt::Display for InvalidTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTokenError::MissingPart(part) => {
                write!(f, "Invalid token: missing part #{part}")
            }
            InvalidTokenError::InvalidBase64 { part, source } => {
                write!(f, "Invalid token: invalid base64 for part #{part} ({source})")
            }
            InvalidTokenError::InvalidJson { part, message } => {
                write!(f, "Invalid token: invalid json for part #{part} ({message})")
            }
            InvalidTokenError::NotAnObject { part } => {
                write!(f, "Invalid token: part #{part} is not a JSON object")
            }
            InvalidTokenError::InvalidFields { part, fields } => {
                write!(
                    f,
                    "Invalid token: fields {} in part #{part} have unexpected types",
                    fields.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
impl std::error::Error for InvalidTokenError {}

/// Result type alias for the token decode pipeline
pub type Result<T> = std::result::Result<T, InvalidTokenError>;
