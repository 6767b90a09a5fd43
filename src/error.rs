//! Unified error types for the carambola library.
//!
//! This module provides a single error type covering both codec entry
//! points, presenting a consistent API to users.
use thiserror::Error;

/// Main error type for codec operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested encoding name is not recognized
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Code point lies beyond the Unicode range
    #[error("Invalid code point U+{0:X}: beyond the Unicode range")]
    InvalidCodePoint(u32),

    /// Strict encoding met a code point the target encoding cannot represent
    #[error("Code point U+{code_point:04X} is not representable in {encoding}")]
    Unencodable {
        encoding: &'static str,
        code_point: u32,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
