//! Carambola - low-level text codec primitives for constrained runtimes
//!
//! This library provides the byte-level codec support a compact object
//! serializer needs on targets without a full codec library: encoding
//! text to ASCII, Latin-1, or UTF-8 bytes, and reversing the backslash
//! escapes raw bytes pick up when they are rendered as text literals.
//!
//! # Features
//!
//! - **Encoding dispatcher**: resolve an encoding by name (`"ascii"`,
//!   `"latin1"`, `"utf-8"`) and apply it in one call
//! - **Lossy and strict modes**: the single-byte encodings drop
//!   out-of-range characters by default, with strict variants that
//!   reject them instead
//! - **Hand-packed UTF-8**: one to four bytes per code point, with
//!   values beyond the Unicode range rejected
//! - **Escape decoding**: single-pass reversal of two-byte backslash
//!   escapes, with unrecognized escapes passed through untouched
//! - **Pure functions**: no shared state and no I/O; safe to call
//!   concurrently without coordination
//!
//! # Example - Encoding text
//!
//! ```
//! use carambola::encode;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = encode("héllo", "utf-8")?;
//! assert_eq!(bytes, [0x68, 0xC3, 0xA9, 0x6C, 0x6C, 0x6F]);
//!
//! // ASCII is lossy: out-of-range characters are dropped
//! let bytes = encode("héllo", "ascii")?;
//! assert_eq!(bytes, b"hllo");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Decoding escape sequences
//!
//! ```
//! use carambola::escape_decode;
//!
//! let (bytes, len) = escape_decode(b"line one\\nline two");
//! assert_eq!(bytes, b"line one\nline two");
//! assert_eq!(len, 17);
//! ```

/// Text-to-bytes encoding primitives
///
/// This module provides the encoding selector and the three encoder
/// strategies (ASCII, Latin-1, UTF-8), in lossy and strict flavors.
pub mod encoding;

/// Unified error handling
///
/// This module provides the error and result types shared by all codec
/// entry points.
pub mod error;

/// Escape-sequence decoding
///
/// This module provides the escape table and the single-pass decoder
/// that turns escaped text literals back into raw bytes.
pub mod escape;

// Re-export commonly used types for convenience
pub use encoding::{
    TextEncoding, encode, encode_code_points, encode_code_points_strict, encode_strict,
};
pub use error::{Error, Result};
pub use escape::escape_decode;
