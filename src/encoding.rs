//! Text-to-bytes encoding primitives.
//!
//! This module implements the three encodings the consuming serializer
//! emits text with: ASCII, Latin-1, and UTF-8. The ASCII and Latin-1
//! strategies are lossy: code points outside the target repertoire are
//! silently dropped rather than rejected, which is the behavior the
//! serializer depends on. Strict variants that fail instead are
//! provided for callers that need validation.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Supported text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// 7-bit ASCII; one byte per code point below 128.
    Ascii,
    /// ISO-8859-1; one byte per code point below 256.
    Latin1,
    /// UTF-8; one to four bytes per code point.
    Utf8,
}

impl TextEncoding {
    /// Resolve an encoding name.
    ///
    /// Recognized names are exactly `"ascii"`, `"latin1"`, and
    /// `"utf-8"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] for any other name.
    ///
    /// # Examples
    ///
    /// ```
    /// use carambola::TextEncoding;
    ///
    /// assert_eq!(TextEncoding::from_name("utf-8").unwrap(), TextEncoding::Utf8);
    /// assert!(TextEncoding::from_name("utf8").is_err());
    /// ```
    #[inline]
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "ascii" => Ok(TextEncoding::Ascii),
            "latin1" => Ok(TextEncoding::Latin1),
            "utf-8" => Ok(TextEncoding::Utf8),
            other => Err(Error::UnsupportedEncoding(other.to_string())),
        }
    }

    /// Returns the canonical name of the encoding.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ascii",
            TextEncoding::Latin1 => "latin1",
            TextEncoding::Utf8 => "utf-8",
        }
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handling of code points outside a single-byte repertoire.
#[derive(Clone, Copy)]
enum Mode {
    Lossy,
    Strict,
}

/// Encode text using the named encoding.
///
/// Resolves `encoding` against the recognized names (`"ascii"`,
/// `"latin1"`, `"utf-8"`) and applies the matching strategy to `text`.
/// The ASCII and Latin-1 strategies are lossy: characters outside the
/// target repertoire are silently dropped, so the output can be
/// shorter than the input. Use [`encode_strict`] to reject them
/// instead.
///
/// # Arguments
///
/// * `text` - The text to encode
/// * `encoding` - Encoding name, one of `"ascii"`, `"latin1"`, `"utf-8"`
///
/// # Errors
///
/// Returns [`Error::UnsupportedEncoding`] when `encoding` is not a
/// recognized name; no bytes are produced in that case.
///
/// # Examples
///
/// ```
/// use carambola::encode;
///
/// assert_eq!(encode("héllo", "utf-8").unwrap(), "héllo".as_bytes());
///
/// // Lossy: 'é' is outside ASCII and gets dropped
/// assert_eq!(encode("héllo", "ascii").unwrap(), b"hllo");
///
/// assert!(encode("héllo", "koi8-r").is_err());
/// ```
#[inline]
pub fn encode(text: &str, encoding: &str) -> Result<Vec<u8>> {
    let encoding = TextEncoding::from_name(encoding)?;
    // Rust strings are UTF-8 already; nothing to recompute per character.
    if encoding == TextEncoding::Utf8 {
        return Ok(text.as_bytes().to_vec());
    }
    encode_iter(text.chars().map(u32::from), encoding, Mode::Lossy)
}

/// Encode text using the named encoding, rejecting out-of-range input.
///
/// Behaves like [`encode`] except that the ASCII and Latin-1
/// strategies fail on the first character outside their repertoire
/// instead of dropping it.
///
/// # Errors
///
/// Returns [`Error::UnsupportedEncoding`] for an unrecognized name and
/// [`Error::Unencodable`] for the first out-of-range character.
///
/// # Examples
///
/// ```
/// use carambola::encode_strict;
///
/// assert_eq!(encode_strict("hello", "ascii").unwrap(), b"hello");
/// assert!(encode_strict("héllo", "ascii").is_err());
/// ```
#[inline]
pub fn encode_strict(text: &str, encoding: &str) -> Result<Vec<u8>> {
    let encoding = TextEncoding::from_name(encoding)?;
    encode_iter(text.chars().map(u32::from), encoding, Mode::Strict)
}

/// Encode a sequence of Unicode code points.
///
/// This is the code-point-level counterpart of [`encode`] for callers
/// that hold raw code point values rather than a string. The ASCII and
/// Latin-1 strategies drop out-of-range values; the UTF-8 strategy
/// packs each value into one to four bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidCodePoint`] when the UTF-8 strategy meets a
/// value at or above 0x110000. The whole call fails and no partial
/// output is returned.
///
/// # Examples
///
/// ```
/// use carambola::{TextEncoding, encode_code_points};
///
/// let bytes = encode_code_points(&[0x41, 0x20AC], TextEncoding::Utf8).unwrap();
/// assert_eq!(bytes, [0x41, 0xE2, 0x82, 0xAC]);
/// ```
#[inline]
pub fn encode_code_points(code_points: &[u32], encoding: TextEncoding) -> Result<Vec<u8>> {
    encode_iter(code_points.iter().copied(), encoding, Mode::Lossy)
}

/// Encode a sequence of Unicode code points, rejecting out-of-range
/// input.
///
/// Behaves like [`encode_code_points`] except that the ASCII and
/// Latin-1 strategies fail with [`Error::Unencodable`] on the first
/// value outside their repertoire instead of dropping it.
#[inline]
pub fn encode_code_points_strict(code_points: &[u32], encoding: TextEncoding) -> Result<Vec<u8>> {
    encode_iter(code_points.iter().copied(), encoding, Mode::Strict)
}

fn encode_iter<I>(code_points: I, encoding: TextEncoding, mode: Mode) -> Result<Vec<u8>>
where
    I: Iterator<Item = u32>,
{
    let mut out = Vec::with_capacity(code_points.size_hint().0);
    match encoding {
        TextEncoding::Ascii => encode_single_byte(code_points, 0x80, encoding, mode, &mut out)?,
        TextEncoding::Latin1 => encode_single_byte(code_points, 0x100, encoding, mode, &mut out)?,
        TextEncoding::Utf8 => {
            for cp in code_points {
                push_utf8(&mut out, cp)?;
            }
        },
    }
    Ok(out)
}

/// Shared loop for the two single-byte strategies.
fn encode_single_byte<I>(
    code_points: I,
    limit: u32,
    encoding: TextEncoding,
    mode: Mode,
    out: &mut Vec<u8>,
) -> Result<()>
where
    I: Iterator<Item = u32>,
{
    for cp in code_points {
        if cp < limit {
            out.push(cp as u8);
        } else if let Mode::Strict = mode {
            return Err(Error::Unencodable {
                encoding: encoding.name(),
                code_point: cp,
            });
        }
    }
    Ok(())
}

/// Append the UTF-8 encoding of a single code point to `out`.
///
/// The leading byte carries the length marker and the most significant
/// payload bits; continuation bytes carry six payload bits each behind
/// a `10` prefix, least significant bits last.
#[inline]
fn push_utf8(out: &mut Vec<u8>, cp: u32) -> Result<()> {
    match cp {
        0x0000..=0x007F => out.push(cp as u8),
        0x0080..=0x07FF => {
            out.push(0xC0 | (cp >> 6) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        },
        0x0800..=0xFFFF => {
            out.push(0xE0 | (cp >> 12) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        },
        0x10000..=0x10FFFF => {
            out.push(0xF0 | (cp >> 18) as u8);
            out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        },
        _ => return Err(Error::InvalidCodePoint(cp)),
    }
    Ok(())
}
