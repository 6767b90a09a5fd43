//! Backslash escape-sequence decoding for byte strings.
//!
//! When raw bytes are rendered as text literals, non-printable and
//! reserved bytes come out as two-byte backslash escapes (`\n`, `\t`,
//! `\0`, ...). This module reverses that fixed set of escapes back
//! into the raw single-byte values. Anything that does not form a
//! recognized escape passes through untouched, so decoding never
//! fails.

use memchr::memchr;
use phf::phf_map;

/// Compile-time table mapping escape designators to the bytes they
/// stand for.
///
/// The designator is the byte following the backslash; every entry
/// maps a two-byte source pattern to a single output byte.
static ESCAPE_MAP: phf::Map<u8, u8> = phf_map! {
    b'n' => 0x0A,
    b't' => 0x09,
    b'r' => 0x0D,
    b'\\' => 0x5C,
    b'\'' => 0x27,
    b'"' => 0x22,
    b'b' => 0x08,
    b'f' => 0x0C,
    b'v' => 0x0B,
    b'a' => 0x07,
    b'0' => 0x00,
};

/// Decode backslash escape sequences in a byte string.
///
/// Scans `input` left to right in a single pass. A backslash followed
/// by a recognized designator byte is replaced by the single byte it
/// stands for; a backslash followed by anything else (or by nothing,
/// at the end of input) is kept as a literal backslash and only the
/// backslash is consumed, so the following byte is examined on its
/// own. All other bytes are copied verbatim. Runs without a backslash
/// are located with `memchr` and copied in bulk.
///
/// Returns the decoded bytes together with the number of bytes
/// produced, the pair the consuming serializer expects. Decoding is
/// one-directional and not idempotent: the output may itself contain
/// backslash bytes that another pass would rewrite again.
///
/// # Examples
///
/// ```
/// use carambola::escape_decode;
///
/// let (bytes, len) = escape_decode(b"a\\nb");
/// assert_eq!(bytes, b"a\nb");
/// assert_eq!(len, 3);
///
/// // Unrecognized escapes pass through literally
/// let (bytes, len) = escape_decode(b"\\q");
/// assert_eq!(bytes, b"\\q");
/// assert_eq!(len, 2);
/// ```
pub fn escape_decode(input: &[u8]) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        match memchr(b'\\', &input[pos..]) {
            None => {
                out.extend_from_slice(&input[pos..]);
                break;
            },
            Some(offset) => {
                out.extend_from_slice(&input[pos..pos + offset]);
                pos += offset;
                match input.get(pos + 1).and_then(|d| ESCAPE_MAP.get(d)) {
                    Some(&value) => {
                        out.push(value);
                        pos += 2;
                    },
                    None => {
                        out.push(b'\\');
                        pos += 1;
                    },
                }
            },
        }
    }

    let len = out.len();
    (out, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_escape() {
        let (bytes, len) = escape_decode(b"a\\nb");
        assert_eq!(bytes, b"a\nb");
        assert_eq!(len, 3);
    }

    #[test]
    fn test_unrecognized_escape_passes_through() {
        let (bytes, len) = escape_decode(b"\\q");
        assert_eq!(bytes, b"\\q");
        assert_eq!(len, 2);
    }

    #[test]
    fn test_empty_input() {
        let (bytes, len) = escape_decode(b"");
        assert!(bytes.is_empty());
        assert_eq!(len, 0);
    }

    #[test]
    fn test_no_escapes_is_verbatim() {
        let input = b"plain text, no introducer";
        let (bytes, len) = escape_decode(input);
        assert_eq!(bytes, input);
        assert_eq!(len, input.len());
    }

    #[test]
    fn test_every_table_entry() {
        let cases: [(&[u8], u8); 11] = [
            (b"\\n", 0x0A),
            (b"\\t", 0x09),
            (b"\\r", 0x0D),
            (b"\\\\", 0x5C),
            (b"\\'", 0x27),
            (b"\\\"", 0x22),
            (b"\\b", 0x08),
            (b"\\f", 0x0C),
            (b"\\v", 0x0B),
            (b"\\a", 0x07),
            (b"\\0", 0x00),
        ];
        for (input, expected) in cases {
            let (bytes, len) = escape_decode(input);
            assert_eq!(bytes, [expected], "input {:?}", input);
            assert_eq!(len, 1);
        }
    }

    #[test]
    fn test_trailing_backslash() {
        let (bytes, len) = escape_decode(b"end\\");
        assert_eq!(bytes, b"end\\");
        assert_eq!(len, 4);
    }

    #[test]
    fn test_escaped_backslash_consumes_both() {
        // A doubled backslash collapses before the 'n' is reached, so
        // no newline appears.
        let (bytes, len) = escape_decode(b"\\\\n");
        assert_eq!(bytes, b"\\n");
        assert_eq!(len, 2);
    }

    #[test]
    fn test_consecutive_escapes() {
        let (bytes, len) = escape_decode(b"\\t\\t\\0");
        assert_eq!(bytes, b"\t\t\x00");
        assert_eq!(len, 3);
    }

    #[test]
    fn test_unrecognized_escape_reprocesses_next_byte() {
        // Only the backslash is consumed on a miss; the byte after it
        // can still open an escape of its own.
        let (bytes, _) = escape_decode(b"\\x\\n");
        assert_eq!(bytes, b"\\x\n");
    }

    #[test]
    fn test_not_idempotent() {
        let input = b"\\\\n";
        let (once, _) = escape_decode(input);
        let (twice, _) = escape_decode(&once);
        assert_eq!(once, b"\\n");
        assert_eq!(twice, b"\n");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_binary_payload_untouched() {
        let input: Vec<u8> = (0u8..=255).filter(|&b| b != b'\\').collect();
        let (bytes, len) = escape_decode(&input);
        assert_eq!(bytes, input);
        assert_eq!(len, input.len());
    }
}
