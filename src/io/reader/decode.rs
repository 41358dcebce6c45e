/*! Byte decoding.

Source files have no declared encoding.
Tabular files are decoded by trying each [Encoding] of an ordered attempt list,
keeping the first one that decodes the whole file without error.
If none does, the file is decoded as UTF-8 with replacement characters, which never fails.

The attempt that succeeded is reported in [Decoded::outcome].
!*/
use std::borrow::Cow;

use log::debug;

/// Encodings that can be attempted on a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
    Windows1252,
    Iso88591,
}

/// Attempt order for tabular files.
pub const ENCODING_PREFERENCE: [Encoding; 4] = [
    Encoding::Utf8,
    Encoding::Latin1,
    Encoding::Windows1252,
    Encoding::Iso88591,
];

impl Encoding {
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
            Encoding::Windows1252 => "windows-1252",
            Encoding::Iso88591 => "iso-8859-1",
        }
    }

    /// Strict decoding. Returns [None] on the first malformed sequence.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
            // every byte maps to the codepoint of the same value
            Encoding::Latin1 | Encoding::Iso88591 => {
                Some(bytes.iter().map(|b| char::from(*b)).collect())
            }
            Encoding::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
        }
    }
}

/// How a [Decoded] text was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Strictly decoded with this encoding.
    Clean(Encoding),
    /// Every attempt failed: UTF-8 with replacement characters.
    Lossy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub outcome: DecodeOutcome,
}

/// Decode using [ENCODING_PREFERENCE].
pub fn decode(bytes: &[u8]) -> Decoded {
    decode_with(bytes, &ENCODING_PREFERENCE)
}

/// Decode trying `attempts` in order, falling back to lossy UTF-8.
pub fn decode_with(bytes: &[u8], attempts: &[Encoding]) -> Decoded {
    for encoding in attempts {
        match encoding.decode(bytes) {
            Some(text) => {
                return Decoded {
                    text,
                    outcome: DecodeOutcome::Clean(*encoding),
                }
            }
            None => debug!("could not decode as {}", encoding.label()),
        }
    }

    Decoded {
        text: String::from_utf8_lossy(bytes).into_owned(),
        outcome: DecodeOutcome::Lossy,
    }
}

/// Decode as UTF-8, silently dropping invalid sequences.
pub fn decode_ignoring_errors(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Turn `\r\n` and lone `\r` line endings into `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_first() {
        let d = decode("chambre très propre".as_bytes());
        assert_eq!(d.outcome, DecodeOutcome::Clean(Encoding::Utf8));
        assert_eq!(d.text, "chambre très propre");
    }

    #[test]
    fn latin1_fallback() {
        // "très" in latin-1
        let bytes = [b't', b'r', 0xe8, b's'];
        let d = decode(&bytes);
        assert_eq!(d.outcome, DecodeOutcome::Clean(Encoding::Latin1));
        assert_eq!(d.text, "très");
    }

    #[test]
    fn windows1252_attempt() {
        // 0x80 is the euro sign in windows-1252
        let bytes = [b'1', b'0', 0x80];
        let d = decode_with(&bytes, &[Encoding::Utf8, Encoding::Windows1252]);
        assert_eq!(d.outcome, DecodeOutcome::Clean(Encoding::Windows1252));
        assert_eq!(d.text, "10€");
    }

    #[test]
    fn lossy_terminal_fallback() {
        let bytes = [b'o', b'k', 0xff];
        let d = decode_with(&bytes, &[Encoding::Utf8]);
        assert_eq!(d.outcome, DecodeOutcome::Lossy);
        assert_eq!(d.text, "ok\u{FFFD}");
    }

    #[test]
    fn no_attempts() {
        let d = decode_with(b"plain", &[]);
        assert_eq!(d.outcome, DecodeOutcome::Lossy);
        assert_eq!(d.text, "plain");
    }

    #[test]
    fn ignoring_errors() {
        let bytes = [b'r', 0xff, b'o', b'o', 0xc3, b'm'];
        assert_eq!(decode_ignoring_errors(&bytes), "room");
    }

    #[test]
    fn newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_newlines("a\r\r\n"), "a\n\n");
        assert_eq!(normalize_newlines("no break"), "no break");
    }
}
