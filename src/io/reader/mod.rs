/*! Source reading utilities

- [decode] turns raw bytes into text, trying several encodings.
- [filetype] guesses how a source file should be parsed.
!*/
pub mod decode;
pub mod filetype;

pub use decode::{
    decode, decode_ignoring_errors, normalize_newlines, DecodeOutcome, Decoded, Encoding,
};
pub use filetype::FileKind;
