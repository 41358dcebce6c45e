/*! Source file kind detection.

Detection is a heuristic: it looks at the file name first, then at the first line of content.
It never fails, and defaults to [FileKind::Text] when the file can't be read.

[FileKind::Structured] (JSON-looking files) has no dedicated parser and is handled as text.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use super::decode::decode_ignoring_errors;

/// Name tokens that mark a tabular file.
const TABULAR_NAME_TOKENS: [&str; 1] = ["csv"];

/// Name tokens that mark a structured file.
const STRUCTURED_NAME_TOKENS: [&str; 1] = ["json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Comma separated values, with a header row.
    Tabular,
    /// JSON-looking content. Routed to text handling.
    Structured,
    /// Free text.
    Text,
}

impl FileKind {
    /// Detect kind of file at `path`.
    pub fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if let Some(kind) = Self::from_name(&name) {
            debug!("{:?}: {:?} from file name", path, kind);
            return kind;
        }

        match Self::first_line(path) {
            Ok(line) => Self::from_first_line(&line),
            Err(e) => {
                debug!("{:?}: could not read first line ({}), assuming text", path, e);
                FileKind::Text
            }
        }
    }

    /// Kind hinted by a lowercase file name, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        if TABULAR_NAME_TOKENS.iter().any(|token| name.contains(token)) {
            Some(FileKind::Tabular)
        } else if STRUCTURED_NAME_TOKENS
            .iter()
            .any(|token| name.contains(token))
        {
            Some(FileKind::Structured)
        } else {
            None
        }
    }

    /// Kind hinted by the first line of a file.
    pub fn from_first_line(line: &str) -> Self {
        let line = line.trim();
        if line.contains(',') && line.split(',').count() > 2 {
            FileKind::Tabular
        } else if line.starts_with('{') || line.starts_with('[') {
            FileKind::Structured
        } else {
            FileKind::Text
        }
    }

    /// Read the first line, ignoring invalid UTF-8 sequences.
    ///
    /// `\r` ends a line too.
    fn first_line(path: &Path) -> std::io::Result<String> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut line = Vec::new();
        reader.read_until(b'\n', &mut line)?;
        let line = decode_ignoring_errors(&line);
        Ok(line
            .split(['\r', '\n'])
            .next()
            .unwrap_or_default()
            .to_string())
    }
}
