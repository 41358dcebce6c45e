/*! Bulk-load stream

Rewrites review chunks as a tab-separated stream suited to a PostgreSQL `COPY ... FROM STDIN` (text format).

Chunks are read as raw lines rather than through a CSV parser:
a record starts on a line that looks like `<digits>,<digits>,<rest>`, and any other line continues the current record.
The review text is kept as is, quotes included.

Each record is written as `id\thotel_id\ttext\n`, with `text` escaped by [escape_copy_text].
!*/
use std::fs;
use std::io::Write;
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::error::Error;
use crate::io::layout;
use crate::io::reader::{decode_ignoring_errors, normalize_newlines};

lazy_static! {
    static ref RECORD_START: Regex = Regex::new(r"^(\d+),(\d+),(.*)$").unwrap();
}

/// Escape a value for the COPY text format.
///
/// Backslash, tab, newline and carriage return are backslash-escaped, NUL is dropped,
/// and other control characters are written as octal escapes (`\001`).
pub fn escape_copy_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\0' => (),
            c if (c as u32) < 32 => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// A record being reassembled from chunk lines.
#[derive(Debug, PartialEq, Eq)]
struct PendingRecord {
    id: String,
    hotel_id: String,
    lines: Vec<String>,
}

impl PendingRecord {
    fn write_to<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        let text = self.lines.join("\n");
        writeln!(
            out,
            "{}\t{}\t{}",
            self.id,
            self.hotel_id,
            escape_copy_text(&text)
        )?;
        Ok(())
    }
}

/// Reassemble records of a chunk's content (header line included).
fn records(content: &str) -> Vec<PendingRecord> {
    let content = normalize_newlines(content);

    let mut records = Vec::new();
    let mut current: Option<PendingRecord> = None;

    for line in content.lines().skip(1) {
        if let Some(caps) = RECORD_START.captures(line) {
            if let Some(done) = current.take() {
                records.push(done);
            }
            current = Some(PendingRecord {
                id: caps[1].to_string(),
                hotel_id: caps[2].to_string(),
                lines: vec![caps[3].to_string()],
            });
        } else if let Some(record) = current.as_mut() {
            record.lines.push(line.to_string());
        }
    }

    if let Some(done) = current {
        records.push(done);
    }
    records
}

/// Stream every chunk of `dst`, in chunk order, to `out`. Returns the number of records written.
pub fn emit<W: Write>(dst: &Path, out: &mut W) -> Result<usize, Error> {
    let chunks = layout::list_chunks(dst)?;
    if chunks.is_empty() {
        return Err(Error::Config(format!("no review chunks found in {:?}", dst)));
    }

    let mut nb_records = 0;
    for (number, path) in chunks {
        let bytes = fs::read(&path)?;
        let content = decode_ignoring_errors(&bytes);
        let chunk_records = records(&content);
        for record in &chunk_records {
            record.write_to(out)?;
        }
        debug!("chunk {}: {} records", number, chunk_records.len());
        nb_records += chunk_records.len();
    }
    out.flush()?;

    info!("emitted {} records", nb_records);
    Ok(nb_records)
}
