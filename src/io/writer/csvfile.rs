//! Atomic CSV files.
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::Error;

/// Write `headers` then `rows` into `dst/file_name`.
///
/// Rows are written in a temporary file of `dst` that is then renamed,
/// so that the destination file is either complete or absent/untouched.
/// Headers are always written, even when there's no row.
pub fn write_atomic<S, I>(
    dst: &Path,
    file_name: &str,
    headers: &[&str],
    rows: I,
) -> Result<PathBuf, Error>
where
    S: Serialize,
    I: IntoIterator<Item = S>,
{
    let tmp = NamedTempFile::new_in(dst)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(tmp);

    writer.write_record(headers)?;
    let mut nb_rows = 0;
    for row in rows {
        writer.serialize(row)?;
        nb_rows += 1;
    }
    writer.flush()?;

    let tmp = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;

    let path = dst.join(file_name);
    tmp.persist(&path)?;
    debug!("wrote {} rows to {:?}", nb_rows, path);

    Ok(path)
}
