//! This module deals with providing a quick overview of a processed folder.
//!
//! It lists files, counts chunks and their rows, and samples the first chunks,
//! so that a run can be checked without opening the files by hand.

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::warn;
use serde::Serialize;

use crate::error::Error;
use crate::io::layout::{self, HOTELS_FILE};

/// Number of chunks that get a detailed entry.
const NB_SAMPLED_CHUNKS: usize = 5;
/// Sample length, in chars.
const SAMPLE_LENGTH: usize = 100;

#[derive(Debug, Serialize)]
pub struct FileEntry {
    name: String,
    size: u64,
}

/// Details of a single chunk. `error` is set when the chunk can't be read.
#[derive(Debug, Default, Serialize)]
pub struct ChunkEntry {
    number: usize,
    name: String,
    nb_rows: Option<usize>,
    columns: Vec<String>,
    sample: Option<String>,
    error: Option<String>,
}

impl ChunkEntry {
    fn read(number: usize, path: &Path) -> Result<Self, Error> {
        let mut reader = csv::Reader::from_path(path)?;
        let columns = reader.headers()?.iter().map(String::from).collect();

        let mut nb_rows = 0;
        let mut sample = None;
        for record in reader.records() {
            let record = record?;
            if sample.is_none() {
                sample = record
                    .get(2)
                    .map(|text| text.chars().take(SAMPLE_LENGTH).collect());
            }
            nb_rows += 1;
        }

        Ok(Self {
            number,
            name: file_name(path),
            nb_rows: Some(nb_rows),
            columns,
            sample,
            error: None,
        })
    }

    fn failed(number: usize, path: &Path, error: Error) -> Self {
        warn!("could not read chunk {:?}: {}", path, error);
        Self {
            number,
            name: file_name(path),
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    /// Get the number of rows of the chunk, if it could be read.
    pub fn nb_rows(&self) -> Option<usize> {
        self.nb_rows
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    dst: PathBuf,
    exists: bool,
    files: Vec<FileEntry>,
    nb_chunks: usize,
    /// Sum of rows of readable chunks.
    nb_reviews: usize,
    /// Detailed entries of the first chunks and of every unreadable one.
    chunks: Vec<ChunkEntry>,
    nb_hotels: Option<usize>,
}

impl Report {
    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn nb_chunks(&self) -> usize {
        self.nb_chunks
    }

    pub fn nb_reviews(&self) -> usize {
        self.nb_reviews
    }

    pub fn nb_hotels(&self) -> Option<usize> {
        self.nb_hotels
    }

    pub fn chunks(&self) -> &[ChunkEntry] {
        &self.chunks
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn count_hotels(path: &Path) -> Result<usize, Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut nb = 0;
    for record in reader.records() {
        record?;
        nb += 1;
    }
    Ok(nb)
}

/// Build a report on `dst`. A missing folder yields an empty report rather than an error.
pub fn check(dst: &Path) -> Result<Report, Error> {
    if !dst.is_dir() {
        warn!("{:?} does not exist or is not a folder", dst);
        return Ok(Report {
            dst: dst.to_path_buf(),
            exists: false,
            files: Vec::new(),
            nb_chunks: 0,
            nb_reviews: 0,
            chunks: Vec::new(),
            nb_hotels: None,
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dst)?.sorted_by_key(|e| e.as_ref().map(|e| e.file_name()).ok()) {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if metadata.is_file() {
            files.push(FileEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                size: metadata.len(),
            });
        }
    }

    let chunk_paths = layout::list_chunks(dst)?;
    let mut nb_reviews = 0;
    let mut chunks = Vec::new();
    for (idx, (number, path)) in chunk_paths.iter().enumerate() {
        match ChunkEntry::read(*number, path) {
            Ok(entry) => {
                nb_reviews += entry.nb_rows.unwrap_or(0);
                if idx < NB_SAMPLED_CHUNKS {
                    chunks.push(entry);
                }
            }
            Err(e) => chunks.push(ChunkEntry::failed(*number, path, e)),
        }
    }

    let hotels_path = dst.join(HOTELS_FILE);
    let nb_hotels = if hotels_path.is_file() {
        count_hotels(&hotels_path)
            .map_err(|e| warn!("could not read {:?}: {}", hotels_path, e))
            .ok()
    } else {
        None
    };

    Ok(Report {
        dst: dst.to_path_buf(),
        exists: true,
        files,
        nb_chunks: chunk_paths.len(),
        nb_reviews,
        chunks,
        nb_hotels,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_folder() {
        let report = check(Path::new("no/such/folder")).unwrap();
        assert!(!report.exists());
        assert_eq!(report.nb_chunks(), 0);
        assert_eq!(report.nb_hotels(), None);
    }

    #[test]
    fn processed_folder() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(HOTELS_FILE),
            "HOTELID,NAME,CITY,COUNTRY\n1,Grand File,London,UK\n2,Inn,Chicago,USA\n",
        )
        .unwrap();
        for n in 1..=7 {
            fs::write(
                dir.path().join(layout::chunk_file_name(n)),
                format!("IDREVIEW,HOTELID,REVIEW\n{},1,review {}\n", n, n),
            )
            .unwrap();
        }

        let report = check(dir.path()).unwrap();
        assert!(report.exists());
        assert_eq!(report.nb_chunks(), 7);
        assert_eq!(report.nb_reviews(), 7);
        assert_eq!(report.nb_hotels(), Some(2));
        assert_eq!(report.files.len(), 8);
        assert_eq!(report.files[0].name, HOTELS_FILE);

        let chunks = report.chunks();
        assert_eq!(chunks.len(), NB_SAMPLED_CHUNKS);
        assert_eq!(chunks[0].columns, vec!["IDREVIEW", "HOTELID", "REVIEW"]);
        assert_eq!(chunks[0].sample.as_deref(), Some("review 1"));
        assert_eq!(chunks[4].number, 5);
    }

    #[test]
    fn unreadable_chunk() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(layout::chunk_file_name(1)),
            "IDREVIEW,HOTELID,REVIEW\n1,1,ok\n",
        )
        .unwrap();
        // unequal row lengths
        fs::write(
            dir.path().join(layout::chunk_file_name(2)),
            "IDREVIEW,HOTELID,REVIEW\n2,1,ok,extra\n",
        )
        .unwrap();

        let report = check(dir.path()).unwrap();
        assert_eq!(report.nb_chunks(), 2);
        assert_eq!(report.nb_reviews(), 1);
        assert_eq!(report.chunks()[0].nb_rows(), Some(1));
        assert!(report.chunks()[1].error().is_some());
        assert_eq!(report.chunks()[1].nb_rows(), None);
    }

    #[test]
    fn serializes() {
        let dir = tempdir().unwrap();
        let report = check(dir.path()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["exists"], true);
        assert_eq!(json["nb_chunks"], 0);
    }
}
