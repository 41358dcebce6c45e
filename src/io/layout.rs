//! Output folder layout.
//!
//! ```text
//! dst/
//! ├── hotels.csv
//! ├── reviews_chunk_1.csv
//! ├── reviews_chunk_2.csv
//! ├── ...
//! └── final_ratings_simple.csv
//! ```
use std::path::{Path, PathBuf};

use crate::error::Error;

pub const HOTELS_FILE: &str = "hotels.csv";
pub const RATINGS_FILE: &str = "final_ratings_simple.csv";
pub const CHUNK_GLOB: &str = "reviews_chunk_*.csv";

const CHUNK_PREFIX: &str = "reviews_chunk_";
const CHUNK_SUFFIX: &str = ".csv";

pub const HOTEL_HEADERS: [&str; 4] = ["HOTELID", "NAME", "CITY", "COUNTRY"];
pub const REVIEW_HEADERS: [&str; 3] = ["IDREVIEW", "HOTELID", "REVIEW"];

/// File name of chunk number `number` (1-based).
pub fn chunk_file_name(number: usize) -> String {
    format!("{}{}{}", CHUNK_PREFIX, number, CHUNK_SUFFIX)
}

/// Chunk number from a chunk file name, if it is one.
pub fn chunk_number(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix(CHUNK_PREFIX)
        .and_then(|rest| rest.strip_suffix(CHUNK_SUFFIX))
        .and_then(|number| number.parse().ok())
}

/// List chunk files of `dst`, ordered by chunk number (not by name: chunk 10 comes after chunk 9).
pub fn list_chunks(dst: &Path) -> Result<Vec<(usize, PathBuf)>, Error> {
    let pattern = dst.join(CHUNK_GLOB);
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("non UTF-8 path: {:?}", dst)))?;

    let mut chunks = Vec::new();
    for path in glob::glob(pattern)? {
        let path = path?;
        let number = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(chunk_number);
        if let Some(number) = number {
            chunks.push((number, path));
        }
    }

    chunks.sort_by_key(|(number, _)| *number);
    Ok(chunks)
}
