/*! Hotel table and review chunk writing.

Reviews are split in chunks of at most `chunk_size` reviews, by position only:
chunk `k` (1-based) holds reviews `[(k-1)*chunk_size, k*chunk_size)`.
A hotel's reviews may span several chunks, and a chunk may hold reviews from several hotels.

Chunks of a previous run are removed before writing, so that the destination only ever holds one run's chunks.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::io::layout::{self, HOTELS_FILE, HOTEL_HEADERS, REVIEW_HEADERS};
use crate::types::{Hotel, Review};

use super::csvfile::write_atomic;

pub struct ChunkWriter {
    dst: PathBuf,
    chunk_size: usize,
}

impl ChunkWriter {
    /// Create a new [ChunkWriter]. Nothing is written until a write is performed.
    ///
    /// `chunk_size` is expected to be at least 1 (see [crate::context::RunContext::new]).
    pub fn new(dst: &Path, chunk_size: usize) -> Self {
        Self {
            dst: dst.to_path_buf(),
            chunk_size,
        }
    }

    /// Number of chunks needed for `nb_reviews` reviews.
    pub fn nb_chunks(&self, nb_reviews: usize) -> usize {
        nb_reviews.div_ceil(self.chunk_size)
    }

    /// Write the hotel table.
    pub fn write_hotels(&self, hotels: &[Hotel]) -> Result<PathBuf, Error> {
        let path = write_atomic(
            &self.dst,
            HOTELS_FILE,
            &HOTEL_HEADERS,
            hotels.iter().map(Hotel::row),
        )?;
        info!("wrote {} hotels to {:?}", hotels.len(), path);
        Ok(path)
    }

    /// Remove chunk files of a previous run.
    fn clear_chunks(&self) -> Result<usize, Error> {
        let chunks = layout::list_chunks(&self.dst)?;
        for (_, path) in &chunks {
            debug!("removing stale chunk {:?}", path);
            std::fs::remove_file(path)?;
        }
        Ok(chunks.len())
    }

    /// Write `reviews` in chunks, returning chunk paths in chunk order.
    pub fn write_reviews(&self, reviews: &[Review]) -> Result<Vec<PathBuf>, Error> {
        let removed = self.clear_chunks()?;
        if removed > 0 {
            info!("removed {} chunks from a previous run", removed);
        }

        info!(
            "splitting {} reviews into {} chunks",
            reviews.len(),
            self.nb_chunks(reviews.len())
        );

        let mut paths = Vec::with_capacity(self.nb_chunks(reviews.len()));
        for (idx, chunk) in reviews.chunks(self.chunk_size).enumerate() {
            let number = idx + 1;
            let path = write_atomic(
                &self.dst,
                &layout::chunk_file_name(number),
                &REVIEW_HEADERS,
                chunk.iter().map(Review::row),
            )?;
            info!("chunk {}: {} reviews -> {:?}", number, chunk.len(), path);
            paths.push(path);
        }

        Ok(paths)
    }
}
