//! Run configuration.
//!
//! Everything a run needs to know about its environment lives in [RunContext],
//! which is built once from the command line and handed to each component.
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Number of reviews per chunk when none is provided.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    src: PathBuf,
    dst: PathBuf,
    chunk_size: usize,
}

impl RunContext {
    /// Create a new context.
    ///
    /// Fails with [Error::Config] if `chunk_size` is 0.
    pub fn new(src: PathBuf, dst: PathBuf, chunk_size: usize) -> Result<Self, Error> {
        if chunk_size == 0 {
            return Err(Error::Config(
                "chunk size must be at least 1 review".to_string(),
            ));
        }

        Ok(Self {
            src,
            dst,
            chunk_size,
        })
    }

    /// Source tree root (one folder per city).
    pub fn src(&self) -> &Path {
        &self.src
    }

    /// Destination folder of the hotel table and review chunks.
    pub fn dst(&self) -> &Path {
        &self.dst
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}
