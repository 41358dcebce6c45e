//! Review extraction pipeline
//!
//! Turns a city-partitioned source tree into a hotel table and review chunks.
//!
//! # Processing
//! 1. Hotels are discovered (one per source file). No hotel at all aborts the run.
//! 1. Each hotel file is sniffed (see [FileKind]), then parsed with the matching strategy:
//!    tabular files get their review column inferred, other files are cut in lines, or in blocks if lines yield nothing.
//! 1. Candidates go through the [ReviewFilter]. Accepted ones get a global, strictly increasing identifier.
//! 1. The hotel table and review chunks are written in the destination folder.
//!
//! A file that can't be read or parsed yields no review, and does not stop the run.
use std::fs;

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::context::RunContext;
use crate::error::Error;
use crate::filtering::ReviewFilter;
use crate::io::reader::{decode_ignoring_errors, normalize_newlines, FileKind};
use crate::io::ChunkWriter;
use crate::parsing::{tabular, text, TEXT_STRATEGIES};
use crate::sources::Discovery;
use crate::types::{Fragment, Hotel, Review};

use super::Pipeline;

pub struct Extraction {
    ctx: RunContext,
    filter: ReviewFilter,
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub nb_hotels: usize,
    pub nb_reviews: usize,
    pub nb_chunks: usize,
    /// Hotels whose file could not be processed.
    pub failed_hotels: Vec<u64>,
}

/// Hotels and their accepted reviews, in discovery then extraction order.
#[derive(Debug, Default)]
pub struct Extracted {
    pub hotels: Vec<Hotel>,
    pub reviews: Vec<Review>,
    pub failed_hotels: Vec<u64>,
}

impl Extraction {
    pub fn new(ctx: RunContext) -> Self {
        Self {
            ctx,
            filter: ReviewFilter::default(),
        }
    }

    /// Accepted fragments of a hotel file, in strategy order.
    fn hotel_fragments(hotel: &Hotel, filter: &ReviewFilter) -> Result<Vec<Fragment>, Error> {
        let path = hotel.source_path();
        let kind = FileKind::detect(path);
        debug!("{:?}: detected {:?}", path, kind);

        let bytes = fs::read(path)?;
        let fragments = match kind {
            FileKind::Tabular => {
                let result = tabular::extract(&bytes, filter)?;
                debug!(
                    "{:?}: column {:?}, {:?}, {} rejected",
                    path, result.column, result.outcome, result.rejected
                );
                result.reviews
            }
            // no dedicated parser for structured files
            FileKind::Structured | FileKind::Text => {
                let content = normalize_newlines(&decode_ignoring_errors(&bytes));
                let result = text::extract(&content, &TEXT_STRATEGIES, filter);
                debug!(
                    "{:?}: strategy {:?}, {} rejected",
                    path, result.strategy, result.rejected
                );
                result.reviews
            }
        };

        Ok(fragments)
    }

    /// Extract reviews of every hotel, numbering them from 1 across hotels.
    ///
    /// Fails only if no hotel is found.
    pub fn extract(&self) -> Result<Extracted, Error> {
        let hotels = Discovery::new(self.ctx.src()).hotels()?;
        if hotels.is_empty() {
            return Err(Error::Config(format!(
                "no hotels found in {:?}. Expected layout is <src>/<city>/<hotel file>",
                self.ctx.src()
            )));
        }

        let mut reviews = Vec::new();
        let mut failed_hotels = Vec::new();
        let nb_hotels = hotels.len();

        for (idx, hotel) in hotels.iter().enumerate() {
            info!(
                "processing hotel {}/{}: {} ({})",
                idx + 1,
                nb_hotels,
                hotel.name(),
                hotel.file_name()
            );

            let fragments = match Self::hotel_fragments(hotel, &self.filter) {
                Ok(fragments) => fragments,
                Err(e) => {
                    error!("error processing file {:?}: {}", hotel.source_path(), e);
                    failed_hotels.push(hotel.id());
                    continue;
                }
            };

            info!("found {} reviews", fragments.len());
            let file_source = hotel.file_name();
            for fragment in fragments {
                let id = reviews.len() as u64 + 1;
                reviews.push(Review::new(id, hotel.id(), fragment, file_source.clone()));
            }
        }

        Ok(Extracted {
            hotels,
            reviews,
            failed_hotels,
        })
    }
}

impl Pipeline<RunSummary> for Extraction {
    fn run(&self) -> Result<RunSummary, Error> {
        let extracted = self.extract()?;

        fs::create_dir_all(self.ctx.dst())?;
        let writer = ChunkWriter::new(self.ctx.dst(), self.ctx.chunk_size());

        writer.write_hotels(&extracted.hotels)?;

        if extracted.reviews.is_empty() {
            warn!("no reviews found in any hotel file");
        }
        let chunks = writer.write_reviews(&extracted.reviews)?;

        if !extracted.failed_hotels.is_empty() {
            warn!(
                "{} hotel files could not be processed: {:?}",
                extracted.failed_hotels.len(),
                extracted.failed_hotels
            );
        }
        info!("total reviews processed: {}", extracted.reviews.len());

        Ok(RunSummary {
            nb_hotels: extracted.hotels.len(),
            nb_reviews: extracted.reviews.len(),
            nb_chunks: chunks.len(),
            failed_hotels: extracted.failed_hotels,
        })
    }
}
