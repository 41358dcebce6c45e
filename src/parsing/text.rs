//! Free text strategies.
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::filtering::{Filter, ReviewFilter};
use crate::types::Fragment;

lazy_static! {
    /// A newline, optional whitespace (including other newlines), and a newline.
    static ref BLOCK_SEPARATOR: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Ways of cutting free text into fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStrategy {
    /// One fragment per line, numbered by line.
    Lines,
    /// One fragment per blank-line separated block, numbered by block.
    Blocks,
}

/// Strategies tried on free text, in order.
///
/// One-review-per-line files are favored: blocks are only attempted
/// when lines yield no review at all.
pub const TEXT_STRATEGIES: [TextStrategy; 2] = [TextStrategy::Lines, TextStrategy::Blocks];

impl TextStrategy {
    /// Cut `content` into trimmed, non-blank fragments.
    ///
    /// Numbering counts blank lines/blocks too, so that positions match the source file.
    pub fn candidates(&self, content: &str) -> Vec<Fragment> {
        let pieces: Vec<&str> = match self {
            TextStrategy::Lines => content.split('\n').collect(),
            TextStrategy::Blocks => BLOCK_SEPARATOR.split(content).collect(),
        };

        pieces
            .into_iter()
            .enumerate()
            .filter_map(|(idx, piece)| {
                let piece = piece.trim();
                if piece.is_empty() {
                    None
                } else {
                    Some(Fragment::new(piece, idx + 1))
                }
            })
            .collect()
    }
}

/// Result of [extract].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TextExtraction {
    /// Strategy that produced [TextExtraction::reviews], if any did.
    pub strategy: Option<TextStrategy>,
    pub reviews: Vec<Fragment>,
    /// Number of candidates the filter dropped, summed over every tried strategy.
    pub rejected: usize,
}

/// Run `strategies` in order, stopping at the first one that yields at least one accepted fragment.
pub fn extract(content: &str, strategies: &[TextStrategy], filter: &ReviewFilter) -> TextExtraction {
    let mut rejected = 0;

    for strategy in strategies {
        let (reviews, dropped): (Vec<Fragment>, Vec<Fragment>) = strategy
            .candidates(content)
            .into_iter()
            .partition(|fragment| filter.detect(fragment.text.as_str()));

        rejected += dropped.len();
        debug!(
            "{:?}: {} accepted, {} rejected",
            strategy,
            reviews.len(),
            dropped.len()
        );

        if !reviews.is_empty() {
            return TextExtraction {
                strategy: Some(*strategy),
                reviews,
                rejected,
            };
        }
    }

    TextExtraction {
        strategy: None,
        reviews: Vec::new(),
        rejected,
    }
}
