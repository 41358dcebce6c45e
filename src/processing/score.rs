/*! Review scoring

Scores reviews of a processed folder on five categories (service, price, room, location, overall),
each in `[1, 5]`, and writes them in [RATINGS_FILE].

[KeywordScorer] is a simple keyword-based [Scorer]: a base sentiment is computed from positive/negative words,
then each category is nudged by its own vocabulary.
!*/
use std::path::Path;

use log::{error, info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::io::layout::{self, RATINGS_FILE};
use crate::io::writer::csvfile::write_atomic;
use crate::types::ReviewRecord;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;
const NEUTRAL_SCORE: u8 = 3;

pub const RATING_HEADERS: [&str; 7] = [
    "REVIEWID", "HOTELID", "SERVICE", "PRICE", "ROOM", "LOCATION", "OVERALL",
];

const POSITIVE_WORDS: [&str; 14] = [
    "excellent",
    "amazing",
    "great",
    "good",
    "wonderful",
    "fantastic",
    "clean",
    "friendly",
    "helpful",
    "comfortable",
    "beautiful",
    "perfect",
    "love",
    "best",
];

const NEGATIVE_WORDS: [&str; 14] = [
    "terrible",
    "awful",
    "horrible",
    "bad",
    "poor",
    "dirty",
    "unclean",
    "rude",
    "unfriendly",
    "uncomfortable",
    "broken",
    "worst",
    "hate",
    "disappointing",
];

/// Positive and negative vocabulary of a category.
struct Vocabulary {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

const SERVICE: Vocabulary = Vocabulary {
    positive: &[
        "helpful",
        "friendly",
        "professional",
        "attentive",
        "efficient",
        "courteous",
        "responsive",
        "excellent service",
    ],
    negative: &[
        "rude",
        "slow",
        "unprofessional",
        "ignored",
        "poor service",
        "inattentive",
        "unhelpful",
        "bad service",
    ],
};

const PRICE: Vocabulary = Vocabulary {
    positive: &[
        "affordable",
        "reasonable",
        "worth",
        "value",
        "cheap",
        "budget",
        "inexpensive",
        "good value",
    ],
    negative: &[
        "expensive",
        "overpriced",
        "costly",
        "pricey",
        "waste",
        "rip-off",
        "overcharged",
        "not worth",
    ],
};

/// Rooms are judged on cleanliness.
const ROOM: Vocabulary = Vocabulary {
    positive: &[
        "clean",
        "spotless",
        "hygienic",
        "tidy",
        "immaculate",
        "fresh",
        "sanitized",
        "well-maintained",
    ],
    negative: &[
        "dirty", "filthy", "stained", "dusty", "messy", "unclean", "smelly", "moldy", "stain",
    ],
};

const LOCATION: Vocabulary = Vocabulary {
    positive: &[
        "convenient",
        "central",
        "accessible",
        "close",
        "near",
        "walkable",
        "great location",
        "perfect location",
    ],
    negative: &[
        "remote",
        "far",
        "inconvenient",
        "noisy",
        "dangerous",
        "isolated",
        "bad location",
        "far from",
    ],
};

/// Number of `words` that appear in `text` (expected lowercase).
fn matches(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| text.contains(*word)).count()
}

/// Per-category scores of a review, each in `[MIN_SCORE, MAX_SCORE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub service: u8,
    pub price: u8,
    pub room: u8,
    pub location: u8,
    pub overall: u8,
}

/// Anything that can rate a review.
pub trait Scorer {
    fn score(&self, review: &ReviewRecord) -> Scores;
}

#[derive(Debug, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    /// Base sentiment of a lowercase text.
    pub fn sentiment(&self, text: &str) -> u8 {
        let positive = matches(text, &POSITIVE_WORDS);
        let negative = matches(text, &NEGATIVE_WORDS);

        if positive > negative {
            (NEUTRAL_SCORE as usize + positive - negative).min(MAX_SCORE as usize) as u8
        } else if negative > positive {
            (NEUTRAL_SCORE as usize)
                .saturating_sub(negative - positive)
                .max(MIN_SCORE as usize) as u8
        } else {
            NEUTRAL_SCORE
        }
    }

    /// Nudge `base` using a category vocabulary.
    fn adjust(text: &str, base: u8, vocabulary: &Vocabulary) -> u8 {
        let positive = matches(text, vocabulary.positive);
        let negative = matches(text, vocabulary.negative);

        let delta: i64 = if positive > 0 && negative == 0 {
            positive.min(2) as i64
        } else if negative > 0 && positive == 0 {
            -(negative.min(2) as i64)
        } else if positive > negative {
            1
        } else if negative > positive {
            -1
        } else {
            0
        };

        (i64::from(base) + delta).clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u8
    }
}

impl Scorer for KeywordScorer {
    fn score(&self, review: &ReviewRecord) -> Scores {
        let text = review.text.to_lowercase();
        let base = self.sentiment(&text);

        Scores {
            service: Self::adjust(&text, base, &SERVICE),
            price: Self::adjust(&text, base, &PRICE),
            room: Self::adjust(&text, base, &ROOM),
            location: Self::adjust(&text, base, &LOCATION),
            overall: base,
        }
    }
}

#[derive(Debug, Serialize)]
struct RatingRow {
    #[serde(rename = "REVIEWID")]
    review_id: u64,
    #[serde(rename = "HOTELID")]
    hotel_id: u64,
    #[serde(rename = "SERVICE")]
    service: u8,
    #[serde(rename = "PRICE")]
    price: u8,
    #[serde(rename = "ROOM")]
    room: u8,
    #[serde(rename = "LOCATION")]
    location: u8,
    #[serde(rename = "OVERALL")]
    overall: u8,
}

impl RatingRow {
    fn new(review: &ReviewRecord, scores: Scores) -> Self {
        Self {
            review_id: review.review_id,
            hotel_id: review.hotel_id,
            service: scores.service,
            price: scores.price,
            room: scores.room,
            location: scores.location,
            overall: scores.overall,
        }
    }
}

/// Result of [score_chunks].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub nb_chunks: usize,
    pub nb_reviews: usize,
    /// Rows that could not be read.
    pub nb_errors: usize,
    pub mean_overall: Option<f64>,
}

/// Score every chunk of `dst`, in chunk order, and write the ratings table.
///
/// Unreadable rows and chunks are logged and skipped.
pub fn score_chunks<S: Scorer>(dst: &Path, scorer: &S) -> Result<ScoreSummary, Error> {
    let chunks = layout::list_chunks(dst)?;
    if chunks.is_empty() {
        return Err(Error::Config(format!("no review chunks found in {:?}", dst)));
    }
    info!("found {} chunk files", chunks.len());

    let mut rows = Vec::new();
    let mut nb_errors = 0;

    for (number, path) in &chunks {
        let mut reader = match csv::Reader::from_path(path) {
            Ok(r) => r,
            Err(e) => {
                error!("could not open chunk {}: {}", number, e);
                nb_errors += 1;
                continue;
            }
        };

        let before = rows.len();
        for (idx, record) in reader.deserialize::<ReviewRecord>().enumerate() {
            match record {
                Ok(review) => rows.push(RatingRow::new(&review, scorer.score(&review))),
                Err(e) => {
                    warn!("chunk {}, row {}: {}", number, idx + 1, e);
                    nb_errors += 1;
                }
            }
        }
        info!("chunk {}: scored {} reviews", number, rows.len() - before);
    }

    let nb_reviews = rows.len();
    let mean_overall = if nb_reviews > 0 {
        Some(rows.iter().map(|r| f64::from(r.overall)).sum::<f64>() / nb_reviews as f64)
    } else {
        None
    };

    let path = write_atomic(dst, RATINGS_FILE, &RATING_HEADERS, rows)?;
    info!("wrote {} ratings to {:?}", nb_reviews, path);

    Ok(ScoreSummary {
        nb_chunks: chunks.len(),
        nb_reviews,
        nb_errors,
        mean_overall,
    })
}
