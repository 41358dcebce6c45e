use serde::{Deserialize, Serialize};

/// Candidate review text along with its 1-based position in the source file.
///
/// The position is a line number, a block index or a row number
/// depending on the strategy that produced the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub line_number: usize,
}

impl Fragment {
    pub fn new(text: impl Into<String>, line_number: usize) -> Self {
        Self {
            text: text.into(),
            line_number,
        }
    }
}

/// An accepted review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: u64,
    hotel_id: u64,
    text: String,
    file_source: String,
    line_number: usize,
}

impl Review {
    pub fn new(id: u64, hotel_id: u64, fragment: Fragment, file_source: String) -> Self {
        Self {
            id,
            hotel_id,
            text: fragment.text,
            file_source,
            line_number: fragment.line_number,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn hotel_id(&self) -> u64 {
        self.hotel_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_source(&self) -> &str {
        &self.file_source
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn row(&self) -> ReviewRow<'_> {
        ReviewRow {
            review_id: self.id,
            hotel_id: self.hotel_id,
            review: &self.text,
        }
    }
}

/// Serialized form of a [Review] in a chunk file.
#[derive(Debug, Serialize)]
pub struct ReviewRow<'a> {
    #[serde(rename = "IDREVIEW")]
    pub review_id: u64,
    #[serde(rename = "HOTELID")]
    pub hotel_id: u64,
    #[serde(rename = "REVIEW")]
    pub review: &'a str,
}

/// A review read back from a chunk file, as consumed by scorers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "IDREVIEW")]
    pub review_id: u64,
    #[serde(rename = "HOTELID")]
    pub hotel_id: u64,
    #[serde(rename = "REVIEW")]
    pub text: String,
}
