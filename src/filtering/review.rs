//! Review-level filtering.
use super::Filter;

/// Words that make a short fragment look like a hotel review.
pub const REVIEW_KEYWORDS: [&str; 9] = [
    "hotel", "room", "stay", "service", "clean", "dirty", "staff", "price", "location",
];

/// Prefixes of commented-out lines.
const COMMENT_MARKERS: [&str; 2] = ["#", "//"];

/// Heuristic review detection.
///
/// Lengths are counted in Unicode codepoints, on the trimmed fragment.
/// A fragment is rejected if it is shorter than [ReviewFilter::min_length],
/// if it is entirely uppercase and longer than [ReviewFilter::shouting_length],
/// or if it starts with a comment marker.
/// It is then kept if it contains one of [REVIEW_KEYWORDS] (case-insensitive),
/// or if it is at least [ReviewFilter::keyword_free_length] long.
///
/// False positives and negatives are expected.
pub struct ReviewFilter {
    min_length: usize,
    shouting_length: usize,
    keyword_free_length: usize,
}

impl ReviewFilter {
    pub fn new(min_length: usize, shouting_length: usize, keyword_free_length: usize) -> Self {
        Self {
            min_length,
            shouting_length,
            keyword_free_length,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn shouting_length(&self) -> usize {
        self.shouting_length
    }

    pub fn keyword_free_length(&self) -> usize {
        self.keyword_free_length
    }

    /// `true` if there's no lowercase-able content in the fragment.
    fn is_shouting(text: &str) -> bool {
        text.to_uppercase() == text
    }

    fn has_keyword(text: &str) -> bool {
        let lowered = text.to_lowercase();
        REVIEW_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword))
    }
}

impl Default for ReviewFilter {
    fn default() -> Self {
        Self {
            min_length: 10,
            shouting_length: 20,
            keyword_free_length: 20,
        }
    }
}

impl Filter<&str> for ReviewFilter {
    fn detect(&self, fragment: &str) -> bool {
        let text = fragment.trim();
        let length = text.chars().count();

        if length < self.min_length {
            return false;
        }

        if length > self.shouting_length && Self::is_shouting(text) {
            return false;
        }

        if COMMENT_MARKERS
            .iter()
            .any(|marker| text.starts_with(marker))
        {
            return false;
        }

        Self::has_keyword(text) || length >= self.keyword_free_length
    }
}
