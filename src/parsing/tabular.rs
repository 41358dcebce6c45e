/*! Tabular strategy.

Tabular files are comma separated, with a header row and no declared schema.
The review column is inferred:

1. the first column whose (lowercased) name contains one of [REVIEW_COLUMN_KEYWORDS],
1. or else the first column that holds string values (i.e. at least one non-null cell that is neither a number nor a boolean).

Each non-null cell of that column is a candidate, numbered by its 1-based data row.
!*/
use log::{debug, warn};

use crate::error::Error;
use crate::filtering::{Filter, ReviewFilter};
use crate::io::reader::{decode, DecodeOutcome};
use crate::types::Fragment;

/// Column name fragments that designate a review column.
pub const REVIEW_COLUMN_KEYWORDS: [&str; 6] = [
    "review",
    "text",
    "comment",
    "content",
    "description",
    "feedback",
];

/// Cell values that are read as missing.
const NULL_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const BOOLEAN_MARKERS: [&str; 6] = ["True", "False", "TRUE", "FALSE", "true", "false"];

/// A decoded table. Missing cells are [None].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

fn is_null(cell: &str) -> bool {
    NULL_MARKERS.contains(&cell)
}

/// `true` if the cell would be read as a number or a boolean.
fn is_scalar(cell: &str) -> bool {
    BOOLEAN_MARKERS.contains(&cell) || cell.trim().parse::<f64>().is_ok()
}

impl Table {
    /// Parse comma separated text.
    ///
    /// Rows shorter than the header are padded with missing cells.
    /// Rows longer than the header are an error.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(Error::Custom("no columns to parse".to_string()));
        }

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(Error::Custom(format!(
                    "expected {} fields in row {}, saw {}",
                    headers.len(),
                    idx + 1,
                    record.len()
                )));
            }

            let mut row: Vec<Option<String>> = record
                .iter()
                .map(|cell| {
                    if is_null(cell) {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect();
            row.resize(headers.len(), None);
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn nb_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column that holds reviews, if one can be inferred.
    pub fn review_column(&self) -> Option<usize> {
        let by_name = self.headers.iter().position(|header| {
            let header = header.to_lowercase();
            REVIEW_COLUMN_KEYWORDS
                .iter()
                .any(|keyword| header.contains(keyword))
        });

        by_name.or_else(|| (0..self.headers.len()).find(|col| self.is_string_column(*col)))
    }

    fn is_string_column(&self, col: usize) -> bool {
        self.rows
            .iter()
            .filter_map(|row| row[col].as_deref())
            .any(|cell| !is_scalar(cell))
    }

    /// Non-null cells of column `col`, numbered by data row.
    pub fn candidates(&self, col: usize) -> Vec<Fragment> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| {
                row.get(col)
                    .and_then(|cell| cell.as_ref())
                    .map(|cell| Fragment::new(cell.as_str(), idx + 1))
            })
            .collect()
    }
}

/// Result of [extract].
#[derive(Debug, PartialEq, Eq)]
pub struct TabularExtraction {
    pub outcome: DecodeOutcome,
    /// Name of the inferred review column.
    pub column: Option<String>,
    pub reviews: Vec<Fragment>,
    pub rejected: usize,
}

/// Decode, parse and extract reviews from a tabular file's bytes.
///
/// A table without any usable column yields no reviews, and is not an error.
pub fn extract(bytes: &[u8], filter: &ReviewFilter) -> Result<TabularExtraction, Error> {
    let decoded = decode(bytes);
    debug!("decoded table as {:?}", decoded.outcome);

    let table = Table::parse(&decoded.text)?;

    let column = match table.review_column() {
        Some(col) => col,
        None => {
            warn!("no review column found in {:?}", table.headers());
            return Ok(TabularExtraction {
                outcome: decoded.outcome,
                column: None,
                reviews: Vec::new(),
                rejected: 0,
            });
        }
    };

    let (reviews, dropped): (Vec<Fragment>, Vec<Fragment>) = table
        .candidates(column)
        .into_iter()
        .partition(|fragment| filter.detect(fragment.text.as_str()));

    debug!(
        "column {:?}: {} accepted, {} rejected",
        table.headers()[column],
        reviews.len(),
        dropped.len()
    );

    Ok(TabularExtraction {
        outcome: decoded.outcome,
        column: Some(table.headers()[column].clone()),
        reviews,
        rejected: dropped.len(),
    })
}
