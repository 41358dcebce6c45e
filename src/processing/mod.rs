/*! Processed folder tooling

Everything that works on the output of an extraction run (hotel table and review chunks):

- [score]: rates every review and writes the ratings table.
- [emit]: streams reviews in a bulk-load friendly format.
- [check]: summarizes the content of a processed folder.
!*/
pub mod check;
pub mod emit;
pub mod score;

pub use score::{KeywordScorer, Scorer, Scores};
