/*! Review extraction strategies.

Every strategy cuts a source file into [crate::types::Fragment]s, then keeps the ones
that pass the [crate::filtering::ReviewFilter].

- [text] holds the line and block strategies, tried in order on free text.
- [tabular] infers a review column from comma separated files.
!*/
pub mod tabular;
pub mod text;

pub use tabular::{Table, TabularExtraction};
pub use text::{TextExtraction, TextStrategy, TEXT_STRATEGIES};
