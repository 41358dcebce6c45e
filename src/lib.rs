//! # Innkeeper
//!
//! Innkeeper turns a raw, city-partitioned tree of hotel review files into a normalized dataset:
//! a hotel table and review chunks, ready to be scored and bulk-loaded.
//!
//! ```text
//! raw/
//! ├── london/
//! │   ├── grand_file          (free text, one review per line or per block)
//! │   └── the_savoy.csv       (tabular, review column is inferred)
//! └── new-york-city/
//!     └── ...
//! ```
//!
//! This project can be used both as a tool, or as a lib to integrate extraction into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! innkeeper 0.1.0
//! hotel review extraction tool.
//!
//! USAGE:
//!     innkeeper <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     check      Summarize the content of a processed folder
//!     emit       Stream the reviews of a processed folder in COPY text format on stdout
//!     extract    Extract hotels and reviews from a city-partitioned source tree
//!     help       Prints this message or the help of the given subcommand(s)
//!     score      Score the reviews of a processed folder
//! ```
pub mod context;
pub mod error;
pub mod filtering;
pub mod io;
pub mod parsing;
pub mod pipelines;
pub mod processing;
pub mod sources;
pub mod types;
