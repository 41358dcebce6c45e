//! Pipeline trait.
use crate::error::Error;

/// A full run over a source tree.
///
/// `T` is whatever the run reports once done (counts, output paths...).
pub trait Pipeline<T> {
    /// Errors are reserved to problems that make the whole run meaningless
    /// (see [Error::Config]). Per-file failures are logged and skipped by implementors.
    fn run(&self) -> Result<T, Error>;
}
