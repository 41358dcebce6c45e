//! Filtering trait.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
pub trait Filter<T>: Default {
    /// `true` if the item is kept.
    fn detect(&self, item: T) -> bool;
}
