/*! Filtering utilities

Filters decide whether a candidate fragment is kept.
They implement [filter::Filter], and are pure: two equal inputs always yield the same answer.

Rejection is not an error: rejected fragments are dropped silently by the caller.
! */
mod filter;
mod review;

pub use filter::Filter;
pub use review::ReviewFilter;
