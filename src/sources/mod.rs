/*! Source tree walking

Turns a city-partitioned source tree into [crate::types::Hotel]s.
!*/
mod discovery;
pub mod names;

pub use discovery::Discovery;
