/*! Records produced by the pipeline.

- [Hotel] is produced once per source file during discovery.
- [Fragment] is a candidate review as returned by a parsing strategy.
- [Review] is a fragment that passed validation, with a global identifier.
- [ReviewRecord] is a review as read back from a chunk file.
!*/
mod hotel;
mod review;

pub use hotel::{Hotel, HotelRow};
pub use review::{Fragment, Review, ReviewRecord, ReviewRow};
