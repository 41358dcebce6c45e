/*!
# IO utilities

Source reading ([reader]) and table writing ([writer]), plus the [layout] of the output folder.
!*/
pub mod layout;
pub mod reader;
pub mod writer;

pub use writer::ChunkWriter;
