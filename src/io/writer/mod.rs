/*!
# Output writing

Every output file is a CSV file written atomically (see [csvfile::write_atomic]):
a file is either fully written or not there at all.

[ChunkWriter] writes the hotel table and splits reviews into fixed-size chunk files.
!*/
mod chunkwriter;
pub mod csvfile;

pub use chunkwriter::ChunkWriter;
