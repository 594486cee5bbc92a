//! Readers and writers for the Aspartix format and query answers.

mod aspartix_reader;
mod aspartix_writer;

pub use aspartix_reader::AspartixReader;
pub use aspartix_writer::AspartixWriter;
