//! Input handling module

pub mod decoder;
pub mod file_reader;
pub mod glob_resolver;

pub use decoder::{resolve_encoding, ChunkDecoder};
pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
