#![warn(missing_docs)]

//! File writing for filegen
//!
//! Persists [`Document`](filegen_generation::Document)s: contents go to a
//! temporary file that is renamed over the destination, read-only
//! destinations can be unlocked for the write and relocked afterwards, and
//! requested attributes are applied once the write succeeded.

pub mod attributes;
pub mod error;
pub mod writer;

// Re-export public API
pub use attributes::FileAttributes;
pub use error::FileError;
pub use writer::{DocumentWriteExt, DocumentWriter, FileWriteResult, WriteOptions, WriteReport};
