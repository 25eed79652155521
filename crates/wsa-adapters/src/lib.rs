//! Infrastructure adapters for mkwsa.
//!
//! This crate implements the ports defined in `wsa_core::application::ports`.
//! It contains all filesystem I/O.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
