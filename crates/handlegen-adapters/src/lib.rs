//! Infrastructure adapters for Handlegen.
//!
//! This crate implements the ports defined in `handlegen-core::application::ports`
//! and the generator's `CoinSource` seam. It contains all external
//! dependencies and I/O operations.

pub mod clipboard;
pub mod filesystem;
pub mod random;

// Re-export commonly used adapters
pub use clipboard::{MemoryClipboard, SystemClipboard};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use random::{SeededCoin, ThreadCoin};
