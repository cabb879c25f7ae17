//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `handlegen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::HandlegenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `handlegen_adapters::filesystem::LocalFilesystem` (production)
/// - `handlegen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HandlegenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> HandlegenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> HandlegenResult<()>;
}

/// Port for the system clipboard.
///
/// Implemented by:
/// - `handlegen_adapters::clipboard::SystemClipboard` (platform tools)
/// - `handlegen_adapters::clipboard::MemoryClipboard` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> HandlegenResult<()>;
}
