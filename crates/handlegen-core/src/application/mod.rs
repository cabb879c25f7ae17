//! Application layer for Handlegen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService, UsernameSession, SiteService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GeneratorService, SessionDefaults, SiteService, UsernameSession};

// Re-export port traits (for adapter implementation)
pub use ports::{Clipboard, Filesystem};

pub use error::ApplicationError;
