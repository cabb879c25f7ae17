//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `handlegen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: writing site documents
//!   - `Clipboard`: copying a suggestion
//!
//! The generator's randomness seam, `CoinSource`, lives in the domain
//! because the pure generator takes it directly.

pub mod output;

pub use output::{Clipboard, Filesystem};
