//! Handlegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Handlegen
//! username generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          handlegen-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GeneratorService, UsernameSession,     │
//! │  SiteService)                           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, Clipboard)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   handlegen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SystemClipboard, RNG) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (generator, vocabulary, site documents) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use handlegen_core::prelude::*;
//!
//! // Any `FnMut() -> bool` is a coin; adapters provide RNG-backed ones.
//! let mut service = GeneratorService::new(Box::new(|| true));
//!
//! let names = service.generate(
//!     &GeneratorOptions::new()
//!         .keyword("Nova")
//!         .style("minimal")
//!         .length(UsernameLength::Short)
//!         .count(5),
//! );
//! assert!(names.iter().all(|n| n.starts_with("Nova") && n.len() <= 8));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorService, SessionDefaults, SiteService, UsernameSession,
        ports::{Clipboard, Filesystem},
    };
    pub use crate::domain::{
        CoinSource, GeneratorOptions, RobotsPolicy, SiteConfig, Sitemap, StructuredData,
        UsernameLength, generate_candidates,
    };
    pub use crate::error::{HandlegenError, HandlegenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
