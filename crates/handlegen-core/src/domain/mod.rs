//! Core domain layer for Handlegen.
//!
//! Pure logic: the username generator, its vocabulary, and the site
//! documents. No I/O. Randomness enters only through [`CoinSource`].
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, clipboard, or environment access
//! - **Immutable values**: All domain objects are Clone + PartialEq
pub mod error;
pub mod generator;
pub mod site;
pub mod value_objects;
pub mod vocabulary;

pub use error::{DomainError, ErrorCategory};

pub use generator::{
    CoinSource, DEFAULT_COUNT, DEFAULT_KEYWORD, DEFAULT_STYLE, Generation, GeneratorOptions,
    MIN_CANDIDATE_LEN, THIRD_WORD_PROBABILITY, generate, generate_candidates, sanitize,
};

pub use site::{RobotsPolicy, SiteConfig, Sitemap, StructuredData};

pub use value_objects::UsernameLength;
