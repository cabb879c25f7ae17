//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "suggest usernames" or "publish site documents".

pub mod generator_service;
pub mod session;
pub mod site_service;

pub use generator_service::GeneratorService;
pub use session::{COPIED_FLASH, SESSION_COUNT, SessionDefaults, UsernameSession};
pub use site_service::{ROBOTS_FILE, SCHEMA_FILE, SITEMAP_FILE, SiteDocument, SiteService};
