//! Command handlers.  Each module translates parsed arguments into calls
//! on the core services and renders the result; no business logic lives
//! here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod interactive;
pub mod site;
pub mod styles;
