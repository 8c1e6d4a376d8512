//! User Registry - a minimal in-memory user directory over HTTP
//!
//! This crate serves a mock user directory with create/read/update/delete
//! endpoints and uniqueness constraints on username and email. All state
//! lives in memory; nothing survives a restart.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User record, request DTOs, email shape rules
//! - **registry**: The in-memory store and its invariants
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default 0.0.0.0:8080
//! cargo run -- serve
//!
//! # Pick a port explicitly
//! cargo run -- serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod registry;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, User, UserPatch};
pub use errors::{AppError, AppResult};
pub use registry::Registry;
