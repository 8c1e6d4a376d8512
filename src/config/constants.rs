//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Registry
// =============================================================================

/// Identifier assigned to the first record; the counter only ever grows,
/// so identifiers are never reused, even after deletion.
pub const FIRST_USER_ID: u64 = 1;
