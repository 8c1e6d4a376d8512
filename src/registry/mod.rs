//! Registry layer - the in-memory user store.
//!
//! The registry owns all records and the identifier counter, and
//! enforces the identity and uniqueness invariants. It has no knowledge
//! of HTTP; handlers translate its results into responses.

mod store;

pub use store::Registry;
