//! Email shape validation.
//!
//! The registry accepts a deliberately narrow `local@domain.tld` shape:
//! alphanumeric local part, alphanumeric domain label, and one or more
//! dot-separated alphanumeric suffixes. Not an RFC 5321 validator.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+(?:[@][a-zA-Z0-9]+)(?:[.][a-zA-Z0-9]+)+$")
        .expect("email pattern is a valid regex")
});

/// Check whether an email matches the registry's accepted shape.
pub fn is_valid(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
