//! User domain entity and related types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// User record stored by the registry.
///
/// `id` and `time_create` are assigned at creation and never change;
/// the remaining fields are mutable through [`User::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned in strictly increasing order
    #[schema(example = 1)]
    pub id: u64,
    /// Username, unique across all records
    #[schema(example = "alice")]
    pub user_name: String,
    /// Given name
    #[schema(example = "Alice")]
    pub first_name: String,
    /// Family name
    #[schema(example = "Anderson")]
    pub last_name: String,
    /// Email address, unique across all records
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Creation timestamp, RFC 3339
    #[serde(serialize_with = "serialize_rfc3339")]
    #[schema(value_type = String, example = "2024-05-01T12:00:00Z")]
    pub time_create: DateTime<Utc>,
}

/// Serialize at seconds precision with a `Z` suffix, the registry's wire
/// format for timestamps.
fn serialize_rfc3339<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}

impl User {
    /// Build a stored record from a validated candidate, stamping the
    /// creation time.
    pub fn new(id: u64, candidate: NewUser) -> Self {
        Self {
            id,
            user_name: candidate.user_name,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            email: candidate.email,
            time_create: Utc::now(),
        }
    }

    /// Merge non-empty patch fields into this record.
    ///
    /// Empty patch fields keep the current value, so there is no way to
    /// clear a field through an update. `id` and `time_create` are never
    /// touched.
    pub fn apply(&mut self, patch: UserPatch) {
        if !patch.user_name.is_empty() {
            self.user_name = patch.user_name;
        }
        if !patch.first_name.is_empty() {
            self.first_name = patch.first_name;
        }
        if !patch.last_name.is_empty() {
            self.last_name = patch.last_name;
        }
        if !patch.email.is_empty() {
            self.email = patch.email;
        }
    }
}

/// User creation data transfer object.
///
/// Absent keys decode as empty strings, so "key missing" and "key present
/// but empty" are the same case; the registry rejects both.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewUser {
    /// Username
    #[serde(default)]
    #[schema(example = "alice")]
    pub user_name: String,
    /// Given name
    #[serde(default)]
    #[schema(example = "Alice")]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    #[schema(example = "Anderson")]
    pub last_name: String,
    /// Email address
    #[serde(default)]
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl NewUser {
    /// True when every required field is present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.user_name.is_empty()
            && !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
    }
}

/// User update data transfer object.
///
/// Every field is optional on the wire; an absent or empty field means
/// "no change".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserPatch {
    /// New username
    #[serde(default)]
    #[schema(example = "alice2")]
    pub user_name: String,
    /// New given name
    #[serde(default)]
    #[schema(example = "Alice")]
    pub first_name: String,
    /// New family name
    #[serde(default)]
    #[schema(example = "Armstrong")]
    pub last_name: String,
    /// New email address
    #[serde(default)]
    #[schema(example = "alice@armstrong.net")]
    pub email: String,
}
