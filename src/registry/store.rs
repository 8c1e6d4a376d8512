//! The in-memory user store.

use tokio::sync::Mutex;

use crate::config::FIRST_USER_ID;
use crate::domain::{email, NewUser, User, UserPatch};
use crate::errors::{AppError, AppResult, OptionExt};

/// In-memory store of all user records plus the identifier counter.
///
/// Every operation acquires the single internal lock for its whole
/// read-check-write sequence, so uniqueness checks and identifier
/// assignment stay atomic when the HTTP layer dispatches requests
/// concurrently. Nothing holds the lock across I/O; all work under it
/// is bounded by the collection size.
///
/// Records keep insertion order, which is also the listing order.
pub struct Registry {
    inner: Mutex<RegistryInner>,
}

struct RegistryInner {
    users: Vec<User>,
    next_id: u64,
}

impl Registry {
    /// Create an empty registry. The first record receives
    /// [`FIRST_USER_ID`]; the counter only ever grows.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                users: Vec::new(),
                next_id: FIRST_USER_ID,
            }),
        }
    }

    /// Ordered snapshot of every record, oldest first.
    pub async fn list(&self) -> Vec<User> {
        self.inner.lock().await.users.clone()
    }

    /// Number of records currently stored.
    pub async fn count(&self) -> usize {
        self.inner.lock().await.users.len()
    }

    /// Look up a record by identifier. Returns an owned snapshot;
    /// mutation goes through [`Registry::update`] only.
    pub async fn find_by_id(&self, id: u64) -> Option<User> {
        let inner = self.inner.lock().await;
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    /// Validate a candidate and append it as a new record.
    ///
    /// Checks run in a fixed order: required fields, email shape, then
    /// the uniqueness scan. A failed create touches no state. On success
    /// the record gets the next identifier and a creation timestamp, and
    /// the stored record is returned.
    pub async fn create(&self, candidate: NewUser) -> AppResult<User> {
        let mut inner = self.inner.lock().await;

        if !candidate.is_complete() {
            return Err(AppError::MissingField);
        }
        if !email::is_valid(&candidate.email) {
            return Err(AppError::InvalidEmail);
        }
        inner.check_conflicts(&candidate.user_name, &candidate.email, None)?;

        let id = inner.allocate_id();
        let user = User::new(id, candidate);
        inner.users.push(user.clone());
        Ok(user)
    }

    /// Merge non-empty patch fields into the record with the given
    /// identifier.
    ///
    /// Fails with `NotFound` before anything else is inspected. The
    /// record itself is excluded from the uniqueness scan, so re-sending
    /// a record's current username or email is not a conflict. A failed
    /// update leaves the record untouched.
    pub async fn update(&self, id: u64, patch: UserPatch) -> AppResult<User> {
        let mut inner = self.inner.lock().await;

        let idx = inner.position(id).ok_or_not_found()?;
        if !patch.email.is_empty() && !email::is_valid(&patch.email) {
            return Err(AppError::InvalidEmail);
        }
        inner.check_conflicts(&patch.user_name, &patch.email, Some(id))?;

        let user = &mut inner.users[idx];
        user.apply(patch);
        Ok(user.clone())
    }

    /// Remove the record with the given identifier, preserving the
    /// relative order of the remaining records. The identifier is never
    /// handed out again.
    pub async fn delete(&self, id: u64) -> AppResult<()> {
        let mut inner = self.inner.lock().await;

        let idx = inner.position(id).ok_or_not_found()?;
        inner.users.remove(idx);
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryInner {
    /// Hand out the next identifier. Post-increment; deleted identifiers
    /// leave gaps.
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Index of the record with the given identifier, if any.
    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    /// Scan for username/email collisions against every record except
    /// `exclude`. The username is checked before the email within each
    /// record, so a candidate colliding with two different records
    /// reports the conflict of the earliest one. Empty values never
    /// collide.
    fn check_conflicts(
        &self,
        user_name: &str,
        email: &str,
        exclude: Option<u64>,
    ) -> AppResult<()> {
        for existing in &self.users {
            if Some(existing.id) == exclude {
                continue;
            }
            if !user_name.is_empty() && existing.user_name == user_name {
                return Err(AppError::DuplicateUsername);
            }
            if !email.is_empty() && existing.email == email {
                return Err(AppError::DuplicateEmail);
            }
        }
        Ok(())
    }
}
