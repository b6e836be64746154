//! Record types stored in the realtime database.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user entry.
///
/// The wire representation is the JSON object `{"id", "name", "age"}` kept at
/// `users/{id}` in the remote tree. The `id` is generated client-side at
/// creation and never changes; uniqueness comes from UUID generation, not from
/// a server-side check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name, non-empty.
    pub name: String,
    /// Age in years.
    pub age: i64,
}

impl UserRecord {
    /// Create a record with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            age,
        }
    }
}
