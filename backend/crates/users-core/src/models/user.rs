//! User entity - the only record the service persists.

use crate::NewUser;

use serde::{Deserialize, Serialize};

/// A stored user.
///
/// `id` is assigned by the store on insert and is never reused, even after
/// the user is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Build the stored form of a freshly inserted record
    pub fn from_new(id: i64, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email.into_inner(),
        }
    }
}
