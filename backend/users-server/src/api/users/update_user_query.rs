use crate::api::users::user_id::deserialize_user_id;

use users_core::FieldUpdate;

use serde::Deserialize;

/// `name` and `email` are optional; an omitted parameter leaves the stored
/// value unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateUserQuery {
    #[serde(deserialize_with = "deserialize_user_id")]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl UpdateUserQuery {
    /// Split into the target id and the per-field updates
    pub fn into_parts(self) -> (Option<i64>, FieldUpdate<String>, FieldUpdate<String>) {
        (self.id, self.name.into(), self.email.into())
    }
}
