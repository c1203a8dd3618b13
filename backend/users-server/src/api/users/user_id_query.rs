use crate::api::users::user_id::deserialize_user_id;

use serde::Deserialize;

/// `?id=` for the single-user endpoints
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    /// `None` for an integer no stored user can have
    #[serde(deserialize_with = "deserialize_user_id")]
    pub id: Option<i64>,
}
