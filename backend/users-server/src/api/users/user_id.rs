//! `id` query parameter.
//!
//! Any well-formed integer is accepted. One outside the `i64` range cannot
//! name a stored user and deserializes to `None`; anything that is not an
//! integer is a deserialization error.

use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer, de::Error as _};

pub fn deserialize_user_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    match raw.parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(e) => Err(D::Error::custom(format!("invalid id {raw:?}: {e}"))),
    }
}
