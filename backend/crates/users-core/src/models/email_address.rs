//! Email address syntax check.
//!
//! Accepts `local@domain` where the local part is non-empty, the domain has
//! at least one `.` and every domain label is non-empty. Whitespace and a
//! second `@` are rejected anywhere in the address.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").expect("valid email regex")
});

/// Returns true if `value` is a syntactically valid email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// An email address that has passed [`is_valid_email`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    #[track_caller]
    pub fn parse<S: Into<String>>(value: S) -> CoreErrorResult<Self> {
        let value = value.into();
        if is_valid_email(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::invalid_email(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreErrorResult<Self> {
        Self::parse(value)
    }
}

impl FromStr for EmailAddress {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::parse(s)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
