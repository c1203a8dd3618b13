use crate::EmailAddress;

/// A user that has not been inserted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: EmailAddress,
}

impl NewUser {
    pub fn new<S: Into<String>>(name: S, email: EmailAddress) -> Self {
        Self {
            name: name.into(),
            email,
        }
    }
}
