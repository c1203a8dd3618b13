use crate::{EmailAddress, FieldUpdate, Result as CoreErrorResult, User};

/// Validated partial update of a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: FieldUpdate<String>,
    pub email: FieldUpdate<EmailAddress>,
}

impl UserChanges {
    /// Build changes from raw optional parameters.
    ///
    /// Fails if `email` is supplied and is not a valid address.
    #[track_caller]
    pub fn from_params(name: Option<String>, email: Option<String>) -> CoreErrorResult<Self> {
        let email = FieldUpdate::from(email).try_map(EmailAddress::parse)?;

        Ok(Self {
            name: FieldUpdate::from(name),
            email,
        })
    }

    /// True if no field was supplied
    pub fn is_empty(&self) -> bool {
        !self.name.is_set() && !self.email.is_set()
    }

    /// Overwrite only the supplied fields of `user`
    pub fn apply(self, user: &mut User) {
        self.name.apply_to(&mut user.name);
        self.email
            .map(EmailAddress::into_inner)
            .apply_to(&mut user.email);
    }
}
