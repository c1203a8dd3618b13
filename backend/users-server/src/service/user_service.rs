//! User CRUD use-cases.
//!
//! Email validation always runs before any lookup, so an invalid email is
//! reported as invalid input even when the id does not exist.

use crate::{ServiceError, ServiceResult};

use users_core::{EmailAddress, FieldUpdate, NewUser, User, UserChanges};
use users_db::UserRepository;

use log::{debug, info};

#[derive(Clone, Debug)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<User>> {
        let users = self.repo.find_all().await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(ServiceError::user_not_found)
    }

    /// Validate and insert a new user, returning the stored record
    pub async fn create(&self, name: String, email: String) -> ServiceResult<User> {
        let new_user = NewUser::new(name, EmailAddress::parse(email)?);

        let id = self.repo.insert(&new_user).await?;
        let user = User::from_new(id, new_user);

        info!("Created user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Overwrite only the supplied fields. With nothing supplied the stored
    /// record is returned as is.
    pub async fn update(
        &self,
        id: i64,
        name: FieldUpdate<String>,
        email: FieldUpdate<String>,
    ) -> ServiceResult<User> {
        let changes = UserChanges {
            name,
            email: email.try_map(EmailAddress::parse)?,
        };

        let mut user = self.get_by_id(id).await?;

        if changes.is_empty() {
            debug!("Update of user {} carried no changes", id);
            return Ok(user);
        }

        changes.apply(&mut user);

        if !self.repo.replace(&user).await? {
            // Removed between the lookup and the write
            return Err(ServiceError::user_not_found());
        }

        info!("Updated user {}", id);

        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repo.remove(id).await? {
            return Err(ServiceError::user_not_found());
        }

        info!("Deleted user {}", id);

        Ok(())
    }
}
