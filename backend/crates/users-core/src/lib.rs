pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use models::email_address::{EmailAddress, is_valid_email};
pub use models::field_update::FieldUpdate;
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_changes::UserChanges;
