pub mod email_address;
pub mod field_update;
pub mod new_user;
pub mod user;
pub mod user_changes;
