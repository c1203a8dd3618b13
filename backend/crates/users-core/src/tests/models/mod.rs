mod field_update;
mod user_changes;
