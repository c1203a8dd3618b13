pub mod create_user_query;
pub mod update_user_query;
pub mod user_dto;
pub mod user_id;
pub mod user_id_query;
pub mod users;
