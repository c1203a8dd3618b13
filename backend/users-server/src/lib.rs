pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod service;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_query::ApiQuery,
    users::{
        create_user_query::CreateUserQuery,
        update_user_query::UpdateUserQuery,
        user_dto::UserDto,
        user_id_query::UserIdQuery,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
};
pub use app_state::AppState;
pub use service::{
    error::{INVALID_EMAIL_FORMAT, NO_USER_WITH_SUCH_ID, Result as ServiceResult, ServiceError},
    user_service::UserService,
};

pub use crate::routes::build_router;
