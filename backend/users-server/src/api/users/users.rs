//! User REST API handlers
//!
//! Parameters travel in the query string for every endpoint.

use crate::{
    ApiQuery, ApiResult, AppState, CreateUserQuery, ServiceError, UpdateUserQuery, UserDto,
    UserIdQuery,
};

use users_core::EmailAddress;

use axum::{Json, extract::State, http::StatusCode};

// =============================================================================
// Handlers
// =============================================================================

/// GET /users
///
/// List all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.users.list_all().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /user?id=
///
/// Get a single user by id
pub async fn get_user(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UserIdQuery>,
) -> ApiResult<Json<UserDto>> {
    let id = query.id.ok_or_else(ServiceError::user_not_found)?;

    let user = state.users.get_by_id(id).await?;

    Ok(Json(user.into()))
}

/// POST /user?name=&email=
///
/// Create a user and return the stored record, including its new id
pub async fn create_user(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CreateUserQuery>,
) -> ApiResult<Json<UserDto>> {
    let user = state.users.create(query.name, query.email).await?;

    Ok(Json(user.into()))
}

/// PUT /user?id=&name=&email=
///
/// Update the supplied fields of an existing user
pub async fn update_user(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UpdateUserQuery>,
) -> ApiResult<Json<UserDto>> {
    let (id, name, email) = query.into_parts();

    let Some(id) = id else {
        // An invalid email is still reported ahead of the missing user
        email.try_map(EmailAddress::parse).map_err(ServiceError::from)?;
        return Err(ServiceError::user_not_found().into());
    };

    let user = state.users.update(id, name, email).await?;

    Ok(Json(user.into()))
}

/// DELETE /user?id=
///
/// Delete a user permanently
pub async fn delete_user(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UserIdQuery>,
) -> ApiResult<StatusCode> {
    let id = query.id.ok_or_else(ServiceError::user_not_found)?;

    state.users.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
