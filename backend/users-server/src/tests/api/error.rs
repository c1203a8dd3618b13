use crate::{ApiError, INVALID_EMAIL_FORMAT, NO_USER_WITH_SUCH_ID, ServiceError};

use users_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Item not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Invalid email format".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "missing field `id`".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_service_invalid_input_converts_to_validation() {
    let service_error = ServiceError::from(users_core::CoreError::invalid_email("nope"));

    let api_error = ApiError::from(service_error);

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, INVALID_EMAIL_FORMAT);
            assert_eq!(field.as_deref(), Some("email"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_service_not_found_converts_to_not_found() {
    let api_error = ApiError::from(ServiceError::user_not_found());

    match api_error {
        ApiError::NotFound { message, .. } => assert_eq!(message, NO_USER_WITH_SUCH_ID),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_database_error_converts_to_internal_without_details() {
    let db = users_db::Database::open_in_memory().await.unwrap();
    db.close().await;
    let db_error = db.ping().await.unwrap_err();

    let api_error = ApiError::from(ServiceError::from(db_error));

    match api_error {
        ApiError::Internal { message, .. } => assert_eq!(message, "Database operation failed"),
        other => panic!("expected Internal, got {other:?}"),
    }
}

#[tokio::test]
async fn test_migration_and_initialization_details_stay_out_of_body() {
    for db_error in [
        DbError::Migration {
            message: "checksum mismatch for 20260101000001".into(),
            location: ErrorLocation::from(Location::caller()),
        },
        DbError::Initialization {
            message: "Failed to create database directory /srv/users".into(),
            location: ErrorLocation::from(Location::caller()),
        },
    ] {
        let (status, json) = body_json(ApiError::from(db_error)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"]["message"], "Database operation failed");
    }
}
