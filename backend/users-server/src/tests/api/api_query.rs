use crate::{ApiError, ApiQuery, UpdateUserQuery, UserIdQuery};

use axum::extract::FromRequestParts;
use http::Request;
use users_core::FieldUpdate;

async fn extract<T: serde::de::DeserializeOwned>(uri: &str) -> Result<T, ApiError> {
    let request = Request::builder().uri(uri).body(()).unwrap();
    let (mut parts, _) = request.into_parts();

    ApiQuery::<T>::from_request_parts(&mut parts, &())
        .await
        .map(|ApiQuery(value)| value)
}

#[tokio::test]
async fn test_valid_id_is_extracted() {
    let query: UserIdQuery = extract("/user?id=42").await.unwrap();

    assert_eq!(query.id, Some(42));
}

#[tokio::test]
async fn test_negative_id_is_accepted() {
    let query: UserIdQuery = extract("/user?id=-3").await.unwrap();

    assert_eq!(query.id, Some(-3));
}

#[tokio::test]
async fn test_missing_id_is_bad_request() {
    let result = extract::<UserIdQuery>("/user").await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let result = extract::<UserIdQuery>("/user?id=abc").await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_out_of_range_id_names_no_user() {
    for uri in [
        "/user?id=99999999999999999999",
        "/user?id=-99999999999999999999",
        "/user?id=9223372036854775808",
    ] {
        let query: UserIdQuery = extract(uri).await.unwrap();

        assert_eq!(query.id, None, "{uri}");
    }
}

#[tokio::test]
async fn test_i64_bounds_are_kept() {
    let max: UserIdQuery = extract("/user?id=9223372036854775807").await.unwrap();
    let min: UserIdQuery = extract("/user?id=-9223372036854775808").await.unwrap();

    assert_eq!(max.id, Some(i64::MAX));
    assert_eq!(min.id, Some(i64::MIN));
}

#[tokio::test]
async fn test_empty_or_fractional_id_is_bad_request() {
    for uri in ["/user?id=", "/user?id=1.5", "/user?id=1e3"] {
        let result = extract::<UserIdQuery>(uri).await;

        assert!(matches!(result, Err(ApiError::BadRequest { .. })), "{uri}");
    }
}

#[tokio::test]
async fn test_update_query_distinguishes_omitted_from_empty() {
    let query: UpdateUserQuery = extract("/user?id=1&name=").await.unwrap();

    let (id, name, email) = query.into_parts();

    assert_eq!(id, Some(1));
    assert_eq!(name, FieldUpdate::Set(String::new()));
    assert_eq!(email, FieldUpdate::Unchanged);
}

#[tokio::test]
async fn test_update_query_decodes_percent_escapes() {
    let query: UpdateUserQuery = extract("/user?id=1&email=wrong%20format%20email")
        .await
        .unwrap();

    let (_, _, email) = query.into_parts();

    assert_eq!(email, FieldUpdate::Set("wrong format email".to_string()));
}
