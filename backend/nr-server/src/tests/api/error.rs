use crate::ApiError;

use nr_auth::ServiceError;
use nr_core::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
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
        message: "Nurse not found with id 3".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Nurse not found with id 3");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Email is malformed", "email");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_conflict_error_returns_409() {
    let error = ApiError::Conflict {
        message: "Email already registered".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Internal server error".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn given_conflict_service_error_when_converted_then_conflict_without_email() {
    let api_error = ApiError::from(ServiceError::conflict("jon@test.com"));

    match api_error {
        ApiError::Conflict { message, .. } => {
            assert_that!(message, not(contains_substring("jon@test.com")))
        }
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[test]
fn given_invalid_email_when_converted_then_validation_on_email_field() {
    let api_error = ApiError::from(ServiceError::invalid_email("bad-email"));

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_that!(message, contains_substring("Invalid parameters. Email must contain"));
            assert_that!(field.as_deref(), some(eq("email")));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn given_invalid_password_when_converted_then_validation_on_password_field() {
    let api_error = ApiError::from(ServiceError::invalid_password());

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_that!(
                message,
                contains_substring("Invalid parameters. Password must be at least 8 characters")
            );
            assert_that!(field.as_deref(), some(eq("password")));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn given_invalid_name_when_converted_then_validation_names_the_field() {
    let api_error = ApiError::from(ServiceError::invalid_name("first_name"));

    match api_error {
        ApiError::Validation { field, .. } => {
            assert_that!(field.as_deref(), some(eq("first_name")))
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn given_not_found_when_converted_then_message_names_the_id() {
    let api_error = ApiError::from(ServiceError::not_found(99));

    match api_error {
        ApiError::NotFound { message, .. } => {
            assert_that!(message.as_str(), eq("Nurse not found with id 99"))
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn given_store_unavailable_when_converted_then_internal_with_generic_message() {
    let service_error = ServiceError::from(StoreError::unavailable("database is locked"));

    let api_error = ApiError::from(service_error);

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_that!(message, not(contains_substring("locked")))
        }
        other => panic!("expected Internal, got {other:?}"),
    }
}

#[test]
fn given_hashing_failure_when_converted_then_internal() {
    let api_error = ApiError::from(ServiceError::hashing("out of memory"));

    assert!(matches!(api_error, ApiError::Internal { .. }));
}
