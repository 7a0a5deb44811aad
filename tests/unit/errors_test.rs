//! Unit tests for error classification and display.

use rstest::rstest;

use tagmarks::types::errors::{ApiError, ClientError, ValidationError};

/// 5xx statuses and transport failures are retryable; 4xx (including 404)
/// and decode failures are not.
#[rstest]
#[case(ApiError::Status(500, "Internal Server Error".to_string()), true)]
#[case(ApiError::Status(502, "Bad Gateway".to_string()), true)]
#[case(ApiError::Status(503, "Service Unavailable".to_string()), true)]
#[case(ApiError::Status(400, "Bad Request".to_string()), false)]
#[case(ApiError::Status(404, "Not Found".to_string()), false)]
#[case(ApiError::Status(422, "Unprocessable Entity".to_string()), false)]
#[case(ApiError::Network("connection refused".to_string()), true)]
#[case(ApiError::Decode("unexpected end of input".to_string()), false)]
fn test_retry_classification(#[case] error: ApiError, #[case] retryable: bool) {
    assert_eq!(error.is_retryable(), retryable);
}

#[test]
fn test_status_accessors() {
    let err = ApiError::Status(404, "Not Found".to_string());
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());

    let err = ApiError::Network("timeout".to_string());
    assert_eq!(err.status(), None);
    assert!(!err.is_not_found());
}

#[test]
fn test_display_messages() {
    assert_eq!(
        ApiError::Status(404, "Not Found".to_string()).to_string(),
        "HTTP 404: Not Found"
    );
    assert_eq!(
        ApiError::Network("connection refused".to_string()).to_string(),
        "Network error: connection refused"
    );
    assert_eq!(
        ValidationError::EmptyUrl.to_string(),
        "Bookmark URL must not be empty"
    );
    assert_eq!(
        ClientError::Validation(ValidationError::EmptyTitle).to_string(),
        "Validation failed: Bookmark title must not be empty"
    );
    assert_eq!(
        ClientError::Api(ApiError::Decode("bad json".to_string())).to_string(),
        "Request failed: Decode error: bad json"
    );
}

/// `From` conversions feed both error sources into `ClientError`.
#[test]
fn test_client_error_conversions() {
    let from_validation: ClientError = ValidationError::MissingId.into();
    assert_eq!(
        from_validation,
        ClientError::Validation(ValidationError::MissingId)
    );

    let from_api: ClientError = ApiError::Status(500, "Internal Server Error".to_string()).into();
    assert!(matches!(from_api, ClientError::Api(ApiError::Status(500, _))));
}
