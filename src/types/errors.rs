use std::fmt;

// === ApiError ===

/// Errors surfaced by the HTTP/JSON layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    Status(u16, String),
    /// The request never produced a response (connect, timeout, transport).
    Network(String),
    /// The response body could not be decoded as the expected JSON shape.
    Decode(String),
}

impl ApiError {
    /// HTTP status code, if the backend produced a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code, _) => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether retrying the request could plausibly succeed.
    ///
    /// 4xx responses (including 404) and decode failures are caller errors
    /// and never retryable. 5xx and transport failures may be transient.
    /// Retrying itself is caller policy; this only classifies.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Status(code, _) => *code >= 500,
            ApiError::Network(_) => true,
            ApiError::Decode(_) => false,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(code, text) => write!(f, "HTTP {}: {}", code, text),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ApiError::Status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown").to_string(),
            );
        }
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        ApiError::Network(err.to_string())
    }
}

// === ValidationError ===

/// Client-side validation failures, caught before any request is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The bookmark URL is empty or whitespace-only.
    EmptyUrl,
    /// The bookmark title is empty or whitespace-only.
    EmptyTitle,
    /// The operation requires a backend-assigned id, but the bookmark has none.
    MissingId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyUrl => write!(f, "Bookmark URL must not be empty"),
            ValidationError::EmptyTitle => write!(f, "Bookmark title must not be empty"),
            ValidationError::MissingId => write!(f, "Bookmark has no id"),
        }
    }
}

impl std::error::Error for ValidationError {}

// === ClientError ===

/// Errors returned by the bookmark store: either a local validation failure
/// or a failure from the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    Validation(ValidationError),
    Api(ApiError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation(err) => write!(f, "Validation failed: {}", err),
            ClientError::Api(err) => write!(f, "Request failed: {}", err),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err)
    }
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        ClientError::Api(err)
    }
}

// === ConfigError ===

/// Errors related to loading or saving the client configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the config file.
    IoError(String),
    /// The config file exists but could not be parsed.
    SerializationError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
