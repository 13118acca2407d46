use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<wiki_core::Error> for AppError {
    fn from(error: wiki_core::Error) -> Self {
        match error {
            wiki_core::Error::InvalidInput(message) => Self::BadRequest(message),
            wiki_core::Error::NotFound(_) => {
                Self::NotFound("The requested page was not found!".to_string())
            }
            wiki_core::Error::AlreadyExists(_) => {
                Self::Conflict("This page already exists!".to_string())
            }
            wiki_core::Error::Io(error) => Self::Internal(error.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(message) = &self {
            tracing::error!(error = %message, "Request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (
                wiki_core::Error::InvalidInput("title cannot be empty".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                wiki_core::Error::NotFound("Foo".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                wiki_core::Error::AlreadyExists("Foo".into()),
                StatusCode::CONFLICT,
            ),
            (
                wiki_core::Error::Io(std::io::Error::other("disk full")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = AppError::from(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
