//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error returned by an API handler.
///
/// Store and upstream failures are reported to the caller with `message`
/// only; the underlying error is logged.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("{message}: {source}")]
  Store {
    message: &'static str,
    #[source]
    source:  BoxError,
  },

  #[error("{message}: {source}")]
  Upstream {
    message: &'static str,
    #[source]
    source:  BoxError,
  },
}

impl ApiError {
  /// `map_err` adapter for document-store failures.
  pub fn store<E>(message: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| ApiError::Store {
      message,
      source: Box::new(e),
    }
  }

  /// `map_err` adapter for external joke provider failures.
  pub fn upstream<E>(message: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| ApiError::Upstream {
      message,
      source: Box::new(e),
    }
  }

  pub fn joke_not_found() -> Self { ApiError::NotFound("joke not found".into()) }
}

impl From<jokes_core::Error> for ApiError {
  fn from(e: jokes_core::Error) -> Self { ApiError::BadRequest(e.to_string()) }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::Store { message, source } => {
        tracing::error!(error = %source, "store: {message}");
        (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
      }
      ApiError::Upstream { message, source } => {
        tracing::error!(error = %source, "upstream: {message}");
        (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
      }
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}
