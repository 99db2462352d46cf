//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use glossa_core::{Error as DomainError, store::StoreError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Map a backend failure onto an HTTP-shaped error using its domain
  /// classification; engine-internal failures stay a 500.
  pub fn from_store<E: StoreError>(e: E) -> Self {
    match e.as_domain() {
      Some(domain) => {
        let message = domain.to_string();
        match domain {
          DomainError::UserNotFound(_)
          | DomainError::ProjectNotFound(_)
          | DomainError::SpeakerNotFound(_)
          | DomainError::DocNotFound(_)
          | DomainError::RowNotFound { .. } => Self::NotFound(message),
          DomainError::DuplicateLabel(_)
          | DomainError::ReferencedRowInUse(_) => Self::Conflict(message),
          DomainError::MissingReference(_)
          | DomainError::MissingRequiredField(_)
          | DomainError::SupervisorCycle(_)
          | DomainError::SupervisorNotEligible(_)
          | DomainError::UnknownLabel(_) => Self::BadRequest(message),
        }
      }
      None => Self::Store(Box::new(e)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
