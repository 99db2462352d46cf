//! Handler for `GET /documents` — the one externally promised contract.
//!
//! Returns every document's external label (project badge + padded id) as a
//! JSON array under a `data` key.

use std::sync::Arc;

use axum::{Json, extract::State};
use glossa_core::store::CorpusStore;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
  pub data: Vec<String>,
}

/// `GET /documents` → `{"data": ["12A001", ...]}`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<DocumentsResponse>, ApiError>
where
  S: CorpusStore,
{
  let data = store
    .document_labels()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(DocumentsResponse { data }))
}
