//! Handlers for `/speakers` endpoints.
//!
//! Listing applies the role-based visibility policy: pass `?viewer=<user_id>`
//! to see the rows that user is allowed to see. Without a viewer the full
//! list is returned (the caller is trusted infrastructure; authentication is
//! out of scope here).

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use glossa_core::{
  policy::Scope,
  speaker::{NewSpeaker, Speaker},
  store::CorpusStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub viewer: Option<i64>,
}

/// `GET /speakers[?viewer=<user_id>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Speaker>>, ApiError>
where
  S: CorpusStore,
{
  let scope = match params.viewer {
    Some(viewer) => store
      .visibility(viewer)
      .await
      .map_err(ApiError::from_store)?,
    None => Scope::All,
  };

  let speakers = store
    .list_speakers(&scope)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(speakers))
}

/// `POST /speakers`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewSpeaker>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CorpusStore,
{
  let speaker = store.add_speaker(body).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(speaker)))
}

/// `GET /speakers/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Speaker>, ApiError>
where
  S: CorpusStore,
{
  let speaker = store
    .get_speaker(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("speaker {id} not found")))?;
  Ok(Json(speaker))
}
