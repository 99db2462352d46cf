//! Read-only handlers for the derived views.
//!
//! Each request reads the backing SQL view directly — the projections are
//! recomputed from current table state on every call.

use std::sync::Arc;

use axum::{Json, extract::State};
use glossa_core::{
  store::CorpusStore,
  view::{DocOverview, ParticipationRow, SpeakerProfile},
};

use crate::error::ApiError;

/// `GET /views/speakers`
pub async fn speakers<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<SpeakerProfile>>, ApiError>
where
  S: CorpusStore,
{
  let rows = store
    .speaker_profiles()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(rows))
}

/// `GET /views/docs`
pub async fn docs<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<DocOverview>>, ApiError>
where
  S: CorpusStore,
{
  let rows = store.doc_overviews().await.map_err(ApiError::from_store)?;
  Ok(Json(rows))
}

/// `GET /views/participations`
pub async fn participations<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ParticipationRow>>, ApiError>
where
  S: CorpusStore,
{
  let rows = store
    .participations_view()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(rows))
}
