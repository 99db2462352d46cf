//! Handlers for `/docs` and `/participations` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`/`POST` | `/docs` | Docs are created unassigned |
//! | `GET`  | `/docs/{id}` | 404 if not found |
//! | `PUT`  | `/docs/{id}/assignment` | Moves `done` NULL → false |
//! | `PUT`  | `/docs/{id}/done` | Body: `{"done":true}` |
//! | `GET`/`POST` | `/participations` | A transcript may stand in for words |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use glossa_core::{
  doc::{Doc, NewDoc, NewParticipation, Participation},
  store::CorpusStore,
  transcript,
};
use serde::Deserialize;

use crate::error::ApiError;

/// `GET /docs`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Doc>>, ApiError>
where
  S: CorpusStore,
{
  let docs = store.list_docs().await.map_err(ApiError::from_store)?;
  Ok(Json(docs))
}

/// `POST /docs`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewDoc>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CorpusStore,
{
  let doc = store.add_doc(body).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(doc)))
}

/// `GET /docs/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Doc>, ApiError>
where
  S: CorpusStore,
{
  let doc = store
    .get_doc(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("document {id} not found")))?;
  Ok(Json(doc))
}

#[derive(Debug, Deserialize)]
pub struct AssignmentBody {
  pub assigned_to: i64,
  pub assigned_by: i64,
}

/// `PUT /docs/{id}/assignment`
pub async fn assign<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<AssignmentBody>,
) -> Result<Json<Doc>, ApiError>
where
  S: CorpusStore,
{
  let doc = store
    .assign_doc(id, body.assigned_to, body.assigned_by)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(doc))
}

#[derive(Debug, Deserialize)]
pub struct DoneBody {
  pub done: bool,
}

/// `PUT /docs/{id}/done`
pub async fn set_done<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<DoneBody>,
) -> Result<Json<Doc>, ApiError>
where
  S: CorpusStore,
{
  let doc = store
    .set_done(id, body.done)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(doc))
}

// ─── Participation ────────────────────────────────────────────────────────────

/// `GET /participations`
pub async fn participations<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Participation>>, ApiError>
where
  S: CorpusStore,
{
  let rows = store
    .list_participations()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct ParticipationBody {
  pub doc_id:     i64,
  pub speaker_id: i64,
  /// Explicit word count; wins over `transcript` when both are present.
  pub words:      Option<i64>,
  /// Raw transcript text to derive the word count from.
  pub transcript: Option<String>,
}

/// `POST /participations` — word count comes from `words`, or is derived by
/// tokenizing `transcript`, or stays unknown.
pub async fn add_participation<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ParticipationBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CorpusStore,
{
  let words = body.words.or_else(|| {
    body
      .transcript
      .as_deref()
      .map(|text| transcript::tokenize(text).word_count())
  });

  let row = store
    .add_participation(NewParticipation {
      doc_id: body.doc_id,
      speaker_id: body.speaker_id,
      words,
    })
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(row)))
}
