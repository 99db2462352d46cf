//! Handlers for `/projects` and `/corpora` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use glossa_core::{
  project::{Corpus, NewProject, Project},
  store::CorpusStore,
};
use serde::Deserialize;

use crate::error::ApiError;

/// `GET /projects`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Project>>, ApiError>
where
  S: CorpusStore,
{
  let projects = store.list_projects().await.map_err(ApiError::from_store)?;
  Ok(Json(projects))
}

/// `POST /projects` — body: `{"label":"...","badge":"12A"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewProject>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CorpusStore,
{
  let project = store.add_project(body).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(project)))
}

/// `GET /projects/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Project>, ApiError>
where
  S: CorpusStore,
{
  let project = store
    .get_project(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("project {id} not found")))?;
  Ok(Json(project))
}

// ─── Corpora ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CorpusBody {
  pub label: String,
}

/// `GET /corpora`
pub async fn corpora<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Corpus>>, ApiError>
where
  S: CorpusStore,
{
  let corpora = store.list_corpora().await.map_err(ApiError::from_store)?;
  Ok(Json(corpora))
}

/// `POST /corpora` — body: `{"label":"..."}`
pub async fn create_corpus<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CorpusBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CorpusStore,
{
  let corpus = store
    .add_corpus(body.label)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(corpus)))
}
