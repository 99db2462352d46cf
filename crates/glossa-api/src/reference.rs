//! Handlers for reference-data endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/reference/{kind}` | kind ∈ roles, genders, educations, regions |
//! | `POST`   | `/reference/{kind}` | Body: `{"label":"..."}` |
//! | `PUT`    | `/reference/{kind}/{id}` | Rename; cascades to referents |
//! | `DELETE` | `/reference/{kind}/{id}` | 409 while referents exist |
//! | `GET`/`POST` | `/places` | |
//! | `DELETE` | `/places/{id}` | |
//! | `GET`    | `/geo` | Place → region lookup |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use glossa_core::{
  reference::{NewPlace, Place, RefEntry, ReferenceKind},
  store::CorpusStore,
  view::GeoEntry,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LabelBody {
  pub label: String,
}

/// `GET /reference/{kind}`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Path(kind): Path<ReferenceKind>,
) -> Result<Json<Vec<RefEntry>>, ApiError>
where
  S: CorpusStore,
{
  let entries = store
    .list_labels(kind)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(entries))
}

/// `POST /reference/{kind}` — body: `{"label":"..."}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Path(kind): Path<ReferenceKind>,
  Json(body): Json<LabelBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CorpusStore,
{
  let entry = store
    .add_label(kind, body.label)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(entry)))
}

/// `PUT /reference/{kind}/{id}` — body: `{"label":"..."}`
pub async fn rename<S>(
  State(store): State<Arc<S>>,
  Path((kind, id)): Path<(ReferenceKind, i64)>,
  Json(body): Json<LabelBody>,
) -> Result<Json<RefEntry>, ApiError>
where
  S: CorpusStore,
{
  let entry = store
    .rename_label(kind, id, body.label)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(entry))
}

/// `DELETE /reference/{kind}/{id}`
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path((kind, id)): Path<(ReferenceKind, i64)>,
) -> Result<StatusCode, ApiError>
where
  S: CorpusStore,
{
  store
    .delete_label(kind, id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Places ───────────────────────────────────────────────────────────────────

/// `GET /places`
pub async fn places<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Place>>, ApiError>
where
  S: CorpusStore,
{
  let places = store.list_places().await.map_err(ApiError::from_store)?;
  Ok(Json(places))
}

/// `POST /places` — body: `{"label":"...","region_id":1}`
pub async fn create_place<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewPlace>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CorpusStore,
{
  let place = store.add_place(body).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(place)))
}

/// `DELETE /places/{id}`
pub async fn remove_place<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: CorpusStore,
{
  store.delete_place(id).await.map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Geo ──────────────────────────────────────────────────────────────────────

/// `GET /geo`
pub async fn geo<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<GeoEntry>>, ApiError>
where
  S: CorpusStore,
{
  let entries = store.geo().await.map_err(ApiError::from_store)?;
  Ok(Json(entries))
}
