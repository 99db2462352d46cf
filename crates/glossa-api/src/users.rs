//! Handlers for `/users` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/users` | |
//! | `POST` | `/users` | 400 for badge-less supervisors |
//! | `GET`  | `/users/{id}` | 404 if not found |
//! | `PUT`  | `/users/{id}/supervisor` | 400 on cycles |
//! | `GET`  | `/users/{id}/visibility` | The viewer's policy scope |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use glossa_core::{
  policy::Scope,
  store::CorpusStore,
  user::{NewUser, User},
};
use serde::Deserialize;

use crate::error::ApiError;

/// `GET /users`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<User>>, ApiError>
where
  S: CorpusStore,
{
  let users = store.list_users().await.map_err(ApiError::from_store)?;
  Ok(Json(users))
}

/// `POST /users`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewUser>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CorpusStore,
{
  let user = store.add_user(body).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<User>, ApiError>
where
  S: CorpusStore,
{
  let user = store
    .get_user(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("user {id} not found")))?;
  Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct SupervisorBody {
  pub supervisor_id: Option<i64>,
}

/// `PUT /users/{id}/supervisor` — body: `{"supervisor_id":2}` or
/// `{"supervisor_id":null}` to clear.
pub async fn set_supervisor<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<SupervisorBody>,
) -> Result<Json<User>, ApiError>
where
  S: CorpusStore,
{
  let user = store
    .set_supervisor(id, body.supervisor_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(user))
}

/// `GET /users/{id}/visibility`
pub async fn visibility<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Scope>, ApiError>
where
  S: CorpusStore,
{
  let scope = store.visibility(id).await.map_err(ApiError::from_store)?;
  Ok(Json(scope))
}
