//! JSON REST API for Glossa.
//!
//! Exposes an axum [`Router`] backed by any [`glossa_core::store::CorpusStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", glossa_api::api_router(store.clone()))
//! ```

pub mod docs;
pub mod documents;
pub mod error;
pub mod projects;
pub mod reference;
pub mod speakers;
pub mod users;
pub mod views;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, put},
};
use glossa_core::store::CorpusStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CorpusStore + 'static,
{
  Router::new()
    // The externally promised contract: document labels under "data".
    .route("/documents", get(documents::list::<S>))
    // Reference data
    .route(
      "/reference/{kind}",
      get(reference::list::<S>).post(reference::create::<S>),
    )
    .route(
      "/reference/{kind}/{id}",
      put(reference::rename::<S>).delete(reference::remove::<S>),
    )
    .route(
      "/places",
      get(reference::places::<S>).post(reference::create_place::<S>),
    )
    .route("/places/{id}", delete(reference::remove_place::<S>))
    .route("/geo", get(reference::geo::<S>))
    // Users
    .route("/users", get(users::list::<S>).post(users::create::<S>))
    .route("/users/{id}", get(users::get_one::<S>))
    .route("/users/{id}/supervisor", put(users::set_supervisor::<S>))
    .route("/users/{id}/visibility", get(users::visibility::<S>))
    // Projects and corpora
    .route("/projects", get(projects::list::<S>).post(projects::create::<S>))
    .route("/projects/{id}", get(projects::get_one::<S>))
    .route(
      "/corpora",
      get(projects::corpora::<S>).post(projects::create_corpus::<S>),
    )
    // Speakers
    .route("/speakers", get(speakers::list::<S>).post(speakers::create::<S>))
    .route("/speakers/{id}", get(speakers::get_one::<S>))
    // Docs and participation
    .route("/docs", get(docs::list::<S>).post(docs::create::<S>))
    .route("/docs/{id}", get(docs::get_one::<S>))
    .route("/docs/{id}/assignment", put(docs::assign::<S>))
    .route("/docs/{id}/done", put(docs::set_done::<S>))
    .route(
      "/participations",
      get(docs::participations::<S>).post(docs::add_participation::<S>),
    )
    // Derived views
    .route("/views/speakers", get(views::speakers::<S>))
    .route("/views/docs", get(views::docs::<S>))
    .route("/views/participations", get(views::participations::<S>))
    .with_state(store)
}
