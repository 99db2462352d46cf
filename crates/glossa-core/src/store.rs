//! The `CorpusStore` trait and supporting error plumbing.
//!
//! The trait is implemented by storage backends (e.g. `glossa-store-sqlite`).
//! Higher layers (`glossa-api`, `glossa-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  doc::{Doc, NewDoc, NewParticipation, Participation},
  policy::Scope,
  project::{Corpus, NewProject, Project},
  reference::{NewPlace, Place, RefEntry, ReferenceKind},
  speaker::{NewSpeaker, Speaker},
  user::{NewUser, User},
  view::{DocOverview, GeoEntry, ParticipationRow, SpeakerProfile},
};

// ─── Error classification ────────────────────────────────────────────────────

/// Implemented by backend error types so callers can recover the domain
/// classification of a failure without knowing the backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// The domain error behind this failure, if it has one. Engine-internal
  /// failures (I/O, corruption) return `None`.
  fn as_domain(&self) -> Option<&crate::Error>;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Glossa corpus store backend.
///
/// Reference rows are seeded at bootstrap and effectively immutable after;
/// entity rows are created and updated in place. Nothing is ever deleted
/// except reference rows with no remaining referents. The derived views are
/// recomputed from current table state on every read.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CorpusStore: Send + Sync {
  type Error: StoreError;

  // ── Reference data ────────────────────────────────────────────────────

  /// Insert a label into one of the flat reference tables.
  fn add_label(
    &self,
    kind: ReferenceKind,
    label: String,
  ) -> impl Future<Output = Result<RefEntry, Self::Error>> + Send + '_;

  fn list_labels(
    &self,
    kind: ReferenceKind,
  ) -> impl Future<Output = Result<Vec<RefEntry>, Self::Error>> + Send + '_;

  /// Change a label in place. The new text propagates to referents
  /// automatically (they reference by id).
  fn rename_label(
    &self,
    kind: ReferenceKind,
    id: i64,
    label: String,
  ) -> impl Future<Output = Result<RefEntry, Self::Error>> + Send + '_;

  /// Change a row's id. Referencing rows follow via `ON UPDATE CASCADE`.
  fn renumber_label(
    &self,
    kind: ReferenceKind,
    id: i64,
    new_id: i64,
  ) -> impl Future<Output = Result<RefEntry, Self::Error>> + Send + '_;

  /// Delete a reference row. Rejected with
  /// [`Error::ReferencedRowInUse`](crate::Error::ReferencedRowInUse) while
  /// any referent exists.
  fn delete_label(
    &self,
    kind: ReferenceKind,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn add_place(
    &self,
    new: NewPlace,
  ) -> impl Future<Output = Result<Place, Self::Error>> + Send + '_;

  fn list_places(
    &self,
  ) -> impl Future<Output = Result<Vec<Place>, Self::Error>> + Send + '_;

  fn delete_place(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Read `view_geo`: every place with its owning region's label.
  fn geo(
    &self,
  ) -> impl Future<Output = Result<Vec<GeoEntry>, Self::Error>> + Send + '_;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Create a user. Enforces what the schema cannot: supervisors must carry
  /// a badge, and `supervisor_id` must reference a user whose role permits
  /// supervision.
  fn add_user(
    &self,
    new: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// Point a user at a new supervisor (or clear it with `None`).
  ///
  /// Walks the supervisor chain and rejects assignments that would close a
  /// cycle, since the storage layer cannot express acyclicity.
  fn set_supervisor(
    &self,
    id: i64,
    supervisor_id: Option<i64>,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// The visibility scope for a viewer: own rows for regular users, own
  /// plus direct supervisees' for supervisors, everything for admins.
  fn visibility(
    &self,
    viewer_id: i64,
  ) -> impl Future<Output = Result<Scope, Self::Error>> + Send + '_;

  // ── Projects and corpora ──────────────────────────────────────────────

  fn add_project(
    &self,
    new: NewProject,
  ) -> impl Future<Output = Result<Project, Self::Error>> + Send + '_;

  fn get_project(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Project>, Self::Error>> + Send + '_;

  fn list_projects(
    &self,
  ) -> impl Future<Output = Result<Vec<Project>, Self::Error>> + Send + '_;

  fn add_corpus(
    &self,
    label: String,
  ) -> impl Future<Output = Result<Corpus, Self::Error>> + Send + '_;

  fn list_corpora(
    &self,
  ) -> impl Future<Output = Result<Vec<Corpus>, Self::Error>> + Send + '_;

  // ── Speakers ──────────────────────────────────────────────────────────

  fn add_speaker(
    &self,
    new: NewSpeaker,
  ) -> impl Future<Output = Result<Speaker, Self::Error>> + Send + '_;

  fn get_speaker(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Speaker>, Self::Error>> + Send + '_;

  /// List speakers whose owning user falls inside `scope`.
  fn list_speakers<'a>(
    &'a self,
    scope: &'a Scope,
  ) -> impl Future<Output = Result<Vec<Speaker>, Self::Error>> + Send + 'a;

  // ── Docs ──────────────────────────────────────────────────────────────

  /// Create a document: unassigned, `done` NULL.
  fn add_doc(
    &self,
    new: NewDoc,
  ) -> impl Future<Output = Result<Doc, Self::Error>> + Send + '_;

  fn get_doc(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Doc>, Self::Error>> + Send + '_;

  fn list_docs(
    &self,
  ) -> impl Future<Output = Result<Vec<Doc>, Self::Error>> + Send + '_;

  /// Assign a document to a reviewer. Moves `done` from NULL to false.
  fn assign_doc(
    &self,
    id: i64,
    assigned_to: i64,
    assigned_by: i64,
  ) -> impl Future<Output = Result<Doc, Self::Error>> + Send + '_;

  /// Mark a document complete (`true`) or back in progress (`false`).
  fn set_done(
    &self,
    id: i64,
    done: bool,
  ) -> impl Future<Output = Result<Doc, Self::Error>> + Send + '_;

  /// External labels of all documents, derived from project badges.
  fn document_labels(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;

  // ── Participation ─────────────────────────────────────────────────────

  fn add_participation(
    &self,
    new: NewParticipation,
  ) -> impl Future<Output = Result<Participation, Self::Error>> + Send + '_;

  fn list_participations(
    &self,
  ) -> impl Future<Output = Result<Vec<Participation>, Self::Error>> + Send + '_;

  // ── Derived views ─────────────────────────────────────────────────────

  /// Read `view_speakers`.
  fn speaker_profiles(
    &self,
  ) -> impl Future<Output = Result<Vec<SpeakerProfile>, Self::Error>> + Send + '_;

  /// Read `view_docs`.
  fn doc_overviews(
    &self,
  ) -> impl Future<Output = Result<Vec<DocOverview>, Self::Error>> + Send + '_;

  /// Read `view_doc2speaker`, including the derived age and education
  /// brackets.
  fn participations_view(
    &self,
  ) -> impl Future<Output = Result<Vec<ParticipationRow>, Self::Error>> + Send + '_;
}
