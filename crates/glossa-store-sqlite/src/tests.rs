//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{DateTime, TimeZone, Utc};
use glossa_core::{
  Error as DomainError,
  doc::{NewDoc, NewParticipation},
  policy::Scope,
  reference::{NewPlace, ReferenceKind},
  speaker::NewSpeaker,
  store::CorpusStore,
  user::NewUser,
  view::{AgeBracket, EducationBracket},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  let s = SqliteStore::open_in_memory().await.expect("in-memory store");
  s.seed_reference().await.expect("reference seed");
  s
}

async fn demo() -> SqliteStore {
  let s = SqliteStore::open_in_memory().await.expect("in-memory store");
  s.seed_demo().await.expect("demo seed");
  s
}

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn new_user(username: &str, role_id: i64) -> NewUser {
  NewUser {
    username:      username.into(),
    role_id,
    badge:         None,
    supervisor_id: None,
  }
}

// ─── Reference data ──────────────────────────────────────────────────────────

#[tokio::test]
async fn reference_seed_is_idempotent() {
  let s = store().await;
  s.seed_reference().await.unwrap();

  let roles = s.list_labels(ReferenceKind::Roles).await.unwrap();
  assert_eq!(roles.len(), 3);
  assert_eq!(roles[0].label, "regular");
}

#[tokio::test]
async fn add_and_list_labels() {
  let s = store().await;

  let entry = s
    .add_label(ReferenceKind::Regions, "Slovensko".into())
    .await
    .unwrap();

  let regions = s.list_labels(ReferenceKind::Regions).await.unwrap();
  assert_eq!(regions.len(), 4);
  assert!(regions.iter().any(|r| r.id == entry.id && r.label == "Slovensko"));
}

#[tokio::test]
async fn duplicate_label_rejected() {
  let s = store().await;

  let err = s
    .add_label(ReferenceKind::Regions, "Čechy".into())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Domain(DomainError::DuplicateLabel(_))));
}

#[tokio::test]
async fn rename_label_propagates_to_geo() {
  let s = store().await;

  s.rename_label(ReferenceKind::Regions, 1, "Bohemia".into())
    .await
    .unwrap();

  let geo = s.geo().await.unwrap();
  let praha = geo.iter().find(|g| g.place == "Praha").unwrap();
  assert_eq!(praha.region, "Bohemia");
}

#[tokio::test]
async fn rename_missing_row_errors() {
  let s = store().await;

  let err = s
    .rename_label(ReferenceKind::Regions, 99, "nowhere".into())
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Domain(DomainError::RowNotFound { table: "enum_regions", id: 99 })
  ));
}

#[tokio::test]
async fn renumber_region_cascades_to_places() {
  let s = store().await;

  // Čechy (1) → 9; Praha and Plzeň must follow.
  let entry = s
    .renumber_label(ReferenceKind::Regions, 1, 9)
    .await
    .unwrap();
  assert_eq!(entry.id, 9);
  assert_eq!(entry.label, "Čechy");

  let places = s.list_places().await.unwrap();
  let praha = places.iter().find(|p| p.label == "Praha").unwrap();
  let plzen = places.iter().find(|p| p.label == "Plzeň").unwrap();
  assert_eq!(praha.region_id, 9);
  assert_eq!(plzen.region_id, 9);

  // The join still resolves after the cascade.
  let geo = s.geo().await.unwrap();
  assert!(geo.iter().any(|g| g.place == "Praha" && g.region == "Čechy"));
}

#[tokio::test]
async fn delete_referenced_region_fails() {
  let s = store().await;

  let err = s
    .delete_label(ReferenceKind::Regions, 1)
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Domain(DomainError::ReferencedRowInUse("enum_regions"))
  ));
}

#[tokio::test]
async fn delete_unreferenced_label_works() {
  let s = store().await;

  let entry = s
    .add_label(ReferenceKind::Regions, "Slovensko".into())
    .await
    .unwrap();
  s.delete_label(ReferenceKind::Regions, entry.id).await.unwrap();

  let regions = s.list_labels(ReferenceKind::Regions).await.unwrap();
  assert!(!regions.iter().any(|r| r.label == "Slovensko"));
}

#[tokio::test]
async fn place_requires_existing_region() {
  let s = store().await;

  let err = s
    .add_place(NewPlace {
      label:     "Atlantida".into(),
      region_id: 999,
    })
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Domain(DomainError::MissingReference("enum_places"))
  ));
}

#[tokio::test]
async fn delete_place_in_use_fails() {
  let s = demo().await;

  // Praha is referenced by both demo speakers and the demo doc.
  let err = s.delete_place(1).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Domain(DomainError::ReferencedRowInUse("enum_places"))
  ));
}

#[tokio::test]
async fn geo_resolves_every_place() {
  let s = store().await;

  let geo = s.geo().await.unwrap();
  assert_eq!(geo.len(), 4);
  assert!(geo.iter().any(|g| g.place == "Brno" && g.region == "Morava"));
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn supervisor_requires_badge() {
  let s = store().await;

  let err = s.add_user(new_user("eva", 2)).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Domain(DomainError::MissingRequiredField("badge"))
  ));
}

#[tokio::test]
async fn regular_user_needs_no_badge() {
  let s = store().await;

  let user = s.add_user(new_user("eva", 1)).await.unwrap();
  assert_eq!(user.username, "eva");
  assert_eq!(user.badge, None);

  let fetched = s.get_user(user.id).await.unwrap().unwrap();
  assert_eq!(fetched, user);
}

#[tokio::test]
async fn unknown_role_rejected() {
  let s = store().await;

  let err = s.add_user(new_user("eva", 99)).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Domain(DomainError::RowNotFound { table: "enum_roles", id: 99 })
  ));
}

#[tokio::test]
async fn supervisor_must_have_supervising_role() {
  let s = demo().await;

  // karel (3) is a regular user and cannot supervise.
  let mut new = new_user("eva", 1);
  new.supervisor_id = Some(3);
  let err = s.add_user(new).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Domain(DomainError::SupervisorNotEligible(3))
  ));
}

#[tokio::test]
async fn duplicate_username_rejected() {
  let s = demo().await;

  let err = s.add_user(new_user("karel", 1)).await.unwrap_err();
  assert!(matches!(err, Error::Domain(DomainError::DuplicateLabel(_))));
}

#[tokio::test]
async fn duplicate_badge_rejected() {
  let s = demo().await;

  let mut new = new_user("eva", 2);
  new.badge = Some("DN".into());
  let err = s.add_user(new).await.unwrap_err();
  assert!(matches!(err, Error::Domain(DomainError::DuplicateLabel(_))));
}

#[tokio::test]
async fn self_supervision_rejected() {
  let s = demo().await;

  let err = s.set_supervisor(2, Some(2)).await.unwrap_err();
  assert!(matches!(err, Error::Domain(DomainError::SupervisorCycle(2))));
}

#[tokio::test]
async fn supervisor_cycle_rejected() {
  let s = demo().await;

  let mut eva = new_user("eva", 2);
  eva.badge = Some("EV".into());
  eva.supervisor_id = Some(2); // dana
  let eva = s.add_user(eva).await.unwrap();

  // dana → eva → dana would close the loop.
  let err = s.set_supervisor(2, Some(eva.id)).await.unwrap_err();
  assert!(matches!(err, Error::Domain(DomainError::SupervisorCycle(2))));
}

#[tokio::test]
async fn set_supervisor_updates_chain() {
  let s = demo().await;

  let user = s.set_supervisor(3, Some(1)).await.unwrap();
  assert_eq!(user.supervisor_id, Some(1));

  let cleared = s.set_supervisor(3, None).await.unwrap();
  assert_eq!(cleared.supervisor_id, None);
}

// ─── Visibility ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn admin_sees_all() {
  let s = demo().await;
  assert_eq!(s.visibility(1).await.unwrap(), Scope::All);
}

#[tokio::test]
async fn supervisor_sees_self_and_supervisees() {
  let s = demo().await;
  assert_eq!(s.visibility(2).await.unwrap(), Scope::Users(vec![2, 3]));
}

#[tokio::test]
async fn regular_sees_only_self() {
  let s = demo().await;
  assert_eq!(s.visibility(3).await.unwrap(), Scope::Users(vec![3]));
}

#[tokio::test]
async fn visibility_of_unknown_user_errors() {
  let s = demo().await;
  let err = s.visibility(99).await.unwrap_err();
  assert!(matches!(err, Error::Domain(DomainError::UserNotFound(99))));
}

#[tokio::test]
async fn list_speakers_respects_scope() {
  let s = demo().await;

  // Both demo speakers belong to karel (3); dana (2) supervises him.
  let all = s.list_speakers(&Scope::All).await.unwrap();
  assert_eq!(all.len(), 2);

  let karel = s.visibility(3).await.unwrap();
  assert_eq!(s.list_speakers(&karel).await.unwrap().len(), 2);

  let dana = s.visibility(2).await.unwrap();
  assert_eq!(s.list_speakers(&dana).await.unwrap().len(), 2);

  let admin_only = Scope::Users(vec![1]);
  assert!(s.list_speakers(&admin_only).await.unwrap().is_empty());
}

// ─── Docs ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn new_doc_starts_unassigned() {
  let s = demo().await;

  let doc = s
    .add_doc(NewDoc {
      project_id: 1,
      corpus_id:  None,
      date:       date(2020, 6, 15),
      place_id:   3,
    })
    .await
    .unwrap();

  assert_eq!(doc.done, None);
  assert_eq!(doc.assigned_to_id, None);
  assert_eq!(doc.assigned_by_id, None);
  assert_eq!(doc.date, date(2020, 6, 15));
}

#[tokio::test]
async fn assign_doc_moves_to_in_progress() {
  let s = demo().await;

  let doc = s.assign_doc(1, 3, 2).await.unwrap();
  assert_eq!(doc.assigned_to_id, Some(3));
  assert_eq!(doc.assigned_by_id, Some(2));
  assert_eq!(doc.done, Some(false));
}

#[tokio::test]
async fn set_done_completes_doc() {
  let s = demo().await;

  s.assign_doc(1, 3, 2).await.unwrap();
  let doc = s.set_done(1, true).await.unwrap();
  assert_eq!(doc.done, Some(true));
}

#[tokio::test]
async fn assign_to_unknown_user_errors() {
  let s = demo().await;

  let err = s.assign_doc(1, 99, 2).await.unwrap_err();
  assert!(matches!(err, Error::Domain(DomainError::UserNotFound(99))));
}

#[tokio::test]
async fn set_done_on_unknown_doc_errors() {
  let s = demo().await;

  let err = s.set_done(99, true).await.unwrap_err();
  assert!(matches!(err, Error::Domain(DomainError::DocNotFound(99))));
}

#[tokio::test]
async fn document_labels_derive_from_badge() {
  let s = demo().await;

  assert_eq!(s.document_labels().await.unwrap(), vec!["12A001"]);

  s.add_doc(NewDoc {
    project_id: 1,
    corpus_id:  None,
    date:       date(2019, 4, 2),
    place_id:   1,
  })
  .await
  .unwrap();

  assert_eq!(s.document_labels().await.unwrap(), vec!["12A001", "12A002"]);
}

// ─── Participation ───────────────────────────────────────────────────────────

#[tokio::test]
async fn participation_words_may_be_unknown() {
  let s = demo().await;

  let rows = s.list_participations().await.unwrap();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0].words, Some(1000));
  assert_eq!(rows[1].words, None);
}

#[tokio::test]
async fn participation_requires_existing_doc() {
  let s = demo().await;

  let err = s
    .add_participation(NewParticipation {
      doc_id:     99,
      speaker_id: 1,
      words:      None,
    })
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Domain(DomainError::MissingReference("doc2speaker"))
  ));
}

// ─── Derived views ───────────────────────────────────────────────────────────

#[tokio::test]
async fn demo_participation_view_has_two_rows() {
  let s = demo().await;

  let rows = s.participations_view().await.unwrap();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0].speaker_id, 1);
  assert_eq!(rows[1].speaker_id, 2);
}

#[tokio::test]
async fn age_bracket_is_relative_to_doc_date() {
  let s = demo().await;

  let rows = s.participations_view().await.unwrap();

  // jirka, born 1988: 2019 − 1988 = 31 < 35.
  let jirka = rows.iter().find(|r| r.nickname == "jirka").unwrap();
  assert_eq!(jirka.age, AgeBracket::Younger);

  // marie, born 1984: 2019 − 1984 = 35 — the boundary lands on "older".
  let marie = rows.iter().find(|r| r.nickname == "marie").unwrap();
  assert_eq!(marie.age, AgeBracket::Older);
}

#[tokio::test]
async fn education_bracket_collapses_tiers() {
  let s = demo().await;

  let rows = s.participations_view().await.unwrap();
  let jirka = rows.iter().find(|r| r.nickname == "jirka").unwrap();
  let marie = rows.iter().find(|r| r.nickname == "marie").unwrap();

  // Only the top tier (VŠ) maps to "higher".
  assert_eq!(jirka.education, EducationBracket::Higher);
  assert_eq!(marie.education, EducationBracket::Lower);
}

#[tokio::test]
async fn participation_view_combines_doc_and_speaker() {
  let s = demo().await;

  let rows = s.participations_view().await.unwrap();
  let row = rows.iter().find(|r| r.doc_id == 1 && r.speaker_id == 1).unwrap();

  assert_eq!(row.words, Some(1000));
  assert_eq!(row.nickname, "jirka");
  assert_eq!(row.gender, "muž");
  assert_eq!(row.project, "nahrávky Praha 2019");
  assert_eq!(row.corpus.as_deref(), Some("ortofon"));
  assert_eq!(row.doc_place, "Praha");
  assert_eq!(row.doc_region, "Čechy");
  assert_eq!(row.speaker_place, "Praha");
  assert_eq!(row.speaker_region, "Čechy");
  assert_eq!(row.date, date(2019, 3, 1));
}

#[tokio::test]
async fn speaker_profiles_resolve_labels() {
  let s = demo().await;

  let profiles = s.speaker_profiles().await.unwrap();
  assert_eq!(profiles.len(), 2);

  let jirka = profiles.iter().find(|p| p.nickname == "jirka").unwrap();
  assert_eq!(jirka.user, "karel");
  assert_eq!(jirka.project, "nahrávky Praha 2019");
  assert_eq!(jirka.gender, "muž");
  assert_eq!(jirka.education, "VŠ");
  assert_eq!(jirka.place, "Praha");
  assert_eq!(jirka.region, "Čechy");
  assert_eq!(jirka.year, 1988);
}

#[tokio::test]
async fn doc_overviews_join_assignments() {
  let s = demo().await;
  s.assign_doc(1, 3, 2).await.unwrap();

  let overviews = s.doc_overviews().await.unwrap();
  assert_eq!(overviews.len(), 1);

  let doc = &overviews[0];
  assert_eq!(doc.project, "nahrávky Praha 2019");
  assert_eq!(doc.badge, "12A");
  assert_eq!(doc.corpus.as_deref(), Some("ortofon"));
  assert_eq!(doc.assigned_to.as_deref(), Some("karel"));
  assert_eq!(doc.assigned_by.as_deref(), Some("dana"));
  assert_eq!(doc.done, Some(false));
  assert_eq!(doc.place, "Praha");
}

#[tokio::test]
async fn views_recompute_on_every_read() {
  let s = demo().await;

  let before = s.speaker_profiles().await.unwrap();
  assert_eq!(before[0].gender, "muž");

  // No materialization: a reference rename is visible on the next read.
  s.rename_label(ReferenceKind::Genders, 1, "mužský".into())
    .await
    .unwrap();

  let after = s.speaker_profiles().await.unwrap();
  assert_eq!(after[0].gender, "mužský");
}

#[tokio::test]
async fn scoped_speakers_follow_new_speaker() {
  let s = demo().await;

  // A speaker recruited by dana herself is invisible to karel.
  s.add_speaker(NewSpeaker {
    user_id:      2,
    project_id:   1,
    nickname:     "petr".into(),
    gender_id:    1,
    education_id: 1,
    place_id:     3,
    year:         1990,
  })
  .await
  .unwrap();

  let karel = s.visibility(3).await.unwrap();
  assert_eq!(s.list_speakers(&karel).await.unwrap().len(), 2);

  let dana = s.visibility(2).await.unwrap();
  assert_eq!(s.list_speakers(&dana).await.unwrap().len(), 3);
}
