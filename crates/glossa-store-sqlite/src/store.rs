//! [`SqliteStore`] — the SQLite implementation of [`CorpusStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use glossa_core::{
  Error as DomainError,
  doc::{self, Doc, NewDoc, NewParticipation, Participation},
  policy::{self, Scope},
  project::{Corpus, NewProject, Project},
  reference::{NewPlace, Place, RefEntry, ReferenceKind, Role},
  speaker::{NewSpeaker, Speaker},
  store::CorpusStore,
  user::{NewUser, User},
  view::{DocOverview, GeoEntry, ParticipationRow, SpeakerProfile},
};

use crate::{
  Error, Result,
  encode::{RawDoc, RawDocOverview, RawParticipationRow, encode_dt},
  error::{delete_err, write_err},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Glossa corpus store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  pub(crate) async fn batch(&self, sql: &'static str) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(sql)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// The role of `user_id`, or `None` if the user does not exist.
  async fn user_role(&self, user_id: i64) -> Result<Option<Role>> {
    let label: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT r.label FROM users u
               JOIN enum_roles r ON r.id = u.role_id
               WHERE u.id = ?1",
              rusqlite::params![user_id],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    label
      .map(|l| Role::from_label(&l))
      .transpose()
      .map_err(Error::Domain)
  }

  /// Reject a supervisor whose role does not permit supervision.
  async fn check_supervisor(&self, supervisor_id: i64) -> Result<()> {
    match self.user_role(supervisor_id).await? {
      None => Err(DomainError::UserNotFound(supervisor_id).into()),
      Some(role) if !role.can_supervise() => {
        Err(DomainError::SupervisorNotEligible(supervisor_id).into())
      }
      Some(_) => Ok(()),
    }
  }
}

// ─── CorpusStore impl ────────────────────────────────────────────────────────

impl CorpusStore for SqliteStore {
  type Error = Error;

  // ── Reference data ────────────────────────────────────────────────────────

  async fn add_label(
    &self,
    kind: ReferenceKind,
    label: String,
  ) -> Result<RefEntry> {
    let sql = format!("INSERT INTO {} (label) VALUES (?1)", kind.table());
    let insert_label = label.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params![insert_label])?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_err(e, kind.table(), &label))?;

    Ok(RefEntry { id, label })
  }

  async fn list_labels(&self, kind: ReferenceKind) -> Result<Vec<RefEntry>> {
    let sql = format!("SELECT id, label FROM {} ORDER BY id", kind.table());

    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RefEntry {
              id:    row.get(0)?,
              label: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn rename_label(
    &self,
    kind: ReferenceKind,
    id: i64,
    label: String,
  ) -> Result<RefEntry> {
    let sql = format!("UPDATE {} SET label = ?1 WHERE id = ?2", kind.table());
    let update_label = label.clone();

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(&sql, rusqlite::params![update_label, id])?)
      })
      .await
      .map_err(|e| write_err(e, kind.table(), &label))?;

    if affected == 0 {
      return Err(
        DomainError::RowNotFound {
          table: kind.table(),
          id,
        }
        .into(),
      );
    }
    Ok(RefEntry { id, label })
  }

  async fn renumber_label(
    &self,
    kind: ReferenceKind,
    id: i64,
    new_id: i64,
  ) -> Result<RefEntry> {
    let sql = format!("UPDATE {} SET id = ?1 WHERE id = ?2", kind.table());

    let (affected, label) = self
      .conn
      .call(move |conn| {
        let affected = conn.execute(&sql, rusqlite::params![new_id, id])?;
        let label: Option<String> = conn
          .query_row(
            &format!("SELECT label FROM {} WHERE id = ?1", kind.table()),
            rusqlite::params![new_id],
            |row| row.get(0),
          )
          .optional()?;
        Ok((affected, label))
      })
      .await
      .map_err(|e| write_err(e, kind.table(), &new_id.to_string()))?;

    if affected == 0 {
      return Err(
        DomainError::RowNotFound {
          table: kind.table(),
          id,
        }
        .into(),
      );
    }

    Ok(RefEntry {
      id:    new_id,
      label: label.unwrap_or_default(),
    })
  }

  async fn delete_label(&self, kind: ReferenceKind, id: i64) -> Result<()> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", kind.table());

    let affected = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params![id])?))
      .await
      .map_err(|e| delete_err(e, kind.table()))?;

    if affected == 0 {
      return Err(
        DomainError::RowNotFound {
          table: kind.table(),
          id,
        }
        .into(),
      );
    }
    Ok(())
  }

  async fn add_place(&self, new: NewPlace) -> Result<Place> {
    let label = new.label.clone();
    let region_id = new.region_id;

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO enum_places (label, region_id) VALUES (?1, ?2)",
          rusqlite::params![new.label, new.region_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_err(e, "enum_places", &label))?;

    Ok(Place {
      id,
      label,
      region_id,
    })
  }

  async fn list_places(&self) -> Result<Vec<Place>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT id, label, region_id FROM enum_places ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Place {
              id:        row.get(0)?,
              label:     row.get(1)?,
              region_id: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn delete_place(&self, id: i64) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM enum_places WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await
      .map_err(|e| delete_err(e, "enum_places"))?;

    if affected == 0 {
      return Err(
        DomainError::RowNotFound {
          table: "enum_places",
          id,
        }
        .into(),
      );
    }
    Ok(())
  }

  async fn geo(&self) -> Result<Vec<GeoEntry>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT place_id, place, region FROM view_geo ORDER BY place_id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(GeoEntry {
              place_id: row.get(0)?,
              place:    row.get(1)?,
              region:   row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn add_user(&self, new: NewUser) -> Result<User> {
    let role_label: Option<String> = {
      let role_id = new.role_id;
      self
        .conn
        .call(move |conn| {
          Ok(
            conn
              .query_row(
                "SELECT label FROM enum_roles WHERE id = ?1",
                rusqlite::params![role_id],
                |row| row.get(0),
              )
              .optional()?,
          )
        })
        .await?
    };

    let Some(role_label) = role_label else {
      return Err(
        DomainError::RowNotFound {
          table: "enum_roles",
          id:    new.role_id,
        }
        .into(),
      );
    };
    let role = Role::from_label(&role_label).map_err(Error::Domain)?;
    new.validate(role).map_err(Error::Domain)?;

    if let Some(supervisor_id) = new.supervisor_id {
      self.check_supervisor(supervisor_id).await?;
    }

    let username = new.username.clone();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (username, role_id, badge, supervisor_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            new.username,
            new.role_id,
            new.badge,
            new.supervisor_id
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_err(e, "users", &username))?;

    self
      .get_user(id)
      .await?
      .ok_or_else(|| DomainError::UserNotFound(id).into())
  }

  async fn get_user(&self, id: i64) -> Result<Option<User>> {
    let user = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, username, role_id, badge, supervisor_id
               FROM users WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(User {
                  id:            row.get(0)?,
                  username:      row.get(1)?,
                  role_id:       row.get(2)?,
                  badge:         row.get(3)?,
                  supervisor_id: row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    Ok(user)
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, username, role_id, badge, supervisor_id
           FROM users ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(User {
              id:            row.get(0)?,
              username:      row.get(1)?,
              role_id:       row.get(2)?,
              badge:         row.get(3)?,
              supervisor_id: row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn set_supervisor(
    &self,
    id: i64,
    supervisor_id: Option<i64>,
  ) -> Result<User> {
    if self.get_user(id).await?.is_none() {
      return Err(DomainError::UserNotFound(id).into());
    }

    if let Some(supervisor_id) = supervisor_id {
      self.check_supervisor(supervisor_id).await?;

      // Walk up the proposed chain; finding `id` there would close a cycle.
      let cycle = self
        .conn
        .call(move |conn| {
          let mut seen = std::collections::HashSet::new();
          let mut current = Some(supervisor_id);
          while let Some(cursor) = current {
            if cursor == id {
              return Ok(true);
            }
            if !seen.insert(cursor) {
              // Pre-existing cycle above us; it does not involve `id`.
              return Ok(false);
            }
            current = conn
              .query_row(
                "SELECT supervisor_id FROM users WHERE id = ?1",
                rusqlite::params![cursor],
                |row| row.get::<_, Option<i64>>(0),
              )
              .optional()?
              .flatten();
          }
          Ok(false)
        })
        .await?;

      if cycle {
        return Err(DomainError::SupervisorCycle(id).into());
      }
    }

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE users SET supervisor_id = ?1 WHERE id = ?2",
          rusqlite::params![supervisor_id, id],
        )?;
        Ok(())
      })
      .await?;

    self
      .get_user(id)
      .await?
      .ok_or_else(|| DomainError::UserNotFound(id).into())
  }

  async fn visibility(&self, viewer_id: i64) -> Result<Scope> {
    let role = self
      .user_role(viewer_id)
      .await?
      .ok_or(DomainError::UserNotFound(viewer_id))?;

    let supervisees = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare("SELECT id FROM users WHERE supervisor_id = ?1")?;
        let ids = stmt
          .query_map(rusqlite::params![viewer_id], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(ids)
      })
      .await?;

    Ok(policy::scope_for(role, viewer_id, supervisees))
  }

  // ── Projects and corpora ──────────────────────────────────────────────────

  async fn add_project(&self, new: NewProject) -> Result<Project> {
    let label = new.label.clone();
    let badge = new.badge.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO projects (label, badge) VALUES (?1, ?2)",
          rusqlite::params![new.label, new.badge],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_err(e, "projects", &label))?;

    Ok(Project { id, label, badge })
  }

  async fn get_project(&self, id: i64) -> Result<Option<Project>> {
    let project = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, label, badge FROM projects WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(Project {
                  id:    row.get(0)?,
                  label: row.get(1)?,
                  badge: row.get(2)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    Ok(project)
  }

  async fn list_projects(&self) -> Result<Vec<Project>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, label, badge FROM projects ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Project {
              id:    row.get(0)?,
              label: row.get(1)?,
              badge: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn add_corpus(&self, label: String) -> Result<Corpus> {
    let insert_label = label.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO corpora (label) VALUES (?1)",
          rusqlite::params![insert_label],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_err(e, "corpora", &label))?;

    Ok(Corpus { id, label })
  }

  async fn list_corpora(&self) -> Result<Vec<Corpus>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, label FROM corpora ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Corpus {
              id:    row.get(0)?,
              label: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  // ── Speakers ──────────────────────────────────────────────────────────────

  async fn add_speaker(&self, new: NewSpeaker) -> Result<Speaker> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO speakers
             (user_id, project_id, nickname, gender_id, education_id,
              place_id, year)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            new.user_id,
            new.project_id,
            new.nickname,
            new.gender_id,
            new.education_id,
            new.place_id,
            new.year
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_err(e, "speakers", ""))?;

    self
      .get_speaker(id)
      .await?
      .ok_or_else(|| DomainError::SpeakerNotFound(id).into())
  }

  async fn get_speaker(&self, id: i64) -> Result<Option<Speaker>> {
    let speaker = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, user_id, project_id, nickname, gender_id,
                      education_id, place_id, year
               FROM speakers WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(Speaker {
                  id:           row.get(0)?,
                  user_id:      row.get(1)?,
                  project_id:   row.get(2)?,
                  nickname:     row.get(3)?,
                  gender_id:    row.get(4)?,
                  education_id: row.get(5)?,
                  place_id:     row.get(6)?,
                  year:         row.get(7)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    Ok(speaker)
  }

  async fn list_speakers(&self, scope: &Scope) -> Result<Vec<Speaker>> {
    let ids = match scope {
      Scope::All => None,
      Scope::Users(ids) if ids.is_empty() => return Ok(Vec::new()),
      Scope::Users(ids) => Some(ids.clone()),
    };

    let rows = self
      .conn
      .call(move |conn| {
        let base = "SELECT id, user_id, project_id, nickname, gender_id,
                           education_id, place_id, year
                    FROM speakers";
        let map = |row: &rusqlite::Row<'_>| {
          Ok(Speaker {
            id:           row.get(0)?,
            user_id:      row.get(1)?,
            project_id:   row.get(2)?,
            nickname:     row.get(3)?,
            gender_id:    row.get(4)?,
            education_id: row.get(5)?,
            place_id:     row.get(6)?,
            year:         row.get(7)?,
          })
        };

        let rows = if let Some(ids) = ids {
          let placeholders = vec!["?"; ids.len()].join(", ");
          let sql =
            format!("{base} WHERE user_id IN ({placeholders}) ORDER BY id");
          let mut stmt = conn.prepare(&sql)?;
          stmt
            .query_map(rusqlite::params_from_iter(ids), map)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&format!("{base} ORDER BY id"))?;
          stmt.query_map([], map)?.collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  // ── Docs ──────────────────────────────────────────────────────────────────

  async fn add_doc(&self, new: NewDoc) -> Result<Doc> {
    let date_str = encode_dt(new.date);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO docs (project_id, corpus_id, date, place_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![new.project_id, new.corpus_id, date_str, new.place_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_err(e, "docs", ""))?;

    self
      .get_doc(id)
      .await?
      .ok_or_else(|| DomainError::DocNotFound(id).into())
  }

  async fn get_doc(&self, id: i64) -> Result<Option<Doc>> {
    let raw = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, project_id, corpus_id, assigned_to_id,
                      assigned_by_id, done, date, place_id
               FROM docs WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(RawDoc {
                  id:             row.get(0)?,
                  project_id:     row.get(1)?,
                  corpus_id:      row.get(2)?,
                  assigned_to_id: row.get(3)?,
                  assigned_by_id: row.get(4)?,
                  done:           row.get(5)?,
                  date:           row.get(6)?,
                  place_id:       row.get(7)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawDoc::into_doc).transpose()
  }

  async fn list_docs(&self) -> Result<Vec<Doc>> {
    let raws = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, project_id, corpus_id, assigned_to_id, assigned_by_id,
                  done, date, place_id
           FROM docs ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawDoc {
              id:             row.get(0)?,
              project_id:     row.get(1)?,
              corpus_id:      row.get(2)?,
              assigned_to_id: row.get(3)?,
              assigned_by_id: row.get(4)?,
              done:           row.get(5)?,
              date:           row.get(6)?,
              place_id:       row.get(7)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDoc::into_doc).collect()
  }

  async fn assign_doc(
    &self,
    id: i64,
    assigned_to: i64,
    assigned_by: i64,
  ) -> Result<Doc> {
    if self.get_doc(id).await?.is_none() {
      return Err(DomainError::DocNotFound(id).into());
    }
    for user_id in [assigned_to, assigned_by] {
      if self.get_user(user_id).await?.is_none() {
        return Err(DomainError::UserNotFound(user_id).into());
      }
    }

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE docs
           SET assigned_to_id = ?1, assigned_by_id = ?2, done = 0
           WHERE id = ?3",
          rusqlite::params![assigned_to, assigned_by, id],
        )?;
        Ok(())
      })
      .await?;

    self
      .get_doc(id)
      .await?
      .ok_or_else(|| DomainError::DocNotFound(id).into())
  }

  async fn set_done(&self, id: i64, done: bool) -> Result<Doc> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE docs SET done = ?1 WHERE id = ?2",
          rusqlite::params![done, id],
        )?)
      })
      .await?;

    if affected == 0 {
      return Err(DomainError::DocNotFound(id).into());
    }

    self
      .get_doc(id)
      .await?
      .ok_or_else(|| DomainError::DocNotFound(id).into())
  }

  async fn document_labels(&self) -> Result<Vec<String>> {
    let pairs = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT d.id, p.badge FROM docs d
           JOIN projects p ON p.id = d.project_id
           ORDER BY d.id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(
      pairs
        .into_iter()
        .map(|(id, badge)| doc::document_label(&badge, id))
        .collect(),
    )
  }

  // ── Participation ─────────────────────────────────────────────────────────

  async fn add_participation(
    &self,
    new: NewParticipation,
  ) -> Result<Participation> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO doc2speaker (doc_id, speaker_id, words)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![new.doc_id, new.speaker_id, new.words],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_err(e, "doc2speaker", ""))?;

    Ok(Participation {
      id,
      doc_id:     new.doc_id,
      speaker_id: new.speaker_id,
      words:      new.words,
    })
  }

  async fn list_participations(&self) -> Result<Vec<Participation>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, doc_id, speaker_id, words FROM doc2speaker ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Participation {
              id:         row.get(0)?,
              doc_id:     row.get(1)?,
              speaker_id: row.get(2)?,
              words:      row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  async fn speaker_profiles(&self) -> Result<Vec<SpeakerProfile>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, user, project, nickname, gender, education, place,
                  region, year
           FROM view_speakers ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(SpeakerProfile {
              id:        row.get(0)?,
              user:      row.get(1)?,
              project:   row.get(2)?,
              nickname:  row.get(3)?,
              gender:    row.get(4)?,
              education: row.get(5)?,
              place:     row.get(6)?,
              region:    row.get(7)?,
              year:      row.get(8)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn doc_overviews(&self) -> Result<Vec<DocOverview>> {
    let raws = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, project, badge, corpus, assigned_to, assigned_by, done,
                  date, place, region
           FROM view_docs ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawDocOverview {
              id:          row.get(0)?,
              project:     row.get(1)?,
              badge:       row.get(2)?,
              corpus:      row.get(3)?,
              assigned_to: row.get(4)?,
              assigned_by: row.get(5)?,
              done:        row.get(6)?,
              date:        row.get(7)?,
              place:       row.get(8)?,
              region:      row.get(9)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDocOverview::into_overview).collect()
  }

  async fn participations_view(&self) -> Result<Vec<ParticipationRow>> {
    let raws = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, doc_id, speaker_id, words, nickname, gender, education,
                  age, speaker_place, speaker_region, project, corpus,
                  doc_place, doc_region, date
           FROM view_doc2speaker ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawParticipationRow {
              id:             row.get(0)?,
              doc_id:         row.get(1)?,
              speaker_id:     row.get(2)?,
              words:          row.get(3)?,
              nickname:       row.get(4)?,
              gender:         row.get(5)?,
              education:      row.get(6)?,
              age:            row.get(7)?,
              speaker_place:  row.get(8)?,
              speaker_region: row.get(9)?,
              project:        row.get(10)?,
              corpus:         row.get(11)?,
              doc_place:      row.get(12)?,
              doc_region:     row.get(13)?,
              date:           row.get(14)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawParticipationRow::into_row)
      .collect()
  }
}
