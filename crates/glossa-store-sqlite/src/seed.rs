//! Seed data: the reference vocabulary and a small demo fixture.
//!
//! Reference seeding runs at every server startup; `INSERT OR IGNORE` keeps
//! it idempotent and leaves manually added rows alone.

use crate::{Result, SqliteStore};

/// The bootstrap reference vocabulary.
const REFERENCE_SEED: &str = "
INSERT OR IGNORE INTO enum_roles (id, label) VALUES
    (1, 'regular'),
    (2, 'supervisor'),
    (3, 'admin');

INSERT OR IGNORE INTO enum_genders (id, label) VALUES
    (1, 'muž'),
    (2, 'žena');

INSERT OR IGNORE INTO enum_educations (id, label) VALUES
    (1, 'ZŠ'),
    (2, 'SŠ bez maturity'),
    (3, 'SŠ s maturitou'),
    (4, 'VŠ');

INSERT OR IGNORE INTO enum_regions (id, label) VALUES
    (1, 'Čechy'),
    (2, 'Morava'),
    (3, 'Slezsko');

INSERT OR IGNORE INTO enum_places (id, label, region_id) VALUES
    (1, 'Praha',   1),
    (2, 'Plzeň',   1),
    (3, 'Brno',    2),
    (4, 'Ostrava', 3);
";

/// A small working data set: one project, one corpus, one document dated
/// 2019-03-01 with two participating speakers born 1988 and 1984 — one on
/// each side of the 35-year age-bracket boundary.
const DEMO_SEED: &str = "
INSERT OR IGNORE INTO users (id, username, role_id, badge, supervisor_id) VALUES
    (1, 'admin', 3, NULL, NULL),
    (2, 'dana',  2, 'DN', NULL),
    (3, 'karel', 1, NULL, 2);

INSERT OR IGNORE INTO projects (id, label, badge) VALUES
    (1, 'nahrávky Praha 2019', '12A');

INSERT OR IGNORE INTO corpora (id, label) VALUES
    (1, 'ortofon');

INSERT OR IGNORE INTO speakers
    (id, user_id, project_id, nickname, gender_id, education_id, place_id, year)
VALUES
    (1, 3, 1, 'jirka', 1, 4, 1, 1988),
    (2, 3, 1, 'marie', 2, 3, 1, 1984);

INSERT OR IGNORE INTO docs
    (id, project_id, corpus_id, assigned_to_id, assigned_by_id, done, date, place_id)
VALUES
    (1, 1, 1, NULL, NULL, NULL, '2019-03-01T00:00:00+00:00', 1);

INSERT OR IGNORE INTO doc2speaker (id, doc_id, speaker_id, words) VALUES
    (1, 1, 1, 1000),
    (2, 1, 2, NULL);
";

impl SqliteStore {
  /// Seed the reference tables. Safe to run on every startup.
  pub async fn seed_reference(&self) -> Result<()> {
    self.batch(REFERENCE_SEED).await
  }

  /// Load the demo fixture on top of the reference seed.
  pub async fn seed_demo(&self) -> Result<()> {
    self.seed_reference().await?;
    self.batch(DEMO_SEED).await
  }
}
