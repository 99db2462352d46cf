//! SQL schema for the Glossa SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.
//!
//! Every foreign key is `ON UPDATE CASCADE ON DELETE RESTRICT`: renumbering
//! reference data propagates automatically, while deleting a still-referenced
//! row is rejected rather than silently cascading data loss.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- ── Reference tables ─────────────────────────────────────────────────────

CREATE TABLE IF NOT EXISTS enum_roles (
    id    INTEGER PRIMARY KEY,
    label TEXT NOT NULL UNIQUE    -- 'regular' | 'supervisor' | 'admin'
);

CREATE TABLE IF NOT EXISTS enum_genders (
    id    INTEGER PRIMARY KEY,
    label TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS enum_educations (
    id    INTEGER PRIMARY KEY,
    label TEXT NOT NULL UNIQUE    -- four tiers; 'VŠ' is the highest
);

CREATE TABLE IF NOT EXISTS enum_regions (
    id    INTEGER PRIMARY KEY,
    label TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS enum_places (
    id        INTEGER PRIMARY KEY,
    label     TEXT NOT NULL UNIQUE,
    region_id INTEGER NOT NULL
        REFERENCES enum_regions(id) ON UPDATE CASCADE ON DELETE RESTRICT
);

-- ── Entity tables ────────────────────────────────────────────────────────

CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    role_id       INTEGER NOT NULL
        REFERENCES enum_roles(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    badge         TEXT UNIQUE,      -- required for supervisors (access layer)
    supervisor_id INTEGER
        REFERENCES users(id) ON UPDATE CASCADE ON DELETE RESTRICT
);

CREATE TABLE IF NOT EXISTS projects (
    id    INTEGER PRIMARY KEY,
    label TEXT NOT NULL UNIQUE,
    badge TEXT NOT NULL UNIQUE      -- prefixes external document labels
);

CREATE TABLE IF NOT EXISTS corpora (
    id    INTEGER PRIMARY KEY,
    label TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS speakers (
    id           INTEGER PRIMARY KEY,
    user_id      INTEGER NOT NULL
        REFERENCES users(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    project_id   INTEGER NOT NULL
        REFERENCES projects(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    nickname     TEXT NOT NULL,
    gender_id    INTEGER NOT NULL
        REFERENCES enum_genders(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    education_id INTEGER NOT NULL
        REFERENCES enum_educations(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    place_id     INTEGER NOT NULL
        REFERENCES enum_places(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    year         INTEGER NOT NULL   -- year of birth
);

CREATE TABLE IF NOT EXISTS docs (
    id             INTEGER PRIMARY KEY,
    project_id     INTEGER NOT NULL
        REFERENCES projects(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    corpus_id      INTEGER
        REFERENCES corpora(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    assigned_to_id INTEGER
        REFERENCES users(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    assigned_by_id INTEGER
        REFERENCES users(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    done           BOOLEAN,         -- NULL unassigned, 0 in progress, 1 done
    date           TIMESTAMP NOT NULL,  -- ISO 8601 UTC
    place_id       INTEGER NOT NULL
        REFERENCES enum_places(id) ON UPDATE CASCADE ON DELETE RESTRICT
);

CREATE TABLE IF NOT EXISTS doc2speaker (
    id         INTEGER PRIMARY KEY,
    doc_id     INTEGER NOT NULL
        REFERENCES docs(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    speaker_id INTEGER NOT NULL
        REFERENCES speakers(id) ON UPDATE CASCADE ON DELETE RESTRICT,
    words      INTEGER              -- NULL until the transcript is counted
);

CREATE INDEX IF NOT EXISTS speakers_user_idx    ON speakers(user_id);
CREATE INDEX IF NOT EXISTS speakers_project_idx ON speakers(project_id);
CREATE INDEX IF NOT EXISTS docs_project_idx     ON docs(project_id);
CREATE INDEX IF NOT EXISTS d2s_doc_idx          ON doc2speaker(doc_id);
CREATE INDEX IF NOT EXISTS d2s_speaker_idx      ON doc2speaker(speaker_id);

-- ── Derived views ────────────────────────────────────────────────────────
-- Plain views, recomputed on every read. Nothing is materialized.

CREATE VIEW IF NOT EXISTS view_geo AS
SELECT
    p.id    AS place_id,
    p.label AS place,
    r.label AS region
FROM enum_places p
JOIN enum_regions r ON r.id = p.region_id;

CREATE VIEW IF NOT EXISTS view_speakers AS
SELECT
    s.id       AS id,
    u.username AS user,
    pr.label   AS project,
    s.nickname AS nickname,
    g.label    AS gender,
    e.label    AS education,
    geo.place  AS place,
    geo.region AS region,
    s.year     AS year
FROM speakers s
JOIN users u           ON u.id   = s.user_id
JOIN projects pr       ON pr.id  = s.project_id
JOIN enum_genders g    ON g.id   = s.gender_id
JOIN enum_educations e ON e.id   = s.education_id
JOIN view_geo geo      ON geo.place_id = s.place_id;

CREATE VIEW IF NOT EXISTS view_docs AS
SELECT
    d.id         AS id,
    pr.label     AS project,
    pr.badge     AS badge,
    c.label      AS corpus,
    uto.username AS assigned_to,
    uby.username AS assigned_by,
    d.done       AS done,
    d.date       AS date,
    geo.place    AS place,
    geo.region   AS region
FROM docs d
JOIN projects pr    ON pr.id  = d.project_id
LEFT JOIN corpora c ON c.id   = d.corpus_id
LEFT JOIN users uto ON uto.id = d.assigned_to_id
LEFT JOIN users uby ON uby.id = d.assigned_by_id
JOIN view_geo geo   ON geo.place_id = d.place_id;

-- The age bracket is computed against the document date, never against the
-- current date. Strict '<': a difference of exactly 35 years is 'older'.
CREATE VIEW IF NOT EXISTS view_doc2speaker AS
SELECT
    ds.id          AS id,
    ds.doc_id      AS doc_id,
    ds.speaker_id  AS speaker_id,
    ds.words       AS words,
    s.nickname     AS nickname,
    g.label        AS gender,
    CASE WHEN e.label = 'VŠ' THEN 'higher' ELSE 'lower' END AS education,
    CASE WHEN CAST(strftime('%Y', d.date) AS INTEGER) - s.year < 35
         THEN 'younger' ELSE 'older' END AS age,
    sgeo.place     AS speaker_place,
    sgeo.region    AS speaker_region,
    pr.label       AS project,
    c.label        AS corpus,
    dgeo.place     AS doc_place,
    dgeo.region    AS doc_region,
    d.date         AS date
FROM doc2speaker ds
JOIN docs d            ON d.id  = ds.doc_id
JOIN speakers s        ON s.id  = ds.speaker_id
JOIN projects pr       ON pr.id = d.project_id
LEFT JOIN corpora c    ON c.id  = d.corpus_id
JOIN enum_genders g    ON g.id  = s.gender_id
JOIN enum_educations e ON e.id  = s.education_id
JOIN view_geo sgeo     ON sgeo.place_id = s.place_id
JOIN view_geo dgeo     ON dgeo.place_id = d.place_id;

PRAGMA user_version = 1;
";
