//! Database schema.

pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS map (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    xodr_path TEXT,
    osm_path  TEXT
);

CREATE TABLE IF NOT EXISTS scenario (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    title         TEXT,
    description   TEXT,
    scenario_path TEXT NOT NULL,
    param_path    TEXT
);

CREATE TABLE IF NOT EXISTS av (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    image_path  TEXT NOT NULL,
    config_path TEXT NOT NULL,
    nv_runtime  INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS simulator (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    image_path  TEXT NOT NULL,
    config_path TEXT NOT NULL,
    nv_runtime  INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS sampler (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    module_path TEXT NOT NULL,
    config_path TEXT
);

CREATE TABLE IF NOT EXISTS plan (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    map_id      INTEGER NOT NULL REFERENCES map (id),
    scenario_id INTEGER NOT NULL REFERENCES scenario (id)
);

CREATE TABLE IF NOT EXISTS task (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    plan_id      INTEGER NOT NULL REFERENCES plan (id),
    av_id        INTEGER NOT NULL REFERENCES av (id),
    simulator_id INTEGER NOT NULL REFERENCES simulator (id),
    sampler_id   INTEGER NOT NULL REFERENCES sampler (id),
    status       TEXT NOT NULL DEFAULT 'pending'
                 CHECK (status IN ('pending', 'in_progress', 'completed', 'failed')),
    worker_id    INTEGER
);

CREATE INDEX IF NOT EXISTS idx_task_status ON task (status);
"#;
