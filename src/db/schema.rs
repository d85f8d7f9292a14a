//! Database schema migrations for the portal.
//!
//! Each entry is one schema version, applied in order inside a
//! transaction and recorded in the `schema_version` table.

/// All schema migrations, in order.
pub const MIGRATIONS: &[&str] = &[
    // v1: users
    "CREATE TABLE users (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        username        TEXT NOT NULL UNIQUE,
        password_hash   TEXT NOT NULL,
        created_at      TEXT NOT NULL DEFAULT (datetime('now')),
        updated_at      TEXT NOT NULL DEFAULT (datetime('now'))
    );",
    // v2: projects, one owner per row
    "CREATE TABLE projects (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id        INTEGER NOT NULL REFERENCES users(id),
        name            TEXT NOT NULL,
        start_date      TEXT NOT NULL,
        end_date        TEXT NOT NULL,
        content         TEXT NOT NULL DEFAULT '',
        tech_stack      TEXT NOT NULL DEFAULT '',
        os              TEXT NOT NULL DEFAULT '',
        environment     TEXT NOT NULL DEFAULT '',
        assignee        TEXT NOT NULL DEFAULT '',
        role            TEXT NOT NULL DEFAULT '',
        memo            TEXT NOT NULL DEFAULT '',
        created_at      TEXT NOT NULL DEFAULT (datetime('now')),
        updated_at      TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX idx_projects_owner_id ON projects(owner_id);",
];
