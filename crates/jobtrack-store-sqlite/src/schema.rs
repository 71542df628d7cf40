//! SQL schema for the jobtrack SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS applications (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    position   TEXT NOT NULL,
    company    TEXT NOT NULL,
    status     TEXT NOT NULL,   -- free-form; the UI vocabulary is not enforced here
    created_at TEXT NOT NULL,   -- RFC 3339 UTC; set once at insert
    updated_at TEXT NOT NULL    -- RFC 3339 UTC; refreshed on every update
);

CREATE INDEX IF NOT EXISTS applications_created_idx ON applications(created_at);

PRAGMA user_version = 1;
";
