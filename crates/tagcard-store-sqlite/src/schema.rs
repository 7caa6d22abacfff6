//! SQL schema for the tagcard SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision for future migrations.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per contact. The vCard payload is derived on read, never stored.
CREATE TABLE IF NOT EXISTS contacts (
    id            TEXT PRIMARY KEY,
    phone_number  TEXT NOT NULL,
    text          TEXT NOT NULL,
    name          TEXT NOT NULL DEFAULT '',
    created_at    TEXT NOT NULL,   -- RFC 3339 UTC; set once
    updated_at    TEXT NOT NULL    -- RFC 3339 UTC; bumped on update
);

CREATE INDEX IF NOT EXISTS contacts_created_idx ON contacts(created_at);

PRAGMA user_version = 1;
";
