//! SQL schema for the jokes SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- `seq` records insertion order; `joke_id` is the identifier handed out.
CREATE TABLE IF NOT EXISTS jokes (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    joke_id     TEXT NOT NULL UNIQUE,
    text        TEXT NOT NULL,
    author      TEXT NOT NULL,
    rating      REAL NOT NULL,
    category    TEXT NOT NULL
                CHECK (category IN ('Dad joke', 'Humor Negro', 'Chistoso', 'Malo')),
    created_at  TEXT NOT NULL    -- ISO 8601 UTC; store-assigned
);

CREATE INDEX IF NOT EXISTS jokes_category_idx ON jokes(category);
CREATE INDEX IF NOT EXISTS jokes_rating_idx   ON jokes(rating);

PRAGMA user_version = 1;
";
