//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, ids as hyphenated lowercase
//! UUIDs and categories by their display name.

use chrono::{DateTime, Utc};
use jokes_core::joke::{Joke, JokeId};
use uuid::Uuid;

use crate::{Error, Result};

/// Column list shared by every `SELECT` over `jokes`, in [`RawJoke`] order.
pub const JOKE_COLUMNS: &str =
  "joke_id, text, author, rating, category, created_at";

pub fn encode_id(id: JokeId) -> String { id.to_string() }

pub fn decode_id(s: &str) -> Result<JokeId> { Ok(Uuid::parse_str(s)?.into()) }

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `jokes` row.
pub struct RawJoke {
  pub joke_id:    String,
  pub text:       String,
  pub author:     String,
  pub rating:     f64,
  pub category:   String,
  pub created_at: String,
}

impl RawJoke {
  /// Map a row selected with [`JOKE_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      joke_id:    row.get(0)?,
      text:       row.get(1)?,
      author:     row.get(2)?,
      rating:     row.get(3)?,
      category:   row.get(4)?,
      created_at: row.get(5)?,
    })
  }

  pub fn into_joke(self) -> Result<Joke> {
    Ok(Joke {
      id:         decode_id(&self.joke_id)?,
      text:       self.text,
      author:     self.author,
      rating:     self.rating,
      category:   self.category.parse()?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
