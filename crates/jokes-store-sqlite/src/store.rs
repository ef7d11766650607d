//! [`SqliteStore`], the SQLite implementation of [`JokeStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use jokes_core::{
  joke::{Category, Joke, JokeId, JokePatch, NewJoke},
  store::JokeStore,
};

use crate::{
  Result,
  encode::{JOKE_COLUMNS, RawJoke, encode_dt, encode_id},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A joke store backed by a single SQLite file.
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
}

// ─── JokeStore impl ──────────────────────────────────────────────────────────

impl JokeStore for SqliteStore {
  type Error = crate::Error;

  async fn create(&self, input: NewJoke) -> Result<Joke> {
    let joke = Joke {
      id:         JokeId::new(),
      text:       input.text,
      author:     input.author,
      rating:     input.rating,
      category:   input.category,
      created_at: Utc::now(),
    };

    let id_str       = encode_id(joke.id);
    let text         = joke.text.clone();
    let author       = joke.author.clone();
    let rating       = joke.rating;
    let category_str = joke.category.as_str();
    let at_str       = encode_dt(joke.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO jokes (joke_id, text, author, rating, category, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, text, author, rating, category_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(joke)
  }

  async fn get(&self, id: JokeId) -> Result<Option<Joke>> {
    let id_str = encode_id(id);

    let raw: Option<RawJoke> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {JOKE_COLUMNS} FROM jokes WHERE joke_id = ?1"),
            rusqlite::params![id_str],
            RawJoke::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawJoke::into_joke).transpose()
  }

  async fn latest(&self) -> Result<Option<Joke>> {
    let raw: Option<RawJoke> = self
      .conn
      .call(|conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {JOKE_COLUMNS} FROM jokes ORDER BY seq DESC LIMIT 1"),
            [],
            RawJoke::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawJoke::into_joke).transpose()
  }

  async fn update(&self, id: JokeId, patch: JokePatch) -> Result<Option<Joke>> {
    let id_str = encode_id(id);

    // Read, patch and write inside a single call and transaction.
    let joke: Option<Joke> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let raw = tx
          .query_row(
            &format!("SELECT {JOKE_COLUMNS} FROM jokes WHERE joke_id = ?1"),
            rusqlite::params![id_str],
            RawJoke::from_row,
          )
          .optional()?;
        let Some(raw) = raw else {
          return Ok(None);
        };
        let mut joke = raw
          .into_joke()
          .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?;

        if !patch.is_empty() {
          joke.apply(patch);
          let changed = tx.execute(
            "UPDATE jokes SET text = ?2, author = ?3, rating = ?4, category = ?5
             WHERE joke_id = ?1",
            rusqlite::params![
              id_str,
              joke.text,
              joke.author,
              joke.rating,
              joke.category.as_str(),
            ],
          )?;
          if changed == 0 {
            return Ok(None);
          }
        }

        tx.commit()?;
        Ok(Some(joke))
      })
      .await?;

    Ok(joke)
  }

  async fn delete(&self, id: JokeId) -> Result<bool> {
    let id_str = encode_id(id);

    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM jokes WHERE joke_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(deleted > 0)
  }

  async fn count_by_category(&self, category: Category) -> Result<u64> {
    let category_str = category.as_str();

    let count: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT COUNT(*) FROM jokes WHERE category = ?1",
          rusqlite::params![category_str],
          |row| row.get(0),
        )?)
      })
      .await?;

    Ok(count.max(0) as u64)
  }

  async fn list_by_rating(&self, rating: f64) -> Result<Vec<Joke>> {
    let raws: Vec<RawJoke> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {JOKE_COLUMNS} FROM jokes WHERE rating = ?1 ORDER BY seq"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![rating], RawJoke::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawJoke::into_joke).collect()
  }
}
