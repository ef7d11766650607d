//! Joke records and the closed category set.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Author recorded when a joke is created without one.
pub const DEFAULT_AUTHOR: &str = "Se perdió en el Ávila como Led";

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned identifier of a joke. Opaque to callers.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JokeId(Uuid);

impl JokeId {
  pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl Default for JokeId {
  fn default() -> Self { Self::new() }
}

impl From<Uuid> for JokeId {
  fn from(id: Uuid) -> Self { Self(id) }
}

impl FromStr for JokeId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Ok(Self(Uuid::parse_str(s)?)) }
}

impl fmt::Display for JokeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.hyphenated().fmt(f)
  }
}

// ─── Category ────────────────────────────────────────────────────────────────

/// The only categories a joke may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  #[serde(rename = "Dad joke")]
  DadJoke,
  #[serde(rename = "Humor Negro")]
  HumorNegro,
  #[serde(rename = "Chistoso")]
  Chistoso,
  #[serde(rename = "Malo")]
  Malo,
}

impl Category {
  pub const ALL: [Category; 4] = [
    Category::DadJoke,
    Category::HumorNegro,
    Category::Chistoso,
    Category::Malo,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Category::DadJoke => "Dad joke",
      Category::HumorNegro => "Humor Negro",
      Category::Chistoso => "Chistoso",
      Category::Malo => "Malo",
    }
  }

  /// Comma-separated list of every valid category, for error messages.
  pub fn list() -> String {
    Self::ALL.map(Category::as_str).join(", ")
  }
}

impl FromStr for Category {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|c| c.as_str() == s)
      .ok_or_else(|| Error::InvalidCategory(s.to_owned()))
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A stored joke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joke {
  pub id:         JokeId,
  pub text:       String,
  pub author:     String,
  pub rating:     f64,
  pub category:   Category,
  pub created_at: DateTime<Utc>,
}

impl Joke {
  /// Overwrite every field the patch carries; leave the rest alone.
  pub fn apply(&mut self, patch: JokePatch) {
    if let Some(text) = patch.text {
      self.text = text;
    }
    if let Some(author) = patch.author {
      self.author = author;
    }
    if let Some(rating) = patch.rating {
      self.rating = rating;
    }
    if let Some(category) = patch.category {
      self.category = category;
    }
  }
}

/// Validated input for [`JokeStore::create`](crate::store::JokeStore::create).
#[derive(Debug, Clone, PartialEq)]
pub struct NewJoke {
  pub text:     String,
  pub author:   String,
  pub rating:   f64,
  pub category: Category,
}

impl NewJoke {
  /// Build a joke with the default author.
  pub fn new(text: impl Into<String>, rating: f64, category: Category) -> Self {
    Self {
      text: text.into(),
      author: DEFAULT_AUTHOR.to_owned(),
      rating,
      category,
    }
  }
}

/// A sparse update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JokePatch {
  pub text:     Option<String>,
  pub author:   Option<String>,
  pub rating:   Option<f64>,
  pub category: Option<Category>,
}

impl JokePatch {
  pub fn is_empty(&self) -> bool {
    self.text.is_none()
      && self.author.is_none()
      && self.rating.is_none()
      && self.category.is_none()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn joke() -> Joke {
    Joke {
      id:         JokeId::new(),
      text:       "Why did the scarecrow win an award?".into(),
      author:     DEFAULT_AUTHOR.into(),
      rating:     7.0,
      category:   Category::DadJoke,
      created_at: Utc::now(),
    }
  }

  #[test]
  fn category_round_trips_through_its_string_form() {
    for category in Category::ALL {
      assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
    }
  }

  #[test]
  fn category_parse_is_exact() {
    assert!("malo".parse::<Category>().is_err());
    assert!("Dad Joke".parse::<Category>().is_err());
    assert!(" Malo".parse::<Category>().is_err());
  }

  #[test]
  fn category_serializes_as_display_name() {
    let json = serde_json::to_string(&Category::HumorNegro).unwrap();
    assert_eq!(json, r#""Humor Negro""#);
  }

  #[test]
  fn joke_id_parse_rejects_garbage() {
    assert!("not-an-id".parse::<JokeId>().is_err());
    let id = JokeId::new();
    assert_eq!(id.to_string().parse::<JokeId>().unwrap(), id);
  }

  #[test]
  fn apply_only_overwrites_present_fields() {
    let mut j = joke();
    let before = j.clone();
    j.apply(JokePatch {
      rating: Some(9.0),
      ..JokePatch::default()
    });
    assert_eq!(j.rating, 9.0);
    assert_eq!(j.text, before.text);
    assert_eq!(j.author, before.author);
    assert_eq!(j.category, before.category);
    assert_eq!(j.id, before.id);
  }

  #[test]
  fn empty_patch_is_a_no_op() {
    let mut j = joke();
    let before = j.clone();
    assert!(JokePatch::default().is_empty());
    j.apply(JokePatch::default());
    assert_eq!(j, before);
  }
}
