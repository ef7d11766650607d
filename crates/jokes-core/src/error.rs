//! Error types for `jokes-core`.

use thiserror::Error;

use crate::joke::Category;

#[derive(Debug, Error)]
pub enum Error {
  #[error("text, rating and category are required")]
  MissingFields,

  #[error("invalid category {0:?}; valid categories are: {list}", list = Category::list())]
  InvalidCategory(String),

  #[error("invalid rating {0:?}; must be a number between 1 and 10")]
  InvalidRating(String),

  #[error("invalid joke id: {0}")]
  InvalidId(#[from] uuid::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
