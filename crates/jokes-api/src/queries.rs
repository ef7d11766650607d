//! Handlers for the `/jokes` aggregate queries.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/jokes/count/category/:category` | 404 when the count is zero |
//! | `GET`  | `/jokes/score/:rating` | Rating must be within `[1, 10]` |

use axum::{Json, extract::State};
use jokes_core::{
  joke::Category, provider::JokeProvider, store::JokeStore,
  validate::parse_rating,
};
use serde_json::{Value, json};

use crate::{AppState, PathParam, error::ApiError};

/// `GET /jokes/count/category/:category`
pub async fn count_by_category<S, P>(
  State(state): State<AppState<S, P>>,
  PathParam(category): PathParam<String>,
) -> Result<Json<Value>, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  let category: Category = category.parse()?;
  let count = state
    .store
    .count_by_category(category)
    .await
    .map_err(ApiError::store("failed to count jokes by category"))?;

  if count == 0 {
    return Err(ApiError::NotFound(format!(
      "no jokes in category \"{category}\""
    )));
  }
  Ok(Json(json!({ "count": count })))
}

/// `GET /jokes/score/:rating`
pub async fn list_by_rating<S, P>(
  State(state): State<AppState<S, P>>,
  PathParam(rating): PathParam<String>,
) -> Result<Json<Value>, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  let rating = parse_rating(&rating)?;
  let jokes = state
    .store
    .list_by_rating(rating)
    .await
    .map_err(ApiError::store("failed to list jokes by rating"))?;

  if jokes.is_empty() {
    return Err(ApiError::NotFound(format!("no jokes with rating {rating}")));
  }
  Ok(Json(json!({ "jokes": jokes })))
}
