//! Handlers for `/joke` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/joke` | `?type=Chuck\|Dad\|Propio` |
//! | `POST`   | `/joke` | Body: [`CreateJoke`]; returns 201 + id |
//! | `GET`    | `/joke/:id` | Full record |
//! | `PUT`    | `/joke/:id` | Body: [`UpdateJoke`]; partial update |
//! | `DELETE` | `/joke/:id` | |

use axum::{
  Json, extract::State, http::StatusCode, response::IntoResponse,
};
use jokes_core::{
  joke::JokeId,
  provider::{JokeProvider, JokeSource},
  store::JokeStore,
  validate::{CreateJoke, UpdateJoke},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, JsonBody, PathParam, QueryParams, error::ApiError};

/// Path segments that do not parse as an id cannot name a stored joke.
fn parse_id(raw: &str) -> Result<JokeId, ApiError> {
  raw.parse().map_err(|_| ApiError::joke_not_found())
}

// ─── Fetch by source ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FetchParams {
  #[serde(rename = "type")]
  pub source: Option<String>,
}

/// `GET /joke?type=<Chuck|Dad|Propio>`
pub async fn fetch<S, P>(
  State(state): State<AppState<S, P>>,
  QueryParams(params): QueryParams<FetchParams>,
) -> Result<Json<Value>, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  let source = params
    .source
    .as_deref()
    .and_then(|s| s.parse::<JokeSource>().ok())
    .ok_or_else(invalid_source)?;

  let joke = match source {
    JokeSource::Chuck => state
      .chuck
      .fetch()
      .await
      .map_err(ApiError::upstream("failed to fetch a joke from the Chuck Norris API"))?,
    JokeSource::Dad => state
      .dad
      .fetch()
      .await
      .map_err(ApiError::upstream("failed to fetch a joke from the dad joke API"))?,
    JokeSource::Propio => {
      state
        .store
        .latest()
        .await
        .map_err(ApiError::store("failed to read jokes from the database"))?
        .ok_or_else(|| ApiError::NotFound("no jokes yet, create one!".into()))?
        .text
    }
  };

  Ok(Json(json!({ "joke": joke })))
}

fn invalid_source() -> ApiError {
  let names = JokeSource::ALL.map(|s| format!("\"{s}\"")).join(", ");
  ApiError::BadRequest(format!("invalid type parameter; use one of {names}"))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /joke` — returns 201 + the new joke's id.
pub async fn create<S, P>(
  State(state): State<AppState<S, P>>,
  JsonBody(body): JsonBody<CreateJoke>,
) -> Result<impl IntoResponse, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  let input = body.validate()?;
  let joke = state
    .store
    .create(input)
    .await
    .map_err(ApiError::store("failed to save the joke"))?;

  tracing::info!(id = %joke.id, category = %joke.category, "joke created");
  Ok((
    StatusCode::CREATED,
    Json(json!({ "message": "joke created", "id": joke.id })),
  ))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /joke/:id`
pub async fn get_one<S, P>(
  State(state): State<AppState<S, P>>,
  PathParam(id): PathParam<String>,
) -> Result<Json<Value>, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  let id = parse_id(&id)?;
  let joke = state
    .store
    .get(id)
    .await
    .map_err(ApiError::store("failed to read the joke"))?
    .ok_or_else(ApiError::joke_not_found)?;
  Ok(Json(json!({ "joke": joke })))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /joke/:id` — only the fields present in the body are overwritten.
pub async fn update_one<S, P>(
  State(state): State<AppState<S, P>>,
  PathParam(id): PathParam<String>,
  JsonBody(body): JsonBody<UpdateJoke>,
) -> Result<Json<Value>, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  let id = parse_id(&id)?;
  let patch = body.validate()?;
  let joke = state
    .store
    .update(id, patch)
    .await
    .map_err(ApiError::store("failed to update the joke"))?
    .ok_or_else(ApiError::joke_not_found)?;

  tracing::info!(%id, "joke updated");
  Ok(Json(json!({ "message": "joke updated", "joke": joke })))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /joke/:id`
pub async fn delete_one<S, P>(
  State(state): State<AppState<S, P>>,
  PathParam(id): PathParam<String>,
) -> Result<Json<Value>, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  let id = parse_id(&id)?;
  let deleted = state
    .store
    .delete(id)
    .await
    .map_err(ApiError::store("failed to delete the joke"))?;
  if !deleted {
    return Err(ApiError::joke_not_found());
  }

  tracing::info!(%id, "joke deleted");
  Ok(Json(json!({ "message": "joke deleted" })))
}
