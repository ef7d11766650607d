//! JSON REST API for the jokes service.
//!
//! Exposes an axum [`Router`] backed by any [`JokeStore`] and a pair of
//! [`JokeProvider`]s. Transport concerns (listening, tracing layers) are the
//! caller's responsibility.

pub mod error;
pub mod jokes;
pub mod queries;

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::{FromRequest, FromRequestParts},
  routing::get,
};
use jokes_core::{provider::JokeProvider, store::JokeStore};
use serde_json::{Value, json};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, P> {
  pub store: Arc<S>,
  pub chuck: Arc<P>,
  pub dad:   Arc<P>,
}

impl<S, P> AppState<S, P> {
  pub fn new(store: S, chuck: P, dad: P) -> Self {
    Self {
      store: Arc::new(store),
      chuck: Arc::new(chuck),
      dad:   Arc::new(dad),
    }
  }
}

impl<S, P> Clone for AppState<S, P> {
  fn clone(&self) -> Self {
    Self {
      store: Arc::clone(&self.store),
      chuck: Arc::clone(&self.chuck),
      dad:   Arc::clone(&self.dad),
    }
  }
}

// ─── Extractors ───────────────────────────────────────────────────────────────

/// [`Json`] with rejections reported as [`ApiError::BadRequest`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// [`Query`](axum::extract::Query) with rejections reported as
/// [`ApiError::BadRequest`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryParams<T>(pub T);

/// [`Path`](axum::extract::Path) with rejections reported as
/// [`ApiError::BadRequest`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, P>(state: AppState<S, P>) -> Router<()>
where
  S: JokeStore + 'static,
  P: JokeProvider + 'static,
{
  Router::new()
    .route("/", get(welcome))
    .route("/joke", get(jokes::fetch::<S, P>).post(jokes::create::<S, P>))
    .route(
      "/joke/{id}",
      get(jokes::get_one::<S, P>)
        .put(jokes::update_one::<S, P>)
        .delete(jokes::delete_one::<S, P>),
    )
    .route(
      "/jokes/count/category/{category}",
      get(queries::count_by_category::<S, P>),
    )
    .route("/jokes/score/{rating}", get(queries::list_by_rating::<S, P>))
    .with_state(state)
}

/// `GET /`
async fn welcome() -> Json<Value> {
  Json(json!({ "message": "Welcome to the jokes API!" }))
}

// ─── Integration tests ────────────────────────────────────────────────────────
