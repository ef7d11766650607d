//! The `JokeStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `jokes-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::joke::{Category, Joke, JokeId, JokePatch, NewJoke};

/// Abstraction over the document store holding joke records.
///
/// Identifiers are assigned by the store. "Most recent" is defined by the
/// store's own insertion order.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait JokeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new joke and return it with its assigned id.
  fn create(
    &self,
    input: NewJoke,
  ) -> impl Future<Output = Result<Joke, Self::Error>> + Send + '_;

  /// Retrieve a joke by id. Returns `None` if not found.
  fn get(
    &self,
    id: JokeId,
  ) -> impl Future<Output = Result<Option<Joke>, Self::Error>> + Send + '_;

  /// The most recently created joke, if any.
  fn latest(
    &self,
  ) -> impl Future<Output = Result<Option<Joke>, Self::Error>> + Send + '_;

  /// Apply `patch` to the stored joke and return the result.
  /// Returns `None` if the joke does not exist.
  fn update(
    &self,
    id: JokeId,
    patch: JokePatch,
  ) -> impl Future<Output = Result<Option<Joke>, Self::Error>> + Send + '_;

  /// Delete a joke. Returns `false` if it did not exist.
  fn delete(
    &self,
    id: JokeId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn count_by_category(
    &self,
    category: Category,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// All jokes with exactly this rating, oldest first.
  fn list_by_rating(
    &self,
    rating: f64,
  ) -> impl Future<Output = Result<Vec<Joke>, Self::Error>> + Send + '_;
}
