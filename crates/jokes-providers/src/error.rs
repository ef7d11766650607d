//! Error type for `jokes-providers`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("request to {url} failed: {source}")]
  Request {
    url:    String,
    #[source]
    source: reqwest::Error,
  },

  #[error("{url} responded with {status}")]
  Status {
    url:    String,
    status: reqwest::StatusCode,
  },

  #[error("could not decode response from {url}: {source}")]
  Decode {
    url:    String,
    #[source]
    source: reqwest::Error,
  },

  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
