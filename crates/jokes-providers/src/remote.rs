//! [`RemoteProvider`], the `reqwest` implementation of [`JokeProvider`].

use std::time::Duration;

use jokes_core::provider::JokeProvider;
use reqwest::{Client, header};
use serde::Deserialize;

use crate::{Error, Result};

pub const CHUCK_NORRIS_URL: &str = "https://api.chucknorris.io/jokes/random";
pub const DAD_JOKE_URL: &str = "https://icanhazdadjoke.com/";

const USER_AGENT: &str =
  concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Which third-party API a [`RemoteProvider`] talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
  /// Responds with `{"value": "..."}`.
  ChuckNorris,
  /// Responds with `{"joke": "..."}`, but only when asked for JSON.
  DadJoke,
}

#[derive(Deserialize)]
struct ChuckNorrisBody {
  value: String,
}

#[derive(Deserialize)]
struct DadJokeBody {
  joke: String,
}

/// Build the HTTP client shared by every provider.
///
/// `timeout` of `None` leaves requests unbounded.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
  let mut builder = Client::builder().user_agent(USER_AGENT);
  if let Some(timeout) = timeout {
    builder = builder.timeout(timeout);
  }
  builder.build().map_err(Error::Client)
}

/// One external joke endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct RemoteProvider {
  client: Client,
  url:    String,
  kind:   ProviderKind,
}

impl RemoteProvider {
  pub fn new(client: Client, kind: ProviderKind, url: impl Into<String>) -> Self {
    Self {
      client,
      url: url.into(),
      kind,
    }
  }

  pub fn url(&self) -> &str { &self.url }

  async fn get(&self) -> Result<reqwest::Response> {
    let mut req = self.client.get(&self.url);
    if self.kind == ProviderKind::DadJoke {
      req = req.header(header::ACCEPT, "application/json");
    }

    let resp = req.send().await.map_err(|source| Error::Request {
      url: self.url.clone(),
      source,
    })?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status {
        url: self.url.clone(),
        status,
      });
    }
    Ok(resp)
  }

  fn decode_error(&self, source: reqwest::Error) -> Error {
    Error::Decode {
      url: self.url.clone(),
      source,
    }
  }
}

impl JokeProvider for RemoteProvider {
  type Error = Error;

  async fn fetch(&self) -> Result<String> {
    tracing::debug!(url = %self.url, kind = ?self.kind, "fetching joke");
    let resp = self.get().await?;

    match self.kind {
      ProviderKind::ChuckNorris => resp
        .json::<ChuckNorrisBody>()
        .await
        .map(|b| b.value)
        .map_err(|e| self.decode_error(e)),
      ProviderKind::DadJoke => resp
        .json::<DadJokeBody>()
        .await
        .map(|b| b.joke)
        .map_err(|e| self.decode_error(e)),
    }
  }
}
