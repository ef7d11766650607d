//! External joke providers and the `type` selector of `GET /joke`.

use std::{fmt, future::Future, str::FromStr};

/// A third-party source that hands out one joke at a time.
pub trait JokeProvider: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn fetch(&self) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;
}

/// Where `GET /joke` should take its joke from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeSource {
  /// The Chuck Norris provider.
  Chuck,
  /// The dad-joke provider.
  Dad,
  /// The most recent joke in our own store.
  Propio,
}

impl JokeSource {
  pub const ALL: [JokeSource; 3] =
    [JokeSource::Chuck, JokeSource::Dad, JokeSource::Propio];

  pub fn as_str(self) -> &'static str {
    match self {
      JokeSource::Chuck => "Chuck",
      JokeSource::Dad => "Dad",
      JokeSource::Propio => "Propio",
    }
  }
}

/// Returned when a `type` value names no known source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown joke source {0:?}")]
pub struct UnknownSource(pub String);

impl FromStr for JokeSource {
  type Err = UnknownSource;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|src| src.as_str() == s)
      .ok_or_else(|| UnknownSource(s.to_owned()))
  }
}

impl fmt::Display for JokeSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_exact_names_only() {
    assert_eq!("Chuck".parse(), Ok(JokeSource::Chuck));
    assert_eq!("Dad".parse(), Ok(JokeSource::Dad));
    assert_eq!("Propio".parse(), Ok(JokeSource::Propio));
    assert!("chuck".parse::<JokeSource>().is_err());
    assert!("Bogus".parse::<JokeSource>().is_err());
  }
}
