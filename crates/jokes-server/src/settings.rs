//! Runtime server configuration.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use jokes_providers::{CHUCK_NORRIS_URL, DAD_JOKE_URL};
use serde::Deserialize;

/// Runtime server configuration, deserialised from `config.toml` and
/// `JOKES_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                  String,
  pub port:                  u16,
  pub store_path:            PathBuf,
  pub chuck_url:             String,
  pub dad_url:               String,
  /// Upper bound on a provider request, in seconds. Unset means no limit.
  pub provider_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                  "127.0.0.1".to_string(),
      port:                  3000,
      store_path:            PathBuf::from("jokes.db"),
      chuck_url:             CHUCK_NORRIS_URL.to_string(),
      dad_url:               DAD_JOKE_URL.to_string(),
      provider_timeout_secs: None,
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` and the environment over the
  /// defaults.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("JOKES"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/jokes-config.toml")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.address(), "127.0.0.1:3000");
  }

  #[test]
  fn file_overrides_selected_fields() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "port = 8080\nprovider_timeout_secs = 10").unwrap();

    let cfg = ServerConfig::load(file.path()).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.provider_timeout_secs, Some(10));
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.chuck_url, CHUCK_NORRIS_URL);
  }

  #[test]
  fn tilde_is_expanded_only_at_the_start() {
    assert_eq!(expand_tilde(Path::new("data/jokes.db")), PathBuf::from("data/jokes.db"));
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/jokes.db")),
        PathBuf::from(home).join("jokes.db")
      );
    }
  }
}
