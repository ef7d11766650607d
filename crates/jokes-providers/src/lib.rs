//! HTTP clients for the third-party joke providers.
//!
//! Both providers are served by [`RemoteProvider`]; the [`ProviderKind`]
//! decides which headers are sent and which field of the response body holds
//! the joke.

mod remote;

pub mod error;

pub use error::{Error, Result};
pub use remote::{
  CHUCK_NORRIS_URL, DAD_JOKE_URL, ProviderKind, RemoteProvider, build_client,
};
