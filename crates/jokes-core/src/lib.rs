//! Core types and trait definitions for the jokes service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod joke;
pub mod provider;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
