//! Validation of raw request input into [`NewJoke`] and [`JokePatch`].
//!
//! Missing values, empty strings and a zero rating are all treated as
//! "not provided".

use serde::Deserialize;

use crate::{
  Error, Result,
  joke::{Category, DEFAULT_AUTHOR, JokePatch, NewJoke},
};

/// Raw body of a create request, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateJoke {
  pub text:     Option<String>,
  pub author:   Option<String>,
  pub rating:   Option<f64>,
  pub category: Option<String>,
}

impl CreateJoke {
  pub fn validate(self) -> Result<NewJoke> {
    let (Some(text), Some(rating), Some(category)) = (
      non_empty(self.text),
      non_zero(self.rating),
      non_empty(self.category),
    ) else {
      return Err(Error::MissingFields);
    };

    Ok(NewJoke {
      text,
      author: non_empty(self.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
      rating,
      category: category.parse()?,
    })
  }
}

/// Raw body of an update request, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJoke {
  pub text:     Option<String>,
  pub author:   Option<String>,
  pub rating:   Option<f64>,
  pub category: Option<String>,
}

impl UpdateJoke {
  pub fn validate(self) -> Result<JokePatch> {
    let category = non_empty(self.category)
      .map(|c| c.parse::<Category>())
      .transpose()?;

    Ok(JokePatch {
      text: non_empty(self.text),
      author: non_empty(self.author),
      rating: non_zero(self.rating),
      category,
    })
  }
}

/// Parse a rating path segment. Accepts any number in `[1, 10]`.
pub fn parse_rating(raw: &str) -> Result<f64> {
  raw
    .trim()
    .parse::<f64>()
    .ok()
    .filter(|r| r.is_finite() && (1.0..=10.0).contains(r))
    .ok_or_else(|| Error::InvalidRating(raw.to_owned()))
}

fn non_empty(s: Option<String>) -> Option<String> {
  s.filter(|s| !s.is_empty())
}

fn non_zero(r: Option<f64>) -> Option<f64> {
  r.filter(|r| *r != 0.0 && !r.is_nan())
}
