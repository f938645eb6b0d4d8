//! Review record produced by the review form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Star rating, always within `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// One star more, saturating at 5
    pub fn up(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One star less, saturating at 1
    pub fn down(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    /// Options in the order the form lists them
    pub fn options() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or(Error::InvalidRating(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the reviewer recommends the product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommend {
    Yes,
    No,
}

impl Recommend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommend::Yes => "yes",
            Recommend::No => "no",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Recommend::Yes => Recommend::No,
            Recommend::No => Recommend::Yes,
        }
    }
}

impl FromStr for Recommend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Recommend::Yes),
            "no" | "n" => Ok(Recommend::No),
            other => Err(Error::InvalidRecommend(other.to_string())),
        }
    }
}

impl fmt::Display for Recommend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted product review.
///
/// Only the review form builds these, after its presence checks pass, so
/// `name` and `review` are already trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub review: String,
    pub rating: Rating,
    pub recommend: Recommend,
}

impl Review {
    /// Heading line in the review list: `name (rating/5)`
    pub fn heading(&self) -> String {
        format!("{} ({}/{})", self.name, self.rating, Rating::MAX)
    }

    /// Body line in the review list, wrapped in double quotes
    pub fn quoted_body(&self) -> String {
        format!("\"{}\"", self.review)
    }
}
