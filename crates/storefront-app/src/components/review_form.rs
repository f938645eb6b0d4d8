//! Review form state (controlled inputs + submit-time validation)
//!
//! Every input is bound through a getter/setter pair instead of two-way
//! binding. Nothing is validated while typing; [`ReviewFormState::submit`]
//! runs all presence checks at once and either hands back a [`Review`] and
//! clears the form, or records the errors and keeps what the user typed.

use storefront_core::{Rating, Recommend, Review};
use thiserror::Error;

/// A missing form field, reported on submit.
///
/// The variant order is the order errors are listed in. Rating is checked
/// before the review text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name required.")]
    NameRequired,

    #[error("Rating required.")]
    RatingRequired,

    #[error("Review required.")]
    ReviewRequired,

    #[error("Recommendation required.")]
    RecommendRequired,
}

/// Header shown above the error list
pub fn error_header(count: usize) -> Option<&'static str> {
    match count {
        0 => None,
        1 => Some("Please correct the following error:"),
        _ => Some("Please correct the following errors:"),
    }
}

/// Which input of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewField {
    #[default]
    Name,
    Review,
    Rating,
    Recommend,
    Submit,
}

impl ReviewField {
    pub const ALL: [ReviewField; 5] = [
        ReviewField::Name,
        ReviewField::Review,
        ReviewField::Rating,
        ReviewField::Recommend,
        ReviewField::Submit,
    ];

    pub fn next(self) -> Self {
        match self {
            ReviewField::Name => ReviewField::Review,
            ReviewField::Review => ReviewField::Rating,
            ReviewField::Rating => ReviewField::Recommend,
            ReviewField::Recommend => ReviewField::Submit,
            ReviewField::Submit => ReviewField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ReviewField::Name => ReviewField::Submit,
            ReviewField::Review => ReviewField::Name,
            ReviewField::Rating => ReviewField::Review,
            ReviewField::Recommend => ReviewField::Rating,
            ReviewField::Submit => ReviewField::Recommend,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReviewField::Name => "Name:",
            ReviewField::Review => "Review:",
            ReviewField::Rating => "Rating:",
            ReviewField::Recommend => "Would you recommend this product?",
            ReviewField::Submit => "Submit",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewFormState {
    name: Option<String>,
    review: Option<String>,
    rating: Option<Rating>,
    recommend: Option<Recommend>,
    errors: Vec<ValidationError>,

    /// Focused input (view-only concern, untouched by submit)
    pub focused: ReviewField,
}

impl ReviewFormState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Field accessors
    // ─────────────────────────────────────────────────────────

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn review(&self) -> Option<&str> {
        self.review.as_deref()
    }

    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = Some(review.into());
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn set_rating(&mut self, rating: Option<Rating>) {
        self.rating = rating;
    }

    pub fn recommend(&self) -> Option<Recommend> {
        self.recommend
    }

    pub fn set_recommend(&mut self, recommend: Option<Recommend>) {
        self.recommend = recommend;
    }

    // ─────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────

    /// Errors from the most recent submit attempt
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_header(&self) -> Option<&'static str> {
        error_header(self.errors.len())
    }

    /// Validate and, on success, hand the review to the caller.
    ///
    /// The error list is rebuilt from scratch on every call. On success the
    /// four inputs are reset; on failure they are left as typed.
    pub fn submit(&mut self) -> Option<Review> {
        self.errors.clear();

        let name = present(self.name.as_deref());
        let review = present(self.review.as_deref());

        match (name, self.rating, review, self.recommend) {
            (Some(name), Some(rating), Some(review), Some(recommend)) => {
                let submitted = Review {
                    name: name.to_string(),
                    review: review.to_string(),
                    rating,
                    recommend,
                };
                self.reset_fields();
                Some(submitted)
            }
            (name, rating, review, recommend) => {
                if name.is_none() {
                    self.errors.push(ValidationError::NameRequired);
                }
                if rating.is_none() {
                    self.errors.push(ValidationError::RatingRequired);
                }
                if review.is_none() {
                    self.errors.push(ValidationError::ReviewRequired);
                }
                if recommend.is_none() {
                    self.errors.push(ValidationError::RecommendRequired);
                }
                None
            }
        }
    }

    fn reset_fields(&mut self) {
        self.name = None;
        self.review = None;
        self.rating = None;
        self.recommend = None;
    }
}

/// Trimmed text when the input holds something other than whitespace
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
