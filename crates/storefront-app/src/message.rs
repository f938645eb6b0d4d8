//! Message types for the application (TEA pattern)

use storefront_core::{Rating, Recommend, Review, VariantId};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Product Card Messages
    // ─────────────────────────────────────────────────────────
    /// Select variant by index (swatch hover)
    SelectVariant(usize),
    /// Select the next variant
    SelectNextVariant,
    /// Select the previous variant
    SelectPreviousVariant,
    /// Add-to-cart control activated
    AddToCart,
    /// Remove control activated
    RemoveFromCart,

    // ─────────────────────────────────────────────────────────
    // Root Cart Messages (bubbled up from the product card)
    // ─────────────────────────────────────────────────────────
    /// Append a variant id to the cart
    CartAdd(VariantId),
    /// Drop every occurrence of a variant id from the cart
    CartRemove(VariantId),

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    FocusReviewForm,
    FocusCard,
    FocusNextField,
    FocusPreviousField,

    // ─────────────────────────────────────────────────────────
    // Review Form Messages
    // ─────────────────────────────────────────────────────────
    /// Name input changed
    ReviewNameInput { text: String },
    /// Review textarea changed
    ReviewTextInput { text: String },
    /// Rating select changed
    ReviewRatingInput(Option<Rating>),
    /// Recommendation radio changed
    ReviewRecommendInput(Option<Recommend>),
    /// Form submitted
    SubmitReview,
    /// The form produced a valid review (bubbled up to the product card)
    ReviewSubmitted(Review),
}
