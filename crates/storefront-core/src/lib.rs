//! # storefront-core - Core Domain Types
//!
//! Foundation crate for Storefront. Provides the catalog, review and cart
//! types, the outward event type, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`Product`] - Brand, name, variants, sizes and detail bullets
//! - [`Variant`], [`VariantId`] - A purchasable color option and its id
//! - [`Shipping`] - Free vs. standard shipping tier
//!
//! ### Reviews (`review`)
//! - [`Review`] - A validated review record
//! - [`Rating`] - 1..=5 star rating
//! - [`Recommend`] - yes/no recommendation
//!
//! ### Cart (`cart`)
//! - [`Cart`] - Ordered multiset of variant ids
//!
//! ### Events (`events`)
//! - [`ShopEvent`] - Upward events surfaced to the event loop
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use storefront_core::prelude::*;
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod events;
pub mod logging;
pub mod review;

/// Prelude for common imports used throughout all Storefront crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use cart::Cart;
pub use catalog::{Product, Shipping, Variant, VariantId};
pub use error::{Error, Result, ResultExt};
pub use events::ShopEvent;
pub use review::{Rating, Recommend, Review};
