//! Product card state
//!
//! Owns the catalog entry, the selected variant, the submitted reviews and
//! the nested review form. Everything the card displays is derived from the
//! catalog and `selected`, so the derived values cannot drift from the
//! selection.

use storefront_core::prelude::*;
use storefront_core::{Product, Review, Shipping, Variant, VariantId};

use super::product_details::ProductDetails;
use super::review_form::ReviewFormState;

/// Events the card hands to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductEvent {
    AddToCart(VariantId),
    RemoveFromCart(VariantId),
}

#[derive(Debug, Clone)]
pub struct ProductCard {
    product: Product,
    /// Always `< product.variants.len()`
    selected: usize,
    reviews: Vec<Review>,
    pub review_form: ReviewFormState,
}

impl Default for ProductCard {
    fn default() -> Self {
        Self {
            product: Product::default(),
            selected: 0,
            reviews: Vec::new(),
            review_form: ReviewFormState::new(),
        }
    }
}

impl ProductCard {
    /// Build a card for `product`, starting on the first variant.
    ///
    /// Fails when the catalog has no variants.
    pub fn new(product: Product) -> Result<Self> {
        product.validate()?;
        Ok(Self {
            product,
            ..Self::default()
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn variants(&self) -> &[Variant] {
        &self.product.variants
    }

    pub fn sizes(&self) -> &[String] {
        &self.product.sizes
    }

    pub fn details(&self) -> ProductDetails<'_> {
        ProductDetails::new(&self.product.details)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_variant(&self) -> &Variant {
        &self.product.variants[self.selected]
    }

    // ─────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────

    pub fn title(&self) -> String {
        self.product.title()
    }

    pub fn image(&self) -> &str {
        &self.selected_variant().image
    }

    pub fn link(&self) -> Option<&str> {
        self.product.link.as_deref()
    }

    /// Raw stock count of the selected variant
    pub fn quantity(&self) -> u32 {
        self.selected_variant().quantity
    }

    /// Whether the selected variant can be added to the cart
    pub fn in_stock(&self) -> bool {
        self.selected_variant().in_stock()
    }

    pub fn shipping(&self, premium: bool) -> Shipping {
        Shipping::for_premium(premium)
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    // ─────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────

    /// Select the variant at `index`.
    ///
    /// Out-of-range indices are rejected and the selection is unchanged.
    pub fn select_variant(&mut self, index: usize) -> Result<()> {
        let len = self.product.variants.len();
        if index >= len {
            return Err(Error::VariantOutOfRange { index, len });
        }
        self.selected = index;
        trace!("Selected variant {} ({})", index, self.selected_variant().id);
        Ok(())
    }

    /// Select the next variant; stays on the last one
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.product.variants.len() {
            self.selected += 1;
        }
    }

    /// Select the previous variant; stays on the first one
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Add-to-cart control. Disabled (no event) while out of stock.
    pub fn add_to_cart(&self) -> Option<ProductEvent> {
        if !self.in_stock() {
            debug!(
                "Add to cart ignored: variant {} is out of stock",
                self.selected_variant().id
            );
            return None;
        }
        Some(ProductEvent::AddToCart(self.selected_variant().id))
    }

    /// Remove control. Always enabled.
    pub fn remove_from_cart(&self) -> ProductEvent {
        ProductEvent::RemoveFromCart(self.selected_variant().id)
    }

    /// Append a submitted review
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Rating, Recommend};

    fn review(name: &str, rating: u8) -> Review {
        Review {
            name: name.to_string(),
            review: format!("{name} likes it"),
            rating: Rating::new(rating).unwrap(),
            recommend: Recommend::Yes,
        }
    }

    fn card_with_stock(quantities: &[u32]) -> ProductCard {
        let variants = quantities
            .iter()
            .enumerate()
            .map(|(i, q)| Variant::new(100 + i as u32, format!("c{i}"), format!("img{i}.jpg"), *q))
            .collect();
        ProductCard::new(Product {
            variants,
            ..Product::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_card_starts_on_first_variant() {
        let card = ProductCard::default();
        assert_eq!(card.selected_index(), 0);
        assert_eq!(card.title(), "Vue Mastery Socks");
        assert_eq!(card.image(), "./assets/vmSocks-green-onWhite.jpg");
        assert_eq!(card.link(), Some("https://www.vuemastery.com/"));
        assert_eq!(card.quantity(), 10);
        assert!(card.in_stock());
    }

    #[test]
    fn test_new_rejects_product_without_variants() {
        let result = ProductCard::new(Product {
            variants: Vec::new(),
            ..Product::default()
        });
        assert!(matches!(result, Err(Error::CatalogInvalid { .. })));
    }

    #[test]
    fn test_select_variant_updates_derived_fields() {
        let mut card = card_with_stock(&[5, 0, 7]);
        for i in 0..card.variants().len() {
            card.select_variant(i).unwrap();
            let variant = &card.variants()[i];
            assert_eq!(card.image(), variant.image);
            assert_eq!(card.quantity(), variant.quantity);
            assert_eq!(card.in_stock(), variant.quantity > 0);
        }
    }

    #[test]
    fn test_select_variant_out_of_range_keeps_selection() {
        let mut card = ProductCard::default();
        card.select_variant(1).unwrap();

        let err = card.select_variant(2).unwrap_err();

        assert!(matches!(err, Error::VariantOutOfRange { index: 2, len: 2 }));
        assert_eq!(card.selected_index(), 1);
    }

    #[test]
    fn test_select_next_and_previous_clamp() {
        let mut card = ProductCard::default();
        card.select_previous();
        assert_eq!(card.selected_index(), 0);
        card.select_next();
        card.select_next();
        assert_eq!(card.selected_index(), 1);
    }

    #[test]
    fn test_add_to_cart_emits_selected_id() {
        let mut card = ProductCard::default();
        card.select_variant(1).unwrap();
        assert_eq!(
            card.add_to_cart(),
            Some(ProductEvent::AddToCart(VariantId(2235)))
        );
    }

    #[test]
    fn test_add_to_cart_disabled_when_out_of_stock() {
        let card = card_with_stock(&[0]);
        assert!(!card.in_stock());
        assert_eq!(card.add_to_cart(), None);
    }

    #[test]
    fn test_remove_from_cart_always_enabled() {
        let card = card_with_stock(&[0]);
        assert_eq!(
            card.remove_from_cart(),
            ProductEvent::RemoveFromCart(VariantId(100))
        );
    }

    #[test]
    fn test_shipping_tiers() {
        let card = ProductCard::default();
        assert_eq!(card.shipping(true), Shipping::Free);
        assert_eq!(card.shipping(false).label(), "$2.99");
    }

    #[test]
    fn test_add_review_appends_in_order() {
        let mut card = ProductCard::default();
        card.add_review(review("Ada", 5));
        let before = card.reviews().to_vec();

        card.add_review(review("Grace", 3));

        assert_eq!(card.reviews().len(), before.len() + 1);
        assert_eq!(&card.reviews()[..before.len()], before.as_slice());
        assert_eq!(card.reviews()[1].name, "Grace");
    }
}
