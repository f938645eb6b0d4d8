//! Root cart reducers and their message handlers

use storefront_core::prelude::*;
use storefront_core::{Cart, ShopEvent, VariantId};

use crate::state::AppState;

use super::UpdateResult;

/// Append `id` to the cart
pub fn add_cart(cart: &mut Cart, id: VariantId) {
    cart.add(id);
}

/// Remove every occurrence of `id` from the cart, returning the count removed
pub fn remove_cart(cart: &mut Cart, id: VariantId) -> usize {
    cart.remove_all(id)
}

pub(super) fn handle_cart_add(state: &mut AppState, id: VariantId) -> UpdateResult {
    add_cart(&mut state.cart, id);
    info!("add-to-cart {} (cart size {})", id, state.cart.len());
    UpdateResult::emit(ShopEvent::AddToCart {
        variant_id: id,
        cart: state.cart.items().to_vec(),
    })
}

pub(super) fn handle_cart_remove(state: &mut AppState, id: VariantId) -> UpdateResult {
    let removed = remove_cart(&mut state.cart, id);
    info!(
        "remove-from-cart {} removed {} (cart size {})",
        id,
        removed,
        state.cart.len()
    );
    UpdateResult::emit(ShopEvent::RemoveFromCart {
        variant_id: id,
        removed,
        cart: state.cart.items().to_vec(),
    })
}
