//! Shopping cart owned by the root app
//!
//! The cart is an ordered multiset of variant ids: adding pushes to the end,
//! duplicates are allowed, and removing an id drops every occurrence.

use serde::Serialize;

use crate::catalog::VariantId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<VariantId>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` to the end of the cart
    pub fn add(&mut self, id: VariantId) {
        self.items.push(id);
    }

    /// Remove every occurrence of `id`, returning how many were dropped
    pub fn remove_all(&mut self, id: VariantId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| *item != id);
        before - self.items.len()
    }

    pub fn items(&self) -> &[VariantId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of times `id` appears in the cart
    pub fn count_of(&self, id: VariantId) -> usize {
        self.items.iter().filter(|item| **item == id).count()
    }
}

impl FromIterator<VariantId> for Cart {
    fn from_iter<I: IntoIterator<Item = VariantId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
