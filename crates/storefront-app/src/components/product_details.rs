//! Read-only list of product description bullets

/// Borrowed view over the detail strings of a product.
///
/// An empty slice is valid and yields no items.
#[derive(Debug, Clone, Copy)]
pub struct ProductDetails<'a> {
    details: &'a [String],
}

impl<'a> ProductDetails<'a> {
    pub fn new(details: &'a [String]) -> Self {
        Self { details }
    }

    /// Items in input order
    pub fn items(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.details.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}
