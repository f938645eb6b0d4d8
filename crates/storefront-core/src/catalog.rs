//! Product catalog types
//!
//! A [`Product`] is the static data behind the product card: brand and name,
//! an ordered list of [`Variant`]s, the size labels and the description
//! bullet points. Catalogs are immutable once loaded; the card only tracks
//! which variant is selected.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a purchasable variant. Carts hold these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VariantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One color/style option of a product, with its own stock and image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    /// Color name, shown next to the swatch
    pub color: String,
    /// Image path, consumed as-is by the view
    pub image: String,
    /// Units available; zero means out of stock
    #[serde(default)]
    pub quantity: u32,
}

impl Variant {
    pub fn new(
        id: impl Into<VariantId>,
        color: impl Into<String>,
        image: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            image: image.into(),
            quantity,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Catalog data for a single product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub brand: String,
    pub name: String,
    /// Link opened from the product image
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub variants: Vec<Variant>,
}

impl Product {
    /// `"<brand> <name>"`
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    /// Variant at `index`, if it exists
    pub fn variant(&self, index: usize) -> Option<&Variant> {
        self.variants.get(index)
    }

    /// Check the invariants the product card relies on.
    ///
    /// A product needs at least one variant so the selected index always
    /// points at something. Duplicate variant ids are rejected because carts
    /// identify items by id only.
    pub fn validate(&self) -> Result<()> {
        if self.variants.is_empty() {
            return Err(Error::catalog_invalid(format!(
                "product '{}' has no variants",
                self.title()
            )));
        }

        for (i, variant) in self.variants.iter().enumerate() {
            if self.variants[..i].iter().any(|v| v.id == variant.id) {
                return Err(Error::catalog_invalid(format!(
                    "duplicate variant id {}",
                    variant.id
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate a catalog from TOML source
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let product: Product = toml::from_str(content)?;
        product.validate()?;
        Ok(product)
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let product = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded catalog '{}' with {} variants from {:?}",
            product.title(),
            product.variants.len(),
            path
        );
        Ok(product)
    }
}

impl Default for Product {
    /// The sock catalog the card ships with
    fn default() -> Self {
        Self {
            brand: "Vue Mastery".to_string(),
            name: "Socks".to_string(),
            link: Some("https://www.vuemastery.com/".to_string()),
            details: vec![
                "80% cotton".to_string(),
                "20% polyester".to_string(),
                "Gender-neutral".to_string(),
            ],
            sizes: ["XS", "S", "M", "L", "XL"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            variants: vec![
                Variant::new(2234, "green", "./assets/vmSocks-green-onWhite.jpg", 10),
                Variant::new(2235, "darkblue", "./assets/vmSocks-blue-onWhite.jpg", 100),
            ],
        }
    }
}

/// Shipping tier shown on the card.
///
/// Only two tiers exist: premium shoppers ship free, everyone else pays a
/// flat rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shipping {
    Free,
    Standard,
}

impl Shipping {
    pub fn for_premium(premium: bool) -> Self {
        if premium {
            Shipping::Free
        } else {
            Shipping::Standard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shipping::Free => "Free",
            Shipping::Standard => "$2.99",
        }
    }
}

impl fmt::Display for Shipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_title() {
        let product = Product::default();
        assert_eq!(product.title(), "Vue Mastery Socks");
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let product = Product::default();
        assert!(product.validate().is_ok());
        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.variants[0].id, VariantId(2234));
        assert_eq!(product.variants[1].quantity, 100);
        assert_eq!(product.sizes, vec!["XS", "S", "M", "L", "XL"]);
    }

    #[test]
    fn test_variant_in_stock_is_quantity_nonzero() {
        assert!(!Variant::new(1, "red", "red.jpg", 0).in_stock());
        assert!(Variant::new(1, "red", "red.jpg", 1).in_stock());
    }

    #[test]
    fn test_variant_lookup_out_of_range() {
        let product = Product::default();
        assert!(product.variant(1).is_some());
        assert!(product.variant(2).is_none());
    }

    #[test]
    fn test_validate_rejects_empty_variants() {
        let product = Product {
            variants: Vec::new(),
            ..Product::default()
        };
        let err = product.validate().unwrap_err();
        assert!(matches!(err, Error::CatalogInvalid { .. }));
        assert!(err.to_string().contains("no variants"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let product = Product {
            variants: vec![
                Variant::new(5, "red", "a.jpg", 1),
                Variant::new(5, "blue", "b.jpg", 1),
            ],
            ..Product::default()
        };
        let err = product.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate variant id 5"));
    }

    #[test]
    fn test_from_toml_str() {
        let content = r#"
brand = "Acme"
name = "Gloves"
details = ["wool"]
sizes = ["S", "L"]

[[variants]]
id = 1
color = "grey"
image = "grey.jpg"
quantity = 0

[[variants]]
id = 2
color = "black"
image = "black.jpg"
quantity = 3
"#;
        let product = Product::from_toml_str(content).unwrap();
        assert_eq!(product.title(), "Acme Gloves");
        assert_eq!(product.link, None);
        assert!(!product.variants[0].in_stock());
        assert_eq!(product.variants[1].id, VariantId(2));
    }

    #[test]
    fn test_from_toml_str_without_variants_fails() {
        let content = r#"
brand = "Acme"
name = "Nothing"
variants = []
"#;
        assert!(matches!(
            Product::from_toml_str(content),
            Err(Error::CatalogInvalid { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Product::load(Path::new("/definitely/not/here/catalog.toml")).unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound { .. }));
    }

    #[test]
    fn test_shipping_tiers() {
        assert_eq!(Shipping::for_premium(true).label(), "Free");
        assert_eq!(Shipping::for_premium(false).label(), "$2.99");
        assert_eq!(Shipping::Standard.to_string(), "$2.99");
    }
}
