//! Product catalog.

/// Price used for products not in the catalog.
pub const FALLBACK_PRICE: f64 = 500.0;

/// A sellable product.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub product_key: String,
    pub category: String,
    pub unit_price: f64,
}

impl CatalogEntry {
    pub fn new(product_key: impl Into<String>, category: impl Into<String>, unit_price: f64) -> Self {
        Self {
            product_key: product_key.into(),
            category: category.into(),
            unit_price,
        }
    }
}

/// Fixed list of products the simulator draws from.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from explicit entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unit price for a product key, or `FALLBACK_PRICE` if unknown.
    pub fn price_of(&self, product_key: &str) -> f64 {
        self.entries
            .iter()
            .find(|e| e.product_key == product_key)
            .map(|e| e.unit_price)
            .unwrap_or(FALLBACK_PRICE)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            CatalogEntry::new("iPhone 15", "Phone", 799.0),
            CatalogEntry::new("iPhone 15 Pro Max", "Phone", 1199.0),
            CatalogEntry::new("MacBook Air", "Laptop", 999.0),
            CatalogEntry::new("MacBook Pro 16\"", "Laptop", 2499.0),
            CatalogEntry::new("iPad Pro", "Tablet", 1099.0),
            CatalogEntry::new("iPad Mini", "Tablet", 499.0),
            CatalogEntry::new("AirPods Pro", "Audio", 249.0),
            CatalogEntry::new("AirPods Max", "Audio", 549.0),
            CatalogEntry::new("Apple Watch Series 9", "Wearable", 399.0),
            CatalogEntry::new("Apple Watch Ultra 2", "Wearable", 799.0),
            CatalogEntry::new("Apple TV 4K", "Media", 129.0),
            CatalogEntry::new("HomePod Mini", "Smart Home", 99.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.entries()[0].product_key, "iPhone 15");
        assert_eq!(catalog.entries()[11].category, "Smart Home");
    }

    #[test]
    fn test_price_lookup() {
        let catalog = Catalog::default();
        assert_relative_eq!(catalog.price_of("MacBook Pro 16\""), 2499.0);
        assert_relative_eq!(catalog.price_of("HomePod Mini"), 99.0);
        assert_relative_eq!(catalog.price_of("Vision Pro"), FALLBACK_PRICE);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(vec![CatalogEntry::new("Widget", "Misc", 1.5)]);
        assert!(!catalog.is_empty());
        assert_relative_eq!(catalog.price_of("Widget"), 1.5);
    }
}
