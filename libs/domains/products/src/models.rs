use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Product entity - a single record in the in-memory catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned on creation and immutable thereafter
    pub id: Uuid,
    /// Product name (non-empty)
    pub name: String,
    /// Product description (non-empty)
    pub description: String,
    /// Non-negative price
    pub price: f64,
    /// Category, compared case-insensitively when filtering
    pub category: String,
    /// Stock availability flag
    pub in_stock: bool,
}

/// DTO for creating a new product.
///
/// Every field is optional at the deserialization layer so that missing
/// fields surface as validation violations instead of decode errors;
/// [`crate::validation::validate_create`] enforces the required ones.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    /// Defaults to `false` when omitted
    pub in_stock: Option<bool>,
}

/// DTO for partially updating an existing product.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// Query parameters for the filtered, paginated listing.
///
/// All values are kept as raw strings: query-string input is coerced
/// leniently (a non-numeric `page` falls back to the default instead of
/// failing the request), mirroring the service's historical behavior.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Case-insensitive exact category match
    pub category: Option<String>,
    /// "true" selects in-stock products; any other value selects the rest
    pub in_stock: Option<String>,
    /// Upper price bound; ignored when not parseable as a number
    pub max_price: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
}

/// One page of a filtered product listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub page: usize,
    pub limit: usize,
    /// Pre-pagination filtered count
    pub total: usize,
    pub total_pages: usize,
    pub data: Vec<Product>,
}

/// Result of a free-text search.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<Product>,
    pub count: usize,
}

/// Price aggregates over the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Aggregate statistics over the whole catalog.
///
/// `price_stats` is `None` for an empty catalog: JSON has no encoding
/// for the Infinity/NaN values an unguarded reduction would produce.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    /// Distinct categories (stored casing) mapped to product counts
    pub categories: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_stats: Option<PriceStats>,
}

impl Product {
    /// Build an entity from a create payload that already passed
    /// [`crate::validation::validate_create`].
    ///
    /// Assigns a fresh v7 UUID; `in_stock` defaults to `false` when the
    /// payload omitted it.
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            price: input.price.unwrap_or_default(),
            category: input.category.unwrap_or_default(),
            in_stock: input.in_stock.unwrap_or(false),
        }
    }

    /// Apply a partial update using the truthy-overwrite merge policy.
    ///
    /// `name`, `description` and `category` only overwrite when present
    /// and non-empty; `price` only when present and non-zero. This means
    /// a partial update cannot set a field back to `""` or `0` - a
    /// long-standing compatibility quirk kept on purpose. `in_stock` is
    /// the exception: it overwrites whenever present, so `false` takes
    /// effect.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            if !name.is_empty() {
                self.name = name;
            }
        }
        if let Some(description) = update.description {
            if !description.is_empty() {
                self.description = description;
            }
        }
        if let Some(price) = update.price {
            if price != 0.0 {
                self.price = price;
            }
        }
        if let Some(category) = update.category {
            if !category.is_empty() {
                self.category = category;
            }
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product {
            id: Uuid::now_v7(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_new_product_defaults_in_stock_to_false() {
        let product = Product::new(CreateProduct {
            name: Some("Desk Lamp".to_string()),
            description: Some("LED desk lamp".to_string()),
            price: Some(25.0),
            category: Some("furniture".to_string()),
            in_stock: None,
        });

        assert!(!product.in_stock);
        assert_eq!(product.price, 25.0);
    }

    #[test]
    fn test_new_products_get_distinct_ids() {
        let input = CreateProduct {
            name: Some("Laptop".to_string()),
            description: Some("Same payload twice".to_string()),
            price: Some(1200.0),
            category: Some("electronics".to_string()),
            in_stock: Some(true),
        };

        let first = Product::new(input.clone());
        let second = Product::new(input);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_overwrites_present_truthy_fields() {
        let mut product = laptop();
        product.apply_update(UpdateProduct {
            price: Some(99.0),
            ..Default::default()
        });

        assert_eq!(product.price, 99.0);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.category, "electronics");
        assert!(product.in_stock);
    }

    #[test]
    fn test_update_ignores_empty_string_and_zero() {
        let mut product = laptop();
        product.apply_update(UpdateProduct {
            name: Some(String::new()),
            price: Some(0.0),
            ..Default::default()
        });

        // Truthy-overwrite: falsy values leave the stored fields alone
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price, 1200.0);
    }

    #[test]
    fn test_update_in_stock_false_takes_effect() {
        let mut product = laptop();
        product.apply_update(UpdateProduct {
            in_stock: Some(false),
            ..Default::default()
        });

        // in_stock is presence-checked, not truthy-checked
        assert!(!product.in_stock);
    }

    #[test]
    fn test_update_with_empty_payload_is_a_no_op() {
        let mut product = laptop();
        let before = product.clone();
        product.apply_update(UpdateProduct::default());

        assert_eq!(product, before);
    }

    #[test]
    fn test_product_serializes_with_camel_case_wire_names() {
        let product = laptop();
        let json = serde_json::to_value(&product).unwrap();

        assert!(json.get("inStock").is_some());
        assert!(json.get("in_stock").is_none());
    }
}
