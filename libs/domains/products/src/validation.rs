//! Pure payload validation for create and update requests.
//!
//! Both functions return the full list of violation messages so a
//! client sees every problem with its payload at once; an empty list
//! means the payload is valid. Neither function touches the store.
//!
//! Type mismatches (a string where a boolean belongs) are rejected
//! earlier by deserialization; these rules cover presence, emptiness
//! after trimming, and the non-negative price bound.

use crate::models::{CreateProduct, UpdateProduct};

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

/// Validate a create payload. All fields except `inStock` are required.
pub fn validate_create(input: &CreateProduct) -> Vec<String> {
    let mut violations = Vec::new();

    if is_blank(input.name.as_deref()) {
        violations.push("Name is required and must be a non-empty string".to_string());
    }

    if is_blank(input.description.as_deref()) {
        violations.push("Description is required and must be a non-empty string".to_string());
    }

    match input.price {
        Some(price) if price.is_finite() && price >= 0.0 => {}
        _ => violations.push("Price is required and must be a non-negative number".to_string()),
    }

    if is_blank(input.category.as_deref()) {
        violations.push("Category is required and must be a non-empty string".to_string());
    }

    violations
}

/// Validate an update payload. Every field is optional; a field is
/// checked only when present, and absence is never an error.
pub fn validate_update(input: &UpdateProduct) -> Vec<String> {
    let mut violations = Vec::new();

    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            violations.push("Name must be a non-empty string if provided".to_string());
        }
    }

    if let Some(description) = &input.description {
        if description.trim().is_empty() {
            violations.push("Description must be a non-empty string if provided".to_string());
        }
    }

    if let Some(price) = input.price {
        if !price.is_finite() || price < 0.0 {
            violations.push("Price must be a non-negative number if provided".to_string());
        }
    }

    if let Some(category) = &input.category {
        if category.trim().is_empty() {
            violations.push("Category must be a non-empty string if provided".to_string());
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateProduct {
        CreateProduct {
            name: Some("Monitor".to_string()),
            description: Some("27-inch 4K monitor".to_string()),
            price: Some(350.0),
            category: Some("electronics".to_string()),
            in_stock: Some(true),
        }
    }

    #[test]
    fn test_valid_create_payload_has_no_violations() {
        assert!(validate_create(&valid_create()).is_empty());
    }

    #[test]
    fn test_create_without_in_stock_is_valid() {
        let input = CreateProduct {
            in_stock: None,
            ..valid_create()
        };
        assert!(validate_create(&input).is_empty());
    }

    #[test]
    fn test_create_reports_all_missing_fields() {
        let violations = validate_create(&CreateProduct::default());
        assert_eq!(violations.len(), 4);
    }

    #[test]
    fn test_create_rejects_whitespace_only_name() {
        let input = CreateProduct {
            name: Some("   ".to_string()),
            ..valid_create()
        };
        let violations = validate_create(&input);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("Name"));
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let input = CreateProduct {
            price: Some(-1.0),
            ..valid_create()
        };
        let violations = validate_create(&input);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("Price"));
    }

    #[test]
    fn test_create_rejects_non_finite_price() {
        let input = CreateProduct {
            price: Some(f64::NAN),
            ..valid_create()
        };
        assert_eq!(validate_create(&input).len(), 1);
    }

    #[test]
    fn test_create_accepts_zero_price() {
        let input = CreateProduct {
            price: Some(0.0),
            ..valid_create()
        };
        assert!(validate_create(&input).is_empty());
    }

    #[test]
    fn test_empty_update_payload_is_valid() {
        assert!(validate_update(&UpdateProduct::default()).is_empty());
    }

    #[test]
    fn test_update_rejects_present_but_empty_fields() {
        let input = UpdateProduct {
            name: Some(String::new()),
            category: Some("  ".to_string()),
            ..Default::default()
        };
        let violations = validate_update(&input);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_update_rejects_negative_price() {
        let input = UpdateProduct {
            price: Some(-0.01),
            ..Default::default()
        };
        let violations = validate_update(&input);
        assert_eq!(violations, vec!["Price must be a non-negative number if provided"]);
    }

    #[test]
    fn test_update_in_stock_false_is_valid() {
        let input = UpdateProduct {
            in_stock: Some(false),
            ..Default::default()
        };
        assert!(validate_update(&input).is_empty());
    }
}
