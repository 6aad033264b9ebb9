//! Query engine - pure read-side functions over store snapshots.
//!
//! Every function takes an immutable snapshot and never mutates it;
//! the store stays the only writer. All scans are linear.

use std::collections::BTreeMap;

use crate::error::{ProductError, ProductResult};
use crate::models::{CatalogStats, ListQuery, PriceStats, Product, ProductPage, SearchResults};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Lenient positive-integer coercion for pagination parameters.
///
/// Absent, non-numeric, zero and negative values all fall back to the
/// default, so the slice arithmetic below is total.
fn coerce_positive(raw: Option<&String>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// Filter a snapshot and slice out the requested page.
///
/// Filters are conjunctive and applied in a fixed order (category,
/// stock flag, price bound), though each is an independent predicate so
/// the order never changes the result set:
/// - `category`: case-insensitive exact match
/// - `inStock`: the literal string "true" (any casing) selects in-stock
///   products, any other value selects out-of-stock ones
/// - `maxPrice`: numeric upper bound; an unparseable value skips the
///   filter rather than failing the request
///
/// `total` counts the filtered set before pagination and
/// `totalPages = ceil(total / limit)`.
pub fn filter_and_paginate(snapshot: &[Product], query: &ListQuery) -> ProductPage {
    let mut filtered: Vec<&Product> = snapshot.iter().collect();

    if let Some(category) = &query.category {
        filtered.retain(|p| p.category.eq_ignore_ascii_case(category));
    }

    if let Some(in_stock) = &query.in_stock {
        let wanted = in_stock.eq_ignore_ascii_case("true");
        filtered.retain(|p| p.in_stock == wanted);
    }

    if let Some(raw) = &query.max_price {
        if let Ok(max_price) = raw.trim().parse::<f64>() {
            filtered.retain(|p| p.price <= max_price);
        }
    }

    let page = coerce_positive(query.page.as_ref(), DEFAULT_PAGE);
    let limit = coerce_positive(query.limit.as_ref(), DEFAULT_LIMIT);

    let total = filtered.len();
    let start_index = (page - 1).saturating_mul(limit);
    let data: Vec<Product> = filtered
        .into_iter()
        .skip(start_index)
        .take(limit)
        .cloned()
        .collect();

    ProductPage {
        page,
        limit,
        total,
        total_pages: total.div_ceil(limit),
        data,
    }
}

/// Case-insensitive substring search over name and description.
///
/// An empty query is a validation error; there is no "match everything"
/// search.
pub fn search(snapshot: &[Product], query: &str) -> ProductResult<SearchResults> {
    if query.is_empty() {
        return Err(ProductError::Validation(vec![
            "Search query parameter \"q\" is required".to_string(),
        ]));
    }

    let needle = query.to_lowercase();
    let results: Vec<Product> = snapshot
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    let count = results.len();
    Ok(SearchResults {
        query: query.to_string(),
        results,
        count,
    })
}

/// Aggregate statistics over a snapshot.
///
/// Category counts are keyed by the stored casing. Price aggregates are
/// omitted entirely for an empty catalog instead of emitting the
/// Infinity/NaN a bare reduction would yield.
pub fn stats(snapshot: &[Product]) -> CatalogStats {
    let in_stock = snapshot.iter().filter(|p| p.in_stock).count();

    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    for product in snapshot {
        *categories.entry(product.category.clone()).or_insert(0) += 1;
    }

    let price_stats = if snapshot.is_empty() {
        None
    } else {
        let min = snapshot.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
        let max = snapshot
            .iter()
            .map(|p| p.price)
            .fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = snapshot.iter().map(|p| p.price).sum();
        Some(PriceStats {
            min,
            max,
            average: sum / snapshot.len() as f64,
        })
    };

    CatalogStats {
        total_products: snapshot.len(),
        in_stock,
        out_of_stock: snapshot.len() - in_stock,
        categories,
        price_stats,
    }
}
