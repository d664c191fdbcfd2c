use std::cmp::Ordering;

use crate::domain::order::OrderView;
use crate::domain::product::ProductView;

use super::criteria::{OrderCriteria, ProductCriteria, Sort, SortDirection, SortKey};

/// Rows of `source` matching every active predicate, sorted if a sort is set.
///
/// Without a sort the load order of `source` is kept. Sorting is stable, so ties
/// stay in load order in both directions.
pub fn filter_products<'a>(
    source: &'a [ProductView],
    criteria: &ProductCriteria,
) -> Vec<&'a ProductView> {
    let query = criteria.query.to_lowercase();

    let mut rows: Vec<&ProductView> = source
        .iter()
        .filter(|p| query.is_empty() || product_matches_text(p, &query))
        .filter(|p| matches_selection(&p.supplier, criteria.supplier.as_deref()))
        .filter(|p| matches_selection(&p.category, criteria.category.as_deref()))
        .collect();

    if let Some(sort) = criteria.sort {
        rows.sort_by(|a, b| compare_products(a, b, sort));
    }

    rows
}

pub fn filter_orders<'a>(source: &'a [OrderView], criteria: &OrderCriteria) -> Vec<&'a OrderView> {
    let query = criteria.query.to_lowercase();

    source
        .iter()
        .filter(|o| query.is_empty() || o.receipt_code.to_string().contains(&query))
        .filter(|o| matches_selection(&o.status, criteria.status.as_deref()))
        .collect()
}

fn product_matches_text(product: &ProductView, query: &str) -> bool {
    [
        &product.name,
        &product.article,
        &product.description,
        &product.brand,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(query))
}

fn matches_selection(value: &str, selected: Option<&str>) -> bool {
    selected.map_or(true, |s| value == s)
}

fn compare_products(a: &ProductView, b: &ProductView, sort: Sort) -> Ordering {
    let ordering = match sort.key {
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Discount => a.discount_percent.cmp(&b.discount_percent),
    };
    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
