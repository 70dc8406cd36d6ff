//! Catalog presentation helpers: search, featured slice, price display.

use crate::config::{FEATURED_COUNT, INR_PER_USD};
use crate::models::Product;

/// Products whose title or description contains `term`, ignoring case.
///
/// An empty or whitespace-only term matches everything. Order is preserved.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The last [`FEATURED_COUNT`] products, in catalog order.
pub fn featured(products: &[Product]) -> &[Product] {
    let start = products.len().saturating_sub(FEATURED_COUNT);
    &products[start..]
}

/// Price converted to rupees with two decimals, e.g. `₹912.59`.
pub fn format_price_inr(price_usd: f64) -> String {
    format!("₹{:.2}", price_usd * INR_PER_USD)
}
