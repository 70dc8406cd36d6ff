//! Product records as served by the catalog endpoint.

use serde::{Deserialize, Serialize};

/// Aggregate customer rating attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A single catalog entry.
///
/// Products are immutable once fetched; the client only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    /// Price in the source currency (USD).
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URI.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Session cache entry: the last successful fetch and when it happened.
///
/// Serialized as `{"timestamp": <epoch ms>, "products": [...]}`. Written
/// wholesale on every successful fetch, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedPayload {
    /// Epoch milliseconds of the fetch that produced `products`.
    pub timestamp: u64,
    pub products: Vec<Product>,
}

impl CachedPayload {
    pub fn new(timestamp: u64, products: Vec<Product>) -> Self {
        Self {
            timestamp,
            products,
        }
    }

    /// Age of the payload at `now_ms`. Entries stamped in the future have age zero.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.timestamp)
    }

    /// A payload is fresh iff its age is strictly below the TTL.
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) < ttl_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: u64 = 5 * 60 * 1000;

    fn payload(timestamp: u64) -> CachedPayload {
        CachedPayload::new(timestamp, Vec::new())
    }

    #[test]
    fn test_freshness_boundary() {
        let p = payload(1_000);
        assert!(p.is_fresh(1_000, TTL));
        assert!(p.is_fresh(1_000 + TTL - 1, TTL));
        assert!(!p.is_fresh(1_000 + TTL, TTL));
        assert!(!p.is_fresh(1_000 + TTL * 3, TTL));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let p = payload(10_000);
        assert_eq!(p.age_ms(5_000), 0);
        assert!(p.is_fresh(5_000, TTL));
    }

    #[test]
    fn test_product_without_rating() {
        let json = r#"{"id":7,"title":"Mug","price":9.5,"description":"A mug","category":"home","image":"https://img/7.png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert!(product.rating.is_none());
        assert!(!serde_json::to_string(&product).unwrap().contains("rating"));
    }

    #[test]
    fn test_payload_wire_shape() {
        let json = r#"{"timestamp":1700000000000,"products":[{"id":1,"title":"Bag","price":109.95,"description":"d","category":"c","image":"i","rating":{"rate":3.9,"count":120}}]}"#;
        let payload: CachedPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.timestamp, 1_700_000_000_000);
        assert_eq!(payload.products.len(), 1);
        assert_eq!(
            payload.products[0].rating,
            Some(Rating {
                rate: 3.9,
                count: 120
            })
        );
    }
}
