//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Store name shown in the navbar and footer.
pub const APP_NAME: &str = "Multi-Theme Store";

// =============================================================================
// Product Source
// =============================================================================

/// Endpoint returning the product collection as a JSON array.
pub const PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// sessionStorage key for the product cache.
pub const PRODUCTS_CACHE_KEY: &str = "fakestore_products_cache_v1";

/// How long a cached product list counts as fresh (5 minutes).
pub const CACHE_TTL_MS: u64 = 5 * 60 * 1000;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Theme
// =============================================================================

/// localStorage key for the theme preference.
pub const THEME_KEY: &str = "theme";

// =============================================================================
// Catalog Display
// =============================================================================

/// Number of products featured on the home page.
pub const FEATURED_COUNT: usize = 5;

/// Fixed USD to INR rate used for displayed prices.
pub const INR_PER_USD: f64 = 83.0;
