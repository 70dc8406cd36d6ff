//! Cached access to the remote product collection.
//!
//! [`ProductSource`] decides between the session cache and the network:
//!
//! 1. Read and parse the cache entry. A malformed entry counts as a miss.
//! 2. Fast path: unless a refresh is forced, a fresh entry is returned
//!    without touching the network.
//! 3. Otherwise issue one GET. Success overwrites the cache; failure falls
//!    back to the cached products (of any age) if there are some.
//!
//! The only suspension point is the network call. After it resumes the
//! cancellation token is checked, and a cancelled attempt neither writes
//! the cache nor reports a result.

use crate::config::{CACHE_TTL_MS, PRODUCTS_CACHE_KEY, PRODUCTS_URL};
use crate::core::cancel::CancellationToken;
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::{FetchError, StorageError};
use crate::core::storage::{BrowserStore, KeyValueStore};
use crate::core::transport::{BrowserTransport, Transport};
use crate::models::{CachedPayload, Product};
use crate::utils::cache;

/// Where products come from and how long they stay fresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: String,
    pub cache_key: String,
    pub ttl_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: PRODUCTS_URL.to_string(),
            cache_key: PRODUCTS_CACHE_KEY.to_string(),
            ttl_ms: CACHE_TTL_MS,
        }
    }
}

/// How a completed load resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Fresh cache hit; no request was made.
    Cached(Vec<Product>),
    /// Network fetch succeeded. `cache_write` holds the error if the
    /// products could not be stored for next time.
    Fetched {
        products: Vec<Product>,
        cache_write: Option<StorageError>,
    },
    /// Network fetch failed; serving the previous cache entry.
    Stale {
        products: Vec<Product>,
        reason: FetchError,
    },
    /// Network fetch failed with nothing cached.
    Failed(FetchError),
}

impl LoadOutcome {
    /// Products to display, if any.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            Self::Cached(p) | Self::Fetched { products: p, .. } | Self::Stale { products: p, .. } => {
                Some(p)
            }
            Self::Failed(_) => None,
        }
    }

    /// Consumer-facing error text, if the load did not fully succeed.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Cached(_) | Self::Fetched { .. } => None,
            Self::Stale { reason, .. } => {
                Some(format!("Using stale cache due to fetch error: {}", reason))
            }
            Self::Failed(reason) => Some(reason.to_string()),
        }
    }
}

/// The `{data, loading, error}` triple a view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState {
    pub data: Option<Vec<Product>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FetchState {
    /// State before the first load resolves.
    pub fn new() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    /// Enter a new attempt: loading, previous error cleared, data kept.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a finished attempt.
    ///
    /// `Failed` leaves `data` as it was.
    pub fn resolve(&mut self, outcome: LoadOutcome) {
        self.error = outcome.error_message();
        match outcome {
            LoadOutcome::Cached(products)
            | LoadOutcome::Fetched { products, .. }
            | LoadOutcome::Stale { products, .. } => self.data = Some(products),
            LoadOutcome::Failed(_) => {}
        }
        self.loading = false;
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches products with a session cache and stale fallback.
pub struct ProductSource<S, T, C = SystemClock> {
    store: S,
    transport: T,
    clock: C,
    config: SourceConfig,
}

impl ProductSource<BrowserStore, BrowserTransport, SystemClock> {
    /// sessionStorage cache, Fetch API transport, default endpoint.
    pub fn browser() -> Self {
        Self::new(
            BrowserStore::session(),
            BrowserTransport::default(),
            SystemClock,
            SourceConfig::default(),
        )
    }
}

impl<S, T, C> ProductSource<S, T, C>
where
    S: KeyValueStore,
    T: Transport,
    C: Clock,
{
    pub fn new(store: S, transport: T, clock: C, config: SourceConfig) -> Self {
        Self {
            store,
            transport,
            clock,
            config,
        }
    }

    /// The current cache entry, or `None` if absent or unparseable.
    pub fn cached(&self) -> Option<CachedPayload> {
        cache::get(&self.store, &self.config.cache_key)
    }

    /// Run one load attempt.
    ///
    /// Returns `None` if `cancel` fired; the caller must then leave its
    /// state alone.
    pub async fn load(
        &self,
        force_refresh: bool,
        cancel: &CancellationToken,
    ) -> Option<LoadOutcome> {
        if cancel.is_cancelled() {
            return None;
        }

        let cached = self.cached();

        if !force_refresh
            && let Some(payload) = &cached
            && payload.is_fresh(self.clock.now_ms(), self.config.ttl_ms)
        {
            return Some(LoadOutcome::Cached(payload.products.clone()));
        }

        let result = self.fetch().await;
        if cancel.is_cancelled() {
            return None;
        }

        let outcome = match result {
            Ok(products) => {
                // A full or missing storage area does not fail the load.
                let cache_write = self.store_products(&products).err();
                LoadOutcome::Fetched {
                    products,
                    cache_write,
                }
            }
            Err(reason) => match cached {
                Some(payload) => LoadOutcome::Stale {
                    products: payload.products,
                    reason,
                },
                None => LoadOutcome::Failed(reason),
            },
        };
        Some(outcome)
    }

    async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        let body = self.transport.get_text(&self.config.url).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::JsonParseError(e.to_string()))
    }

    fn store_products(&self, products: &[Product]) -> Result<(), StorageError> {
        let payload = CachedPayload::new(self.clock.now_ms(), products.to_vec());
        cache::set(&self.store, &self.config.cache_key, &payload)
    }
}
