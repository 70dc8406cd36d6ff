//! Custom hooks shared by pages.

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::clock::Clock;
use crate::core::transport::Transport;
use crate::core::{CancellationToken, FetchState, KeyValueStore, LoadOutcome, ProductSource};
use crate::models::Product;
use crate::utils::dom;

/// Read-only view of a product load.
///
/// `data` stays set while a later load is in flight, and is shown even when
/// `error` reports a stale-cache fallback.
#[derive(Clone, Copy)]
pub struct ProductsData {
    pub data: Signal<Option<Vec<Product>>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Load the product catalog from the browser source.
///
/// `refresh` is a request counter. The first run may use a fresh cache;
/// every later change of the counter forces a network fetch.
pub fn use_products(refresh: Signal<u32>) -> ProductsData {
    use_products_with(refresh, ProductSource::browser)
}

/// [`use_products`] with the source built by `make_source` on each run.
pub fn use_products_with<F, S, T, C>(refresh: Signal<u32>, make_source: F) -> ProductsData
where
    F: Fn() -> ProductSource<S, T, C> + 'static,
    S: KeyValueStore + 'static,
    T: Transport + 'static,
    C: Clock + 'static,
{
    let state = RwSignal::new(FetchState::new());

    Effect::new(move |previous: Option<u32>| {
        let request = refresh.get();
        let force_refresh = forces_refresh(previous);
        spawn_local(start_load(state, make_source(), force_refresh));
        request
    });

    ProductsData {
        data: Signal::derive(move || state.with(|s| s.data.clone())),
        loading: Signal::derive(move || state.with(|s| s.loading)),
        error: Signal::derive(move || state.with(|s| s.error.clone())),
    }
}

/// Whether a run of the products effect must bypass a fresh cache.
///
/// The first run (`previous` is `None`) may be served from cache. Any later
/// run was triggered by a new refresh request and always fetches.
fn forces_refresh(previous: Option<u32>) -> bool {
    previous.is_some()
}

/// Begin one load attempt under the current owner.
///
/// Marks `state` loading and returns the task to spawn. The attempt's
/// [`CancellationToken`] is cancelled when the owner is cleaned up (the
/// effect re-runs or the component unmounts); a cancelled attempt never
/// touches `state`.
fn start_load<S, T, C>(
    state: RwSignal<FetchState>,
    source: ProductSource<S, T, C>,
    force_refresh: bool,
) -> impl Future<Output = ()> + 'static
where
    S: KeyValueStore + 'static,
    T: Transport + 'static,
    C: Clock + 'static,
{
    let token = CancellationToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    state.update(FetchState::begin);

    async move {
        let Some(outcome) = source.load(force_refresh, &token).await else {
            return;
        };
        if let Some(warning) = warning(&outcome) {
            dom::console_warn(&warning);
        }
        state.update(|s| s.resolve(outcome));
    }
}

/// Console message for a degraded load.
fn warning(outcome: &LoadOutcome) -> Option<String> {
    match outcome {
        LoadOutcome::Stale { products, reason } => Some(format!(
            "Product fetch failed, serving {} stale cached products: {}",
            products.len(),
            reason
        )),
        LoadOutcome::Failed(reason) => Some(format!("Product fetch failed: {}", reason)),
        LoadOutcome::Fetched {
            cache_write: Some(e),
            ..
        } => Some(format!("Failed to cache products: {}", e)),
        LoadOutcome::Cached(_) | LoadOutcome::Fetched { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tokio::sync::oneshot;

    use super::*;
    use crate::core::clock::SystemClock;
    use crate::core::error::{FetchError, StorageError};
    use crate::core::storage::MemoryStore;
    use crate::core::source::SourceConfig;

    type Response = Result<String, FetchError>;

    /// Responds once, when the test releases the paired sender.
    struct GatedTransport {
        gate: RefCell<Option<oneshot::Receiver<Response>>>,
    }

    impl Transport for GatedTransport {
        async fn get_text(&self, _url: &str) -> Response {
            let Some(rx) = self.gate.borrow_mut().take() else {
                return Err(FetchError::NetworkError("already answered".into()));
            };
            rx.await
                .unwrap_or_else(|_| Err(FetchError::NetworkError("gate dropped".into())))
        }
    }

    struct ReadyTransport(Vec<Product>);

    impl Transport for ReadyTransport {
        async fn get_text(&self, _url: &str) -> Response {
            Ok(serde_json::to_string(&self.0).unwrap())
        }
    }

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 1.0,
            description: String::new(),
            category: "misc".into(),
            image: String::new(),
            rating: None,
        }
    }

    fn products(n: u64) -> Vec<Product> {
        (1..=n).map(product).collect()
    }

    fn gated_source() -> (
        oneshot::Sender<Response>,
        ProductSource<MemoryStore, GatedTransport, SystemClock>,
    ) {
        let (tx, rx) = oneshot::channel();
        let transport = GatedTransport {
            gate: RefCell::new(Some(rx)),
        };
        let source =
            ProductSource::new(MemoryStore::new(), transport, SystemClock, SourceConfig::default());
        (tx, source)
    }

    fn ready_source(
        products: Vec<Product>,
    ) -> ProductSource<MemoryStore, ReadyTransport, SystemClock> {
        ProductSource::new(
            MemoryStore::new(),
            ReadyTransport(products),
            SystemClock,
            SourceConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_superseded_load_never_reaches_state() {
        let root = Owner::new();
        root.set();
        let state = RwSignal::new(FetchState::new());

        let (release_first, first_source) = gated_source();
        let first_run = Owner::new();
        let first = first_run.with(|| start_load(state, first_source, false));

        let second_run = Owner::new();
        let driver = async {
            // Let the first load reach its network call.
            tokio::task::yield_now().await;
            first_run.cleanup();

            let second = second_run.with(|| start_load(state, ready_source(products(2)), true));
            second.await;
            assert_eq!(state.get_untracked().data, Some(products(2)));

            let _ = release_first.send(Ok(serde_json::to_string(&products(5)).unwrap()));
        };
        tokio::join!(first, driver);

        let final_state = state.get_untracked();
        assert_eq!(final_state.data, Some(products(2)));
        assert!(!final_state.loading);
        assert_eq!(final_state.error, None);
    }

    #[tokio::test]
    async fn test_unmounted_load_never_reaches_state() {
        let root = Owner::new();
        root.set();
        let state = RwSignal::new(FetchState::new());

        let (release, source) = gated_source();
        let view_owner = Owner::new();
        let load = view_owner.with(|| start_load(state, source, false));

        let driver = async {
            tokio::task::yield_now().await;
            view_owner.cleanup();
            let _ = release.send(Err(FetchError::HttpError(500)));
        };
        tokio::join!(load, driver);

        // Still exactly as `begin` left it.
        let final_state = state.get_untracked();
        assert_eq!(final_state.data, None);
        assert!(final_state.loading);
        assert_eq!(final_state.error, None);
    }

    #[tokio::test]
    async fn test_live_load_resolves_state() {
        let root = Owner::new();
        root.set();
        let state = RwSignal::new(FetchState::new());

        let load = Owner::new().with(|| start_load(state, ready_source(products(3)), true));
        load.await;

        let final_state = state.get_untracked();
        assert_eq!(final_state.data, Some(products(3)));
        assert!(!final_state.loading);
    }

    #[test]
    fn test_every_refresh_request_forces_a_fetch() {
        assert!(!forces_refresh(None));
        // Repeated clicks never fall back to the cached fast path.
        for previous in [0, 1, 2, 3, u32::MAX] {
            assert!(forces_refresh(Some(previous)), "after request {}", previous);
        }
    }

    #[test]
    fn test_warnings_for_degraded_loads() {
        assert_eq!(warning(&LoadOutcome::Cached(products(1))), None);
        assert_eq!(
            warning(&LoadOutcome::Fetched {
                products: products(1),
                cache_write: None,
            }),
            None
        );

        let cache_write = warning(&LoadOutcome::Fetched {
            products: products(1),
            cache_write: Some(StorageError::WriteFailed),
        })
        .unwrap();
        assert!(cache_write.contains("Failed to cache products"));
        assert!(cache_write.contains("failed to write to storage"));

        let stale = warning(&LoadOutcome::Stale {
            products: products(4),
            reason: FetchError::Timeout,
        })
        .unwrap();
        assert!(stale.contains("4 stale cached products"));

        let failed = warning(&LoadOutcome::Failed(FetchError::HttpError(500))).unwrap();
        assert!(failed.contains("500"));
    }
}
