//! Core logic for the storefront, independent of the browser.
//!
//! This module provides:
//! - [`ProductSource`] cached product loading with stale fallback
//! - [`FetchState`] and [`LoadOutcome`], the result contract views render
//! - [`CancellationToken`] for abandoning superseded loads
//! - [`KeyValueStore`], [`clock::Clock`], [`transport::Transport`] seams to the host
//! - [`catalog`] search, featured selection, and price display

pub mod cancel;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod source;
pub mod storage;
pub mod transport;

pub use cancel::CancellationToken;
pub use source::{FetchState, LoadOutcome, ProductSource};
pub use storage::{BrowserStore, KeyValueStore};
