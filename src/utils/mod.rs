//! Browser-facing utilities.
//!
//! Provides:
//! - [`fetch_text_uncached`] - Network fetching with timeout
//! - [`cache`] - JSON values over a key-value store
//! - [`dom`] - Window, storage, and document root access

pub mod cache;
pub mod dom;
mod fetch;

pub use fetch::fetch_text_uncached;
