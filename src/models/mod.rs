//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Product`], [`CachedPayload`] - Catalog records and their session cache entry
//! - [`Theme`], [`ThemePalette`] - Theme selection and derived class names
//! - [`Page`] - Hash-based navigation

mod product;
mod route;
mod theme;

pub use product::{CachedPayload, Product};
pub use route::Page;
pub use theme::{Theme, ThemePalette};
