//! UI components built with Leptos.
//!
//! - [`layout`] - Navbar with theme selector, and footer
//! - [`pages`] - Home, Products, About, NotFound
//! - [`hooks`] - [`use_products`](hooks::use_products), the product data hook
//! - [`ProductCard`], [`LoadStatus`] - Shared listing pieces

pub mod hooks;
pub mod layout;
pub mod pages;
mod product_card;
mod status;

pub use layout::{Footer, Navbar};
pub use pages::{About, Home, NotFound, Products};
pub use product_card::ProductCard;
pub use status::LoadStatus;
