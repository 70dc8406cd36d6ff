//! Top-level pages, one per [`Page`](crate::models::Page).

mod about;
mod home;
mod not_found;
mod products;

pub use about::About;
pub use home::Home;
pub use not_found::NotFound;
pub use products::Products;
