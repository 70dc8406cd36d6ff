//! Hash-based page routing.

/// Top-level pages reachable through the URL hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// `#/` or empty hash
    Home,
    /// `#/products`
    Products,
    /// `#/about`
    About,
    /// Any other hash
    NotFound,
}

impl Page {
    /// Pages shown in the navbar, in order.
    pub const NAV: [Page; 3] = [Page::Home, Page::Products, Page::About];

    /// Parse URL hash into a page.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "" => Self::Home,
            "products" | "product" => Self::Products,
            "about" => Self::About,
            _ => Self::NotFound,
        }
    }

    /// Convert page to URL hash.
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Home | Self::NotFound => "#/",
            Self::Products => "#/products",
            Self::About => "#/about",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Products => "Products",
            Self::About => "About",
            Self::NotFound => "Not Found",
        }
    }

    /// Get current page from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }
}
