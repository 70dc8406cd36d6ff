//! Root application module.
//!
//! Contains the main App component, the [`ThemeContext`] shared by every
//! page, and hash routing between pages.

use leptos::prelude::*;

use crate::components::{About, Footer, Home, Navbar, NotFound, Products};
use crate::config::THEME_KEY;
use crate::core::{BrowserStore, KeyValueStore};
use crate::models::{Page, Theme, ThemePalette};
use crate::utils::dom;

// ============================================================================
// ThemeContext
// ============================================================================

/// Site-wide theme selection.
///
/// Created once by [`App`] and handed to each component that needs it as
/// a prop. [`ThemeContext::set`] is the only way to change the theme.
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Read the persisted preference once; unknown values mean [`Theme::Light`].
    pub fn load(store: &impl KeyValueStore) -> Self {
        let stored = store.get_item(THEME_KEY);
        Self {
            theme: RwSignal::new(Theme::from_stored(stored.as_deref())),
        }
    }

    /// Current theme (tracked).
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Class names for the current theme.
    pub fn palette(&self) -> Signal<ThemePalette> {
        let theme = self.theme;
        Signal::derive(move || ThemePalette::for_theme(theme.get()))
    }
}

/// Write the theme back to storage.
fn persist_theme(store: &impl KeyValueStore, theme: Theme) {
    if let Err(e) = store.set_item(THEME_KEY, theme.as_str()) {
        dom::console_warn(&format!("Failed to save theme preference: {}", e));
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component.
///
/// This component:
/// - Loads the theme preference and keeps the document root and storage in sync
/// - Tracks the current page from the URL hash
/// - Renders the navbar, the active page, and the footer
#[component]
pub fn App() -> impl IntoView {
    let prefs = BrowserStore::local();
    let theme = ThemeContext::load(&prefs);

    Effect::new(move |_| {
        let current = theme.get();
        dom::apply_root_theme(current);
        persist_theme(&prefs, current);
    });

    let page = RwSignal::new(Page::current());

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let closure = Closure::wrap(Box::new(move || {
            page.set(Page::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let page = Signal::derive(move || page.get());

    view! {
        <div class="flex flex-col min-h-screen">
            <Navbar theme=theme page=page />
            <main class="flex-1">
                {move || match page.get() {
                    Page::Home => view! { <Home theme=theme /> }.into_any(),
                    Page::Products => view! { <Products theme=theme /> }.into_any(),
                    Page::About => view! { <About theme=theme /> }.into_any(),
                    Page::NotFound => view! { <NotFound theme=theme /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
