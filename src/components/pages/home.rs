//! Landing page with featured products.

use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::components::hooks::use_products;
use crate::components::{LoadStatus, ProductCard};
use crate::core::catalog::featured;
use crate::models::{Page, Theme};

#[component]
pub fn Home(theme: ThemeContext) -> impl IntoView {
    let products = use_products(Signal::stored(0));
    let palette = theme.palette();

    let featured_products = move || {
        products
            .data
            .with(|data| data.as_deref().map(featured).unwrap_or_default().to_vec())
    };

    let heading_class = move || match theme.get() {
        Theme::Colorful => "text-4xl font-bold mb-4 font-pacifico text-pink-600",
        Theme::Dark => "text-4xl font-bold mb-4 text-white",
        Theme::Light => "text-4xl font-bold mb-4",
    };

    view! {
        <div class=move || format!("{} min-h-screen", palette.get().outer_bg)>
            <div class="max-w-6xl mx-auto pt-20 px-4">
                <section class="mb-10">
                    <h1 class=heading_class>"Welcome to Multi-Theme Store"</h1>
                    <p class=move || format!("max-w-prose mb-4 text-base {}", palette.get().text_subtle)>
                        "Experience a modern interface with theme switching. Choose between minimal, "
                        "dark, or playful colorful layouts. Below are our featured items."
                    </p>
                    <a href=Page::Products.to_hash()>
                        <button class="primary">"Explore Products"</button>
                    </a>
                </section>

                <section class="mb-8">
                    <h2 class=move || format!("text-2xl font-semibold mb-4 {}", palette.get().text_primary)>
                        "Featured Products"
                    </h2>
                    <LoadStatus
                        products=products
                        subtle=move || palette.get().text_subtle.to_string()
                    />
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                        <For
                            each=featured_products
                            key=|p| p.id
                            children=move |p| view! { <ProductCard product=p theme=theme /> }
                        />
                    </div>
                </section>
            </div>
        </div>
    }
}
