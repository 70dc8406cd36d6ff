//! Full catalog with search and manual refresh.

use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::components::hooks::use_products;
use crate::components::{LoadStatus, ProductCard};
use crate::core::catalog::filter_products;
use crate::models::{Product, Theme};

#[component]
pub fn Products(theme: ThemeContext) -> impl IntoView {
    // Each click forces one network fetch
    let refreshes = RwSignal::new(0u32);
    let products = use_products(refreshes.into());
    let search = RwSignal::new(String::new());
    let palette = theme.palette();

    // None until the first load resolves
    let filtered = Memo::new(move |_| {
        products.data.with(|data| {
            data.as_deref().map(|all| {
                search.with(|term| {
                    filter_products(all, term)
                        .into_iter()
                        .cloned()
                        .collect::<Vec<Product>>()
                })
            })
        })
    });

    let no_matches = move || {
        !products.loading.get() && filtered.with(|f| f.as_ref().is_some_and(Vec::is_empty))
    };

    let grid_class = move || match theme.get() {
        Theme::Colorful => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8 px-2",
        Theme::Dark => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 px-2",
        Theme::Light => "grid grid-cols-1 sm:grid-cols-3 gap-5 px-2",
    };
    let input_class = move || match theme.get() {
        Theme::Dark => {
            "w-full px-4 py-2 rounded-lg bg-[#1e1f36] border border-gray-600 text-white"
        }
        _ => "w-full px-4 py-2 rounded-lg bg-white border border-gray-300 text-gray-800",
    };

    view! {
        <div class=move || format!("{} min-h-screen py-12 px-4", palette.get().outer_bg)>
            <div class="max-w-4xl mx-auto text-center mb-12">
                <h1 class=move || format!("text-4xl font-bold mb-4 {}", palette.get().text_primary)>
                    "Our Products"
                </h1>
                <p class=move || format!("text-base mb-6 {}", palette.get().text_subtle)>
                    "Explore a curated list of items fetched live from a sample API. "
                    "Search, browse, and pick what fits your needs."
                </p>
            </div>

            <div class="max-w-xl mx-auto mb-8 flex gap-2">
                <input
                    type="text"
                    placeholder="Search products..."
                    class=input_class
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button
                    class="px-4 py-2 rounded-lg text-sm"
                    disabled=move || products.loading.get()
                    on:click=move |_| refreshes.update(|n| *n = n.wrapping_add(1))
                >
                    "Refresh"
                </button>
            </div>

            <LoadStatus
                products=products
                subtle=move || palette.get().text_subtle.to_string()
            />
            <Show when=no_matches>
                <p class=move || format!("text-center italic mb-4 {}", palette.get().text_subtle)>
                    "No matching products found."
                </p>
            </Show>

            <div class=grid_class>
                <For
                    each=move || filtered.get().unwrap_or_default()
                    key=|p| p.id
                    children=move |p| view! { <ProductCard product=p theme=theme /> }
                />
            </div>
        </div>
    }
}
