//! Loading and error lines shown above product listings.

use leptos::prelude::*;

use crate::components::hooks::ProductsData;

/// Renders "Loading products..." while a load is in flight and the error
/// message when one is set. Both can show at once with stale data.
#[component]
pub fn LoadStatus(
    products: ProductsData,
    /// Class for the loading line.
    #[prop(into)]
    subtle: Signal<String>,
) -> impl IntoView {
    view! {
        <Show when=move || products.loading.get()>
            <p class=move || format!("text-center italic mb-4 {}", subtle.get())>
                "Loading products..."
            </p>
        </Show>
        {move || {
            products
                .error
                .get()
                .map(|e| view! { <p class="text-center mb-4 text-red-500">"Error: " {e}</p> })
        }}
    }
}
