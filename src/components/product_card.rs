//! A single product tile.

use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::core::catalog::format_price_inr;
use crate::models::{Product, Theme};

#[component]
pub fn ProductCard(product: Product, theme: ThemeContext) -> impl IntoView {
    let palette = theme.palette();
    let price = format_price_inr(product.price);

    let card_class = move || {
        let accent = match theme.get() {
            Theme::Colorful => "border-2 border-pink-400",
            Theme::Dark => "text-white",
            Theme::Light => "",
        };
        format!(
            "rounded-xl overflow-hidden shadow-lg flex flex-col justify-between p-5 transition {} {}",
            accent,
            palette.get().card_bg
        )
    };
    let button_class = move || match theme.get() {
        Theme::Dark => "px-4 py-2 rounded-md text-sm font-medium bg-indigo-500 text-white",
        _ => "px-4 py-2 rounded-md text-sm font-medium bg-black text-white",
    };

    view! {
        <div class=card_class>
            <div class="flex items-start gap-4 mb-3">
                <div class="w-16 h-16 flex-shrink-0">
                    <img
                        src=product.image.clone()
                        alt=product.title.clone()
                        class="w-full h-full object-contain rounded"
                    />
                </div>
                <div class="flex-1 min-w-0">
                    <h3 class="font-semibold text-base line-clamp-1 mb-1" title=product.title.clone()>
                        {product.title.clone()}
                    </h3>
                    <div class="text-sm opacity-75">"Category: " {product.category.clone()}</div>
                </div>
            </div>
            <p class="text-sm mb-4 line-clamp-3 opacity-90">{product.description.clone()}</p>
            <div class="flex justify-between items-center mt-auto">
                <span class="font-bold text-lg">{price}</span>
                <button class=button_class>"Buy"</button>
            </div>
        </div>
    }
}
