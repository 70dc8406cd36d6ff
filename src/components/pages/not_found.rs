use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::models::Page;

#[component]
pub fn NotFound(theme: ThemeContext) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <div class=move || format!("{} min-h-screen py-24 px-4 text-center", palette.get().outer_bg)>
            <h1 class=move || format!("text-4xl font-bold mb-4 {}", palette.get().text_primary)>
                "Page not found"
            </h1>
            <a href=Page::Home.to_hash() class="underline">"Back to home"</a>
        </div>
    }
}
