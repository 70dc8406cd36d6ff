//! Page chrome: navigation bar with theme selector, and footer.

use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::config::APP_NAME;
use crate::models::{Page, Theme};

#[component]
pub fn Navbar(theme: ThemeContext, page: Signal<Page>) -> impl IntoView {
    let palette = theme.palette();

    let on_select = move |ev: leptos::ev::Event| {
        if let Ok(selected) = event_target_value(&ev).parse::<Theme>() {
            theme.set(selected);
        }
    };

    let links = Page::NAV
        .into_iter()
        .map(|target| {
            let class = move || {
                if page.get() == target {
                    "font-semibold underline"
                } else {
                    "hover:underline"
                }
            };
            view! { <a href=target.to_hash() class=class>{target.title()}</a> }
        })
        .collect_view();

    let options = Theme::ALL
        .into_iter()
        .map(|t| {
            view! {
                <option value=t.as_str() selected=move || theme.get() == t>
                    {t.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            format!(
                "w-full px-4 py-3 flex items-center justify-between shadow {} {}",
                palette.get().card_bg,
                palette.get().text_primary,
            )
        }>
            <span class="text-lg font-bold">{APP_NAME}</span>
            <div class="flex gap-4 text-sm">{links}</div>
            <select aria-label="Theme" class="rounded px-2 py-1 text-sm" on:change=on_select>
                {options}
            </select>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="w-full mt-auto py-6 px-4 text-sm">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-3">
                <p>"© " {year} " " {APP_NAME} ". All rights reserved."</p>
                <div class="flex gap-4">
                    <a href="#/about" class="hover:underline">"About"</a>
                    <a href="#/products" class="hover:underline">"Products"</a>
                </div>
            </div>
        </footer>
    }
}
