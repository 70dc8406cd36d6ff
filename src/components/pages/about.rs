use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::models::Theme;

#[component]
pub fn About(theme: ThemeContext) -> impl IntoView {
    let palette = theme.palette();
    let section_class = move || {
        let border = if theme.get() == Theme::Colorful {
            "border-2 border-pink-500"
        } else {
            ""
        };
        format!("mb-12 rounded-xl shadow-lg p-8 {} {}", palette.get().card_bg, border)
    };
    let subtle = move || format!("text-base leading-relaxed mb-6 {}", palette.get().text_subtle);

    view! {
        <div class=move || format!("{} w-full min-h-screen", palette.get().outer_bg)>
            <div class="max-w-4xl mx-auto px-4 md:px-8 py-16">
                <section class=section_class>
                    <h2 class="text-4xl font-bold mb-4">"About Our App"</h2>
                    <p class=subtle>
                        "A storefront with multi-theme support: minimalist light, focused dark, "
                        "and playful colorful. Layouts and UI elements adjust to the active theme."
                    </p>
                </section>
                <section>
                    <h3 class=move || format!("text-2xl font-semibold mb-3 {}", palette.get().text_primary)>
                        "Our Vision"
                    </h3>
                    <p class=subtle>
                        "Apps should adapt to people, not the other way around. Whether you're "
                        "working late or embracing creativity, there is a layout to match."
                    </p>
                </section>
            </div>
        </div>
    }
}
