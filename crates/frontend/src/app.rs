use crate::converter::ui::Converter;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <Converter />
        </main>
    }
}
