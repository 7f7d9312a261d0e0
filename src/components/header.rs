//! Header Component
//!
//! Title and theme toggle.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::theme_icon;
use crate::store::UiStateStoreFields;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <header class="header">
            <h1 class="title">"TODO"</h1>
            <button
                class="theme-toggle"
                title="Toggle theme"
                on:click=move |_| ctx.toggle_theme()
            >
                <i class=move || theme_icon(store.theme().get())></i>
            </button>
        </header>
    }
}
