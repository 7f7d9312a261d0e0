//! Stats Bar Component
//!
//! Items-left counter, filter buttons and clear-completed.

use leptos::prelude::*;
use todo_core::{active_count, items_left_label};

use crate::context::AppContext;
use crate::models::Filter;
use crate::store::UiStateStoreFields;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <div class="todo-stats">
            <span class="items-left">
                {move || items_left_label(active_count(&store.tasks().read()))}
            </span>

            <div class="filters">
                {Filter::ALL.into_iter().map(|filter| {
                    let is_active = move || store.filter().get() == filter;
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| ctx.set_filter(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <button class="clear-btn" on:click=move |_| ctx.clear_completed()>
                "Clear Completed"
            </button>
        </div>
    }
}
