//! Todo List Component
//!
//! Rows for the tasks visible under the current filter.

use leptos::prelude::*;
use todo_core::filtered_view;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::models::Task;
use crate::store::UiStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let visible = move || {
        let filter = store.filter().get();
        let tasks = store.tasks().read();
        let shown: Vec<Task> = filtered_view(&tasks, filter).into_iter().cloned().collect();
        shown
    };

    view! {
        <div class="todo-list">
            <Show when=move || visible().is_empty()>
                <div class="todo-item empty">
                    <div class="check-circle"></div>
                    <span class="todo-text">"No todos to display"</span>
                </div>
            </Show>
            <For
                each=visible
                // completed is part of the key so a toggle re-renders the row
                key=|task| (task.id, task.completed)
                children=move |task| view! { <TodoRow task=task /> }
            />
        </div>
    }
}
