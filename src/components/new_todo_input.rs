//! New Todo Input Component
//!
//! Toggle-all circle plus the text field; Enter submits.

use leptos::prelude::*;
use todo_core::all_completed;

use crate::components::CheckIcon;
use crate::context::AppContext;
use crate::models::check_class;
use crate::store::UiStateStoreFields;

#[component]
pub fn NewTodoInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let (new_text, set_new_text) = signal(String::new());

    let all_done = move || all_completed(&store.tasks().read());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        // Blank input stays in the field untouched
        if ctx.add(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <div class="input-container">
            <div
                class=move || check_class(all_done())
                title="Toggle all"
                on:click=move |_| ctx.toggle_all()
            >
                <Show when=all_done>
                    <CheckIcon />
                </Show>
            </div>
            <input
                type="text"
                class="todo-input"
                placeholder="Create a new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}
