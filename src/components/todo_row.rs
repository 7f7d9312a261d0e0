//! Todo Row Component
//!
//! Click anywhere to toggle; the × button deletes.

use leptos::prelude::*;

use crate::components::CheckIcon;
use crate::context::AppContext;
use crate::models::{check_class, Task};

#[component]
pub fn TodoRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let completed = task.completed;

    view! {
        <div class="todo-item" on:click=move |_| ctx.toggle(id)>
            <div class=check_class(completed)>
                {completed.then(|| view! { <CheckIcon /> })}
            </div>
            <span class=if completed { "todo-text completed" } else { "todo-text" }>
                {task.text}
            </span>
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.remove(id);
                }
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
