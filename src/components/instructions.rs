use leptos::prelude::*;

/// Usage hints under the list
#[component]
pub fn Instructions() -> impl IntoView {
    view! {
        <div class="instructions">
            <p>"Click on a todo to mark it as complete"</p>
            <p>"Hover over a todo to see the delete button"</p>
            <p class="drag-info">"Drag and drop to reorder todos (coming soon)"</p>
        </div>
    }
}
