//! Todo Frontend App
//!
//! Builds the controller from browser storage, wires its subscription into
//! the reactive store and lays out the single-column page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{AppConfig, TodoController};

use crate::components::{Header, Instructions, NewTodoInput, StatsBar, TodoList};
use crate::context::AppContext;
use crate::models::theme_class;
use crate::storage::{open_storage, JsClock};
use crate::store::{store_apply_snapshot, UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let mut controller = TodoController::load(open_storage(), JsClock, AppConfig::default());

    // Rendered state follows the controller
    let store = Store::new(UiState::from(controller.snapshot()));
    controller.subscribe(move |snapshot| store_apply_snapshot(&store, snapshot));

    provide_context(AppContext::new(controller, store));

    view! {
        <div class=move || theme_class(store.theme().get())>
            <div class="app">
                <Header />
                <NewTodoInput />
                <TodoList />
                <StatsBar />
                <Instructions />
            </div>
        </div>
    }
}
