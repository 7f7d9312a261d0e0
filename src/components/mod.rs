//! UI Components
//!
//! Reusable Leptos components.

mod check_icon;
mod header;
mod new_todo_input;
mod todo_list;
mod todo_row;
mod stats_bar;
mod instructions;

pub use check_icon::CheckIcon;
pub use header::Header;
pub use new_todo_input::NewTodoInput;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use stats_bar::StatsBar;
pub use instructions::Instructions;
