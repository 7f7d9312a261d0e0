//! Frontend Models
//!
//! Core types re-exported for components, plus small view helpers.

pub use todo_core::{Filter, Task, Theme};

/// Font Awesome icon for the theme button (shows the theme you'd switch to)
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "fas fa-moon",
        Theme::Dark => "fas fa-sun",
    }
}

/// Root container class
pub fn theme_class(theme: Theme) -> String {
    format!("app-container theme-{}", theme.as_str())
}

pub fn check_class(completed: bool) -> &'static str {
    if completed { "check-circle completed" } else { "check-circle" }
}
