use dioxus::prelude::*;

use crate::routes::Route;

/// Unknown paths fall back to the dashboard.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    tracing::debug!(path = %format!("/{}", route.join("/")), "unknown path, redirecting home");
    navigator().replace(Route::Home {});
    rsx! {}
}
