use client::ApiClient;
use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod notify;
mod requests;
mod role_gate;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = client::client_config();
    let level = config
        .logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logging] failed to initialise logger: {e}");
    }
    tracing::info!(base_url = %config.api.base_url, "starting lending portal");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    use_context_provider(ApiClient::from_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
