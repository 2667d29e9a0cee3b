use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdInbox;
use dioxus_free_icons::Icon;

/// Centered message for a list with nothing to show.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            Icon::<LdInbox> { icon: LdInbox, width: 28, height: 28 }
            p { class: "empty-state-message", "{message}" }
        }
    }
}
