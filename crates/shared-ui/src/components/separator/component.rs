use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Horizontal rule between page sections, with an optional caption.
#[component]
pub fn Separator(#[props(default)] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "separator-row",
            prim::Separator { class: "separator" }
            if !label.is_empty() {
                span { class: "separator-label", "{label}" }
                prim::Separator { class: "separator" }
            }
        }
    }
}
