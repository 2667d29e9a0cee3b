use client::{authorize, GateDecision};
use dioxus::prelude::*;
use shared_types::{describe_roles, Role};

use crate::auth::use_auth;
use crate::routes::Route;

/// Render `children` only for a logged-in user whose role is in `allowed`.
///
/// Logged-out visitors are sent to the login view; other roles get a static
/// message naming the roles that may enter.
#[component]
pub fn RoleGate(allowed: Vec<Role>, children: Element) -> Element {
    let auth = use_auth();
    let session = auth.session();

    match authorize(&session, &allowed) {
        GateDecision::Authorized => rsx! { {children} },
        GateDecision::Unauthenticated => {
            navigator().replace(Route::AuthPage {});
            rsx! {
                div { class: "gate-message",
                    p { "Redirecting to login..." }
                }
            }
        }
        GateDecision::Forbidden { required } => {
            let current = session
                .role
                .map(|r| r.as_str())
                .unwrap_or("Unknown");
            rsx! {
                ForbiddenNotice { current: current.to_string(), required: required }
            }
        }
    }
}

#[component]
fn ForbiddenNotice(current: String, required: Vec<Role>) -> Element {
    let required = describe_roles(&required);
    rsx! {
        div { class: "gate-message",
            h1 { "Unauthorized Access" }
            p { "Your role ({current}) does not permit access to this page." }
            p { class: "muted", "Required role: {required}" }
        }
    }
}
