pub mod admin;
pub mod browse;
pub mod staff;

use client::{resolve_landing, Landing};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::role_gate::RoleGate;

/// Role-adaptive landing page: renders the dashboard for the user's role.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let landing = resolve_landing(&auth.session());
    let allowed = landing.required_roles().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        RoleGate { allowed: allowed,
            match landing {
                Landing::Admin => rsx! { admin::AdminDashboard {} },
                Landing::Staff => rsx! { staff::StaffDashboard {} },
                Landing::Browse | Landing::Login => rsx! { browse::BrowseDashboard {} },
            }
        }
    }
}
