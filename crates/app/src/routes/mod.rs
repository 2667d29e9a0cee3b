pub mod auth_page;
pub mod dashboard;
pub mod manage;
pub mod not_found;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLogIn, LdLogOut, LdSettings};
use dioxus_free_icons::Icon;

use crate::auth::use_auth;
use auth_page::AuthPage;
use dashboard::Home;
use manage::Manage;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/auth")]
    AuthPage {},
    #[route("/manage")]
    Manage {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Navigation bar above every page.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();
    let session = auth.session();
    let can_manage = session.role.is_some_and(|r| r.can_manage_lending());
    let role_label = session.role.map(|r| r.as_str()).unwrap_or("Unknown");
    let name = session.display_name().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "navbar-brand", "Lending Portal" }
                div { class: "navbar-links",
                    if session.is_logged_in() {
                        p { class: "navbar-user",
                            "Logged in as: "
                            strong { "{name} ({role_label})" }
                        }
                        Link { to: Route::Home {}, class: "navbar-link",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            "Dashboard"
                        }
                        if can_manage {
                            Link { to: Route::Manage {}, class: "navbar-link",
                                Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                "Management"
                            }
                        }
                        button {
                            class: "navbar-logout",
                            onclick: move |_| {
                                auth.logout();
                                navigator().push(Route::AuthPage {});
                            },
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Logout"
                        }
                    } else {
                        Link { to: Route::AuthPage {}, class: "navbar-login",
                            Icon::<LdLogIn> { icon: LdLogIn, width: 16, height: 16 }
                            "Login"
                        }
                    }
                }
            }
        }

        main { class: "page",
            Outlet::<Route> {}
        }
    }
}
