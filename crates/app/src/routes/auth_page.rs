use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogIn, LdUserPlus};
use dioxus_free_icons::Icon;
use shared_types::{ClientError, Role, SignupRequest, ALL_ROLES};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardHeader, CardTitle, FormSelect, Input,
};

use crate::auth::use_auth;
use crate::notify::{report_error, report_success};
use crate::requests::use_requests;
use crate::routes::Route;

/// Login and sign-up form state.
#[derive(Clone, Copy)]
struct AuthForm {
    username: Signal<String>,
    password: Signal<String>,
    full_name: Signal<String>,
    email: Signal<String>,
    phone_number: Signal<String>,
    role: Signal<Role>,
}

impl AuthForm {
    fn new() -> Self {
        Self {
            username: Signal::new(String::new()),
            password: Signal::new(String::new()),
            full_name: Signal::new(String::new()),
            email: Signal::new(String::new()),
            phone_number: Signal::new(String::new()),
            role: Signal::new(Role::default()),
        }
    }

    fn clear(&mut self) {
        self.username.set(String::new());
        self.password.set(String::new());
        self.full_name.set(String::new());
        self.email.set(String::new());
        self.phone_number.set(String::new());
        self.role.set(Role::default());
    }

    fn signup_request(&self) -> SignupRequest {
        let phone = self.phone_number.peek().trim().to_string();
        SignupRequest {
            username: self.username.peek().trim().to_string(),
            password: self.password.peek().clone(),
            full_name: self.full_name.peek().trim().to_string(),
            email: self.email.peek().trim().to_string(),
            phone_number: (!phone.is_empty()).then_some(phone),
            role: *self.role.peek(),
        }
    }
}

/// Login view, with a sign-up mode for creating accounts.
#[component]
pub fn AuthPage() -> Element {
    let mut auth = use_auth();
    let toasts = use_toast();
    let requests = use_requests();
    let mut form = use_hook(AuthForm::new);
    let mut is_login_view = use_signal(|| true);
    let mut loading = use_signal(|| false);

    let session = auth.session();
    let is_admin = session.role == Some(Role::Admin);
    if session.is_logged_in() && !is_admin {
        navigator().replace(Route::Home {});
        return rsx! {
            div { class: "gate-message",
                p { "You are already logged in. Redirecting to dashboard..." }
            }
        };
    }

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);

        if is_login_view() {
            let username = form.username.peek().trim().to_string();
            let password = form.password.peek().clone();
            let outcome = requests
                .run(|api| async move { api.login(&username, &password).await })
                .await;
            if matches!(outcome, Err(ClientError::Cancelled)) {
                return;
            }
            loading.set(false);
            match outcome {
                Ok(result) => {
                    auth.set_auth(&result);
                    form.clear();
                    report_success(
                        toasts,
                        format!("Login successful! Welcome, {}.", result.full_name),
                    );
                    navigator().push(Route::Home {});
                }
                Err(e) => report_error(toasts, "Authentication Error", &e),
            }
        } else {
            let request = form.signup_request();
            let token = auth.token();
            let outcome = requests
                .run(|api| async move { api.signup(&request, token.as_deref()).await })
                .await;
            if matches!(outcome, Err(ClientError::Cancelled)) {
                return;
            }
            loading.set(false);
            match outcome {
                Ok(()) => {
                    form.clear();
                    is_login_view.set(true);
                    report_success(toasts, "User created successfully! You can now log in.");
                }
                Err(e) => report_error(toasts, "Authentication Error", &e),
            }
        }
    };

    let login_view = is_login_view();
    let busy = loading();
    let busy_label = if login_view { "Logging In..." } else { "Creating User..." }.to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth_page.css") }

        div { class: "page-narrow",
            Card {
                CardHeader {
                    CardTitle { class: "auth-title",
                        if login_view { "User Login" } else { "Admin User Sign Up" }
                    }
                }
                CardContent {
                    if is_admin {
                        div { class: "auth-admin-banner",
                            p { class: "auth-admin-heading", "Admin Mode:" }
                            p { "You are logged in. Use this page to create new user accounts." }
                        }
                    }

                    form { class: "auth-form", onsubmit: handle_submit,
                        Input {
                            label: "Username",
                            id: "username",
                            required: true,
                            value: form.username.read().clone(),
                            on_input: move |e: FormEvent| form.username.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            id: "password",
                            input_type: "password",
                            required: true,
                            value: form.password.read().clone(),
                            on_input: move |e: FormEvent| form.password.set(e.value()),
                        }

                        if !login_view {
                            Input {
                                label: "Full Name",
                                id: "full_name",
                                required: true,
                                value: form.full_name.read().clone(),
                                on_input: move |e: FormEvent| form.full_name.set(e.value()),
                            }
                            Input {
                                label: "Email",
                                id: "email",
                                input_type: "email",
                                required: true,
                                value: form.email.read().clone(),
                                on_input: move |e: FormEvent| form.email.set(e.value()),
                            }
                            Input {
                                label: "Phone Number (Optional)",
                                id: "phone_number",
                                input_type: "tel",
                                value: form.phone_number.read().clone(),
                                on_input: move |e: FormEvent| form.phone_number.set(e.value()),
                            }
                            FormSelect {
                                label: "User Role",
                                value: form.role.read().as_str().to_string(),
                                onchange: move |e: FormEvent| form.role.set(Role::from_str_or_default(&e.value())),
                                for role in ALL_ROLES.iter().copied() {
                                    option { key: "{role}", value: role.as_str(), "{role}" }
                                }
                            }
                        }

                        div { class: "auth-actions",
                            button {
                                r#type: "button",
                                class: "auth-toggle",
                                onclick: move |_| is_login_view.toggle(),
                                if login_view {
                                    "Admin: Need to create a user? Sign Up"
                                } else {
                                    "Already have an account? Login"
                                }
                            }
                            Button {
                                submit: true,
                                busy: busy,
                                busy_label: busy_label,
                                if login_view {
                                    Icon::<LdLogIn> { icon: LdLogIn, width: 18, height: 18 }
                                    "Login"
                                } else {
                                    Icon::<LdUserPlus> { icon: LdUserPlus, width: 18, height: 18 }
                                    "Sign Up"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
