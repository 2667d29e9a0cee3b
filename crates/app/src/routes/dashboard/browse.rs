use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::{ClientError, Equipment, EquipmentQuery, LendingRequestCreate};
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, CardTitle, DialogActions, DialogContent, DialogRoot, DialogTitle, EmptyState,
    FormSelect, Input, PageHeader, PageTitle, SkeletonRows, ToastOptions,
};

use crate::auth::use_auth;
use crate::format_helpers::default_return_date;
use crate::notify::{report_error, report_success};
use crate::requests::use_requests;

/// Loan dialog contents for one equipment item.
#[derive(Debug, Clone, PartialEq)]
struct LoanDraft {
    equipment_id: i64,
    equipment_name: String,
    available: i64,
    quantity: String,
    return_date: String,
}

impl LoanDraft {
    fn for_item(item: &Equipment) -> Self {
        Self {
            equipment_id: item.equipment_id,
            equipment_name: item.name.clone(),
            available: item.available_quantity,
            quantity: "1".to_string(),
            return_date: default_return_date(),
        }
    }
}

/// Parse the requested quantity, bounded by what is on the shelf.
fn parse_quantity(raw: &str, available: i64) -> Result<i64, String> {
    let quantity: i64 = raw
        .trim()
        .parse()
        .map_err(|_| "Quantity must be a whole number.".to_string())?;
    if quantity < 1 || quantity > available {
        return Err(format!("Quantity must be between 1 and {}.", available.max(1)));
    }
    Ok(quantity)
}

/// Equipment catalogue with search, category filter and loan requests.
#[component]
pub fn BrowseDashboard() -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let requests = use_requests();

    let mut search_term = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut applied = use_signal(EquipmentQuery::default);
    let mut loan = use_signal(|| None::<LoanDraft>);
    let mut submitting = use_signal(|| false);

    let categories = use_resource(move || {
        let token = auth.token();
        async move {
            match requests
                .run(|api| async move { api.list_categories(token.as_deref()).await })
                .await
            {
                Ok(categories) => categories,
                Err(e) => {
                    if !e.is_cancelled() {
                        tracing::warn!(error = %e, "category list unavailable");
                    }
                    Vec::new()
                }
            }
        }
    });

    let mut equipment = use_resource(move || {
        let query = applied.read().clone();
        let token = auth.token();
        async move {
            let outcome = requests
                .run(|api| async move { api.list_equipment(&query, token.as_deref()).await })
                .await;
            if let Err(e) = &outcome {
                report_error(toasts, "Could not load equipment", e);
            }
            outcome.ok()
        }
    });

    let submit_loan = move |evt: FormEvent| async move {
        evt.prevent_default();
        let Some(draft) = loan.peek().clone() else {
            return;
        };
        let quantity = match parse_quantity(&draft.quantity, draft.available) {
            Ok(quantity) => quantity,
            Err(message) => {
                toasts.error(format!("Request Error: {message}"), ToastOptions::new());
                return;
            }
        };

        submitting.set(true);
        let body = LendingRequestCreate {
            equipment_id: draft.equipment_id,
            quantity,
            expected_return_date: draft.return_date,
        };
        let token = auth.token();
        let outcome = requests
            .run(|api| async move { api.create_lending_request(&body, token.as_deref()).await })
            .await;
        if matches!(outcome, Err(ClientError::Cancelled)) {
            return;
        }
        submitting.set(false);
        match outcome {
            Ok(created) => {
                tracing::info!(request_id = created.request_id, "loan request created");
                loan.set(None);
                report_success(toasts, "Loan request submitted successfully! Pending approval.");
                equipment.restart();
            }
            Err(e) => report_error(toasts, "Request Error", &e),
        }
    };

    let role_label = auth.role().map(|r| r.as_str()).unwrap_or("Student");
    let draft = loan.read().clone();
    let dialog_open = draft.is_some();
    let busy = submitting();

    rsx! {
        PageHeader {
            PageTitle { "Welcome, {role_label}! Available Equipment" }
        }

        Card {
            CardContent {
                div { class: "browse-filters",
                    div { class: "browse-search",
                        span { class: "browse-search-icon",
                            Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                        }
                        Input {
                            placeholder: "Search equipment by name...",
                            value: search_term.read().clone(),
                            on_input: move |e: FormEvent| search_term.set(e.value()),
                        }
                    }
                    FormSelect {
                        value: category.read().clone(),
                        onchange: move |e: Event<FormData>| category.set(e.value()),
                        option { value: "", "All Categories" }
                        if let Some(list) = &*categories.read() {
                            for c in list.iter() {
                                option {
                                    key: "{c.category_id}",
                                    value: "{c.category_id}",
                                    "{c.category_name}"
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Success,
                        onclick: move |_| {
                            let query = EquipmentQuery::from_form(&search_term.peek(), &category.peek());
                            if *applied.peek() == query {
                                equipment.restart();
                            } else {
                                applied.set(query);
                            }
                        },
                        "Apply Filters"
                    }
                }
            }
        }

        match &*equipment.read() {
            Some(Some(items)) if items.is_empty() => rsx! {
                EmptyState { message: "No equipment found matching your search criteria." }
            },
            Some(Some(items)) => rsx! {
                div { class: "equipment-grid",
                    for item in items.iter() {
                        EquipmentCard {
                            key: "{item.equipment_id}",
                            item: item.clone(),
                            on_borrow: move |item: Equipment| loan.set(Some(LoanDraft::for_item(&item))),
                        }
                    }
                }
            },
            Some(None) => rsx! {
                EmptyState { message: "Equipment could not be loaded." }
            },
            None => rsx! {
                Card {
                    CardContent {
                        SkeletonRows { rows: 4 }
                    }
                }
            },
        }

        DialogRoot {
            open: dialog_open,
            on_open_change: move |open: bool| {
                if !open {
                    loan.set(None);
                }
            },
            DialogContent {
                if let Some(draft) = draft {
                    DialogTitle { "Request Loan for {draft.equipment_name}" }
                    form { class: "dialog-form", onsubmit: submit_loan,
                        Input {
                            label: "Quantity",
                            id: "quantity",
                            input_type: "number",
                            min: "1",
                            max: draft.available.max(1).to_string(),
                            required: true,
                            value: draft.quantity.clone(),
                            on_input: move |e: FormEvent| {
                                if let Some(d) = loan.write().as_mut() {
                                    d.quantity = e.value();
                                }
                            },
                        }
                        Input {
                            label: "Expected Return Date",
                            id: "return_date",
                            input_type: "date",
                            required: true,
                            value: draft.return_date.clone(),
                            on_input: move |e: FormEvent| {
                                if let Some(d) = loan.write().as_mut() {
                                    d.return_date = e.value();
                                }
                            },
                        }
                        DialogActions {
                            Button {
                                variant: ButtonVariant::Secondary,
                                disabled: busy,
                                onclick: move |_| loan.set(None),
                                "Cancel"
                            }
                            Button {
                                submit: true,
                                busy: busy,
                                busy_label: "Submitting...".to_string(),
                                "Confirm Request"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One catalogue entry.
#[component]
fn EquipmentCard(item: Equipment, on_borrow: EventHandler<Equipment>) -> Element {
    let available = item.is_available();
    let tone = if available { BadgeTone::Success } else { BadgeTone::Danger };
    let stock = format!(
        "Available: {} / {}",
        item.available_quantity, item.total_quantity
    );
    let category = item.category_label();
    let name = item.name.clone();

    rsx! {
        Card { class: "equipment-card",
            CardHeader {
                CardTitle { "{name}" }
                p { class: "muted", "{category}" }
            }
            CardFooter { class: "equipment-card-footer",
                Badge { tone: tone, "{stock}" }
                Button {
                    disabled: !available,
                    onclick: move |_| on_borrow.call(item.clone()),
                    if available {
                        "Borrow Item"
                        Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
                    } else {
                        "Out of Stock"
                    }
                }
            }
        }
    }
}
