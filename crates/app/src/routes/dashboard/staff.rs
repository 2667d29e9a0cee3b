use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArchive, LdCheck, LdRefreshCw, LdX};
use dioxus_free_icons::Icon;
use shared_types::{ClientError, EquipmentQuery, LendingRequest, LendingStatus, OverdueLoan};
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, DialogActions, DialogContent, DialogDescription, DialogRoot,
    DialogTitle, EmptyState, PageActions, PageHeader, PageTitle, SkeletonRows, Textarea,
};
use std::collections::HashMap;

use crate::auth::use_auth;
use crate::format_helpers::format_date;
use crate::notify::{report_error, report_success};
use crate::requests::use_requests;

/// A staff action on a single lending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestAction {
    Approve,
    Reject,
    Return,
}

impl RequestAction {
    fn failure_label(&self) -> &'static str {
        match self {
            RequestAction::Approve => "Approve failed",
            RequestAction::Reject => "Reject failed",
            RequestAction::Return => "Return failed",
        }
    }

    fn success_message(&self, request_id: i64) -> String {
        match self {
            RequestAction::Approve => format!("Request #{request_id} approved"),
            RequestAction::Reject => format!("Request #{request_id} rejected"),
            RequestAction::Return => format!("Request #{request_id} marked returned"),
        }
    }

    /// Approving and returning both move stock.
    fn changes_stock(&self) -> bool {
        !matches!(self, RequestAction::Reject)
    }
}

fn status_tone(status: LendingStatus) -> BadgeTone {
    match status {
        LendingStatus::Pending => BadgeTone::Warning,
        LendingStatus::Approved => BadgeTone::Info,
        LendingStatus::Issued => BadgeTone::Success,
        LendingStatus::Rejected => BadgeTone::Danger,
        _ => BadgeTone::Neutral,
    }
}

/// Name shown for a request's equipment: the server-supplied name, then the
/// inventory lookup, then the bare id.
fn equipment_label(request: &LendingRequest, names: &HashMap<i64, String>) -> String {
    request
        .equipment_name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| names.get(&request.equipment_id).cloned())
        .unwrap_or_else(|| format!("Equipment #{}", request.equipment_id))
}

/// Staff work queue: active requests and overdue loans.
#[component]
pub fn StaffDashboard() -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let requests = use_requests();

    let mut acting = use_signal(|| false);
    let mut reject_target = use_signal(|| None::<i64>);
    let mut reject_reason = use_signal(String::new);

    let mut active = use_resource(move || {
        let token = auth.token();
        async move {
            let outcome = requests
                .run(|api| async move { api.list_active_requests(token.as_deref()).await })
                .await;
            if let Err(e) = &outcome {
                report_error(toasts, "Could not load requests", e);
            }
            outcome.ok()
        }
    });

    let mut names = use_resource(move || {
        let token = auth.token();
        async move {
            let outcome = requests
                .run(|api| async move {
                    api.list_equipment(&EquipmentQuery::default(), token.as_deref())
                        .await
                })
                .await;
            match outcome {
                Ok(items) => items
                    .into_iter()
                    .map(|e| (e.equipment_id, e.name))
                    .collect::<HashMap<_, _>>(),
                Err(e) => {
                    if !e.is_cancelled() {
                        tracing::warn!(error = %e, "equipment lookup unavailable");
                    }
                    HashMap::new()
                }
            }
        }
    });

    let mut overdue = use_resource(move || {
        let token = auth.token();
        async move {
            let outcome = requests
                .run(|api| async move { api.list_overdue(token.as_deref()).await })
                .await;
            if let Err(e) = &outcome {
                report_error(toasts, "Could not load overdue loans", e);
            }
            outcome.ok()
        }
    });

    let perform = move |action: RequestAction, request_id: i64, reason: String| {
        spawn(async move {
            acting.set(true);
            let token = auth.token();
            let outcome = requests
                .run(|api| async move {
                    let token = token.as_deref();
                    match action {
                        RequestAction::Approve => api.approve_request(request_id, token).await,
                        RequestAction::Reject => api.reject_request(request_id, &reason, token).await,
                        RequestAction::Return => api.mark_returned(request_id, token).await,
                    }
                })
                .await;
            if matches!(outcome, Err(ClientError::Cancelled)) {
                return;
            }
            acting.set(false);
            match outcome {
                Ok(_) => {
                    if action == RequestAction::Reject {
                        reject_target.set(None);
                        reject_reason.set(String::new());
                    }
                    report_success(toasts, action.success_message(request_id));
                    active.restart();
                    if action.changes_stock() {
                        names.restart();
                    }
                }
                Err(e) => report_error(toasts, action.failure_label(), &e),
            }
        });
    };

    let lookup = names.read().clone().unwrap_or_default();
    let busy = acting();
    let target = reject_target();

    rsx! {
        PageHeader {
            PageTitle { "Staff Portal" }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        active.restart();
                        names.restart();
                        overdue.restart();
                    },
                    Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 16, height: 16 }
                    "Refresh"
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Pending / Active Requests" }
            }
            CardContent {
                match &*active.read() {
                    Some(Some(list)) if list.is_empty() => rsx! {
                        EmptyState { message: "No requests to show right now." }
                    },
                    Some(Some(list)) => rsx! {
                        div { class: "request-list",
                            for request in list.iter() {
                                RequestRow {
                                    key: "{request.request_id}",
                                    request: request.clone(),
                                    equipment: equipment_label(request, &lookup),
                                    busy: busy,
                                    on_action: move |(action, id): (RequestAction, i64)| {
                                        if action == RequestAction::Reject {
                                            reject_reason.set(String::new());
                                            reject_target.set(Some(id));
                                        } else {
                                            perform(action, id, String::new());
                                        }
                                    },
                                }
                            }
                        }
                    },
                    Some(None) => rsx! {
                        EmptyState { message: "Requests could not be loaded." }
                    },
                    None => rsx! {
                        SkeletonRows { rows: 4 }
                    },
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Overdue Loans" }
                CardDescription { "Loans past their expected return date." }
            }
            CardContent {
                match &*overdue.read() {
                    Some(Some(list)) if list.is_empty() => rsx! {
                        EmptyState { message: "No overdue loans." }
                    },
                    Some(Some(list)) => rsx! {
                        OverdueTable { loans: list.clone() }
                    },
                    Some(None) => rsx! {
                        EmptyState { message: "Overdue loans could not be loaded." }
                    },
                    None => rsx! {
                        SkeletonRows { rows: 3 }
                    },
                }
            }
        }

        DialogRoot {
            open: target.is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    reject_target.set(None);
                }
            },
            DialogContent {
                if let Some(id) = target {
                    DialogTitle { "Reject Request #{id}" }
                    DialogDescription {
                        "Please provide a reason for rejecting this request (optional but recommended)."
                    }
                    Textarea {
                        placeholder: "Enter rejection reason...",
                        rows: 5,
                        value: reject_reason.read().clone(),
                        on_input: move |e: FormEvent| reject_reason.set(e.value()),
                    }
                    DialogActions {
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: busy,
                            onclick: move |_| {
                                reject_target.set(None);
                                reject_reason.set(String::new());
                            },
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            busy: busy,
                            busy_label: "Rejecting...".to_string(),
                            onclick: move |_| {
                                if let Some(id) = *reject_target.peek() {
                                    perform(RequestAction::Reject, id, reject_reason.peek().clone());
                                }
                            },
                            "Submit Rejection"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RequestRow(
    request: LendingRequest,
    equipment: String,
    busy: bool,
    on_action: EventHandler<(RequestAction, i64)>,
) -> Element {
    let id = request.request_id;
    let status = request.status;
    let requester = request
        .requester_name
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());
    let requested_on = format_date(Some(&request.request_date));
    let due = format_date(Some(&request.expected_return_date));

    rsx! {
        div { class: "request-row",
            div { class: "request-info",
                p { class: "request-title",
                    "{equipment}"
                    span { class: "muted", " x{request.quantity}" }
                }
                p { class: "muted", "Requested by: {requester} | Requested on: {requested_on} | Due: {due}" }
                Badge { tone: status_tone(status), "{status}" }
                if let Some(reason) = request.reject_reason.as_ref().filter(|r| !r.is_empty()) {
                    p { class: "request-reject-reason", "Rejection reason: {reason}" }
                }
            }
            div { class: "request-actions",
                if status.can_review() {
                    Button {
                        variant: ButtonVariant::Success,
                        disabled: busy,
                        onclick: move |_| on_action.call((RequestAction::Approve, id)),
                        Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 }
                        "Approve"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: busy,
                        onclick: move |_| on_action.call((RequestAction::Reject, id)),
                        Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                        "Reject"
                    }
                }
                if status.can_mark_returned() {
                    Button {
                        disabled: busy,
                        onclick: move |_| on_action.call((RequestAction::Return, id)),
                        Icon::<LdArchive> { icon: LdArchive, width: 16, height: 16 }
                        "Mark Returned"
                    }
                }
            }
        }
    }
}

#[component]
pub fn OverdueTable(loans: Vec<OverdueLoan>) -> Element {
    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "Request" }
                    th { "Borrower" }
                    th { "Email" }
                    th { "Equipment" }
                    th { "Due" }
                }
            }
            tbody {
                for loan in loans.iter() {
                    tr { key: "{loan.request_id}",
                        td { "#{loan.request_id}" }
                        td { "{loan.borrower_name}" }
                        td { "{loan.requester_email}" }
                        td { "{loan.equipment_name}" }
                        td { class: "overdue-date", {format_date(Some(&loan.expected_return_date))} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(equipment_name: Option<&str>) -> LendingRequest {
        LendingRequest {
            request_id: 3,
            equipment_id: 11,
            requester_id: Some(5),
            request_date: "2025-11-01".into(),
            expected_return_date: "2025-11-08".into(),
            quantity: 1,
            status: LendingStatus::Pending,
            borrow_date: None,
            requester_name: None,
            equipment_name: equipment_name.map(Into::into),
            reject_reason: None,
        }
    }

    #[test]
    fn action_messages() {
        assert_eq!(RequestAction::Approve.success_message(4), "Request #4 approved");
        assert_eq!(RequestAction::Return.success_message(4), "Request #4 marked returned");
        assert_eq!(RequestAction::Reject.failure_label(), "Reject failed");
        assert!(RequestAction::Return.changes_stock());
        assert!(!RequestAction::Reject.changes_stock());
    }

    #[test]
    fn equipment_label_prefers_server_name_then_lookup() {
        let mut names = HashMap::new();
        names.insert(11, "Projector".to_string());

        assert_eq!(equipment_label(&request(Some("Camera")), &names), "Camera");
        assert_eq!(equipment_label(&request(None), &names), "Projector");
        assert_eq!(equipment_label(&request(Some("")), &names), "Projector");
        assert_eq!(equipment_label(&request(None), &HashMap::new()), "Equipment #11");
    }

    #[test]
    fn overdue_table_formats_due_dates() {
        let loans = vec![OverdueLoan {
            request_id: 8,
            borrower_name: "Kim".into(),
            requester_email: "kim@uni.test".into(),
            equipment_name: "Drone".into(),
            expected_return_date: "2025-10-30".into(),
        }];
        let html = dioxus_ssr::render_element(rsx! { OverdueTable { loans } });
        assert!(html.contains("Oct 30, 2025"));
        assert!(html.contains("kim@uni.test"));
    }
}
