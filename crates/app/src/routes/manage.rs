use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdListChecks, LdRotateCcw, LdSettings, LdUserPlus, LdWrench,
};
use dioxus_free_icons::Icon;
use shared_types::{ClientError, RepairLogCreate, RepairLogUpdate, Role};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    PageHeader, PageSubtitle, PageTitle, Separator, Textarea, ToastOptions,
};

use crate::auth::use_auth;
use crate::notify::{report_error, report_success};
use crate::requests::use_requests;
use crate::role_gate::RoleGate;

fn parse_id(raw: &str, field: &str) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("{field} must be a positive whole number.")),
    }
}

/// Validate the damage report form.
fn damage_report(equipment_id: &str, description: &str) -> Result<RepairLogCreate, String> {
    let equipment_id = parse_id(equipment_id, "Equipment ID")?;
    let description = description.trim();
    if description.is_empty() {
        return Err("Describe the damage before submitting.".to_string());
    }
    Ok(RepairLogCreate {
        equipment_id,
        damage_description: description.to_string(),
    })
}

/// Validate the repair completion form.
fn repair_update(
    log_id: &str,
    cost: &str,
    repaired_by: &str,
) -> Result<(i64, RepairLogUpdate), String> {
    let log_id = parse_id(log_id, "Log ID")?;
    let repair_cost = cost
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite() && *c >= 0.0)
        .ok_or_else(|| "Repair cost must be a non-negative amount.".to_string())?;
    let repaired_by = repaired_by.trim();
    if repaired_by.is_empty() {
        return Err("Enter who carried out the repair.".to_string());
    }
    Ok((
        log_id,
        RepairLogUpdate {
            repair_cost,
            repaired_by: repaired_by.to_string(),
        },
    ))
}

/// Management portal for staff and administrators.
#[component]
pub fn Manage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./manage.css") }
        RoleGate { allowed: vec![Role::Staff, Role::Admin],
            ManagePortal {}
        }
    }
}

#[component]
fn ManagePortal() -> Element {
    let auth = use_auth();
    let role = auth.role().unwrap_or_default();
    let is_admin = role == Role::Admin;
    let scope = if is_admin {
        "users, equipment, requests, and view analytics."
    } else {
        "lending requests and equipment returns."
    };

    rsx! {
        PageHeader {
            PageTitle { "{role} Management Portal" }
            PageSubtitle { "Use the tools below to manage {scope}" }
        }

        if is_admin {
            section { class: "manage-section manage-admin",
                h2 { class: "manage-section-title",
                    Icon::<LdSettings> { icon: LdSettings, width: 22, height: 22 }
                    "Admin-Only Tools"
                }
                div { class: "manage-grid",
                    ActionCard {
                        title: "User Account Management",
                        description: "Create, view, and manage all user accounts and roles.",
                        Icon::<LdUserPlus> { icon: LdUserPlus, width: 22, height: 22 }
                    }
                    ActionCard {
                        title: "Equipment & Category CRUD",
                        description: "Add, modify, and delete equipment and lending categories.",
                        Icon::<LdSettings> { icon: LdSettings, width: 22, height: 22 }
                    }
                    ActionCard {
                        title: "Usage & Repair Analytics",
                        description: "View top-requested items, average duration, and manage repair logs.",
                        Icon::<LdActivity> { icon: LdActivity, width: 22, height: 22 }
                    }
                }
            }
        }

        section { class: "manage-section manage-lending",
            h2 { class: "manage-section-title",
                Icon::<LdListChecks> { icon: LdListChecks, width: 22, height: 22 }
                "Lending Management"
            }
            div { class: "manage-grid",
                ActionCard {
                    title: "Pending Requests Review",
                    description: "Review, approve, or reject new loan requests from the dashboard.",
                    Icon::<LdListChecks> { icon: LdListChecks, width: 22, height: 22 }
                }
                ActionCard {
                    title: "Track Returns & Overdue",
                    description: "Mark items as returned and check for overdue loans.",
                    Icon::<LdRotateCcw> { icon: LdRotateCcw, width: 22, height: 22 }
                }
            }
        }

        Separator { label: "Repair Logs" }

        div { class: "manage-grid",
            DamageReportForm {}
            if is_admin {
                RepairCompletionForm {}
            }
        }
    }
}

#[component]
fn ActionCard(title: String, description: String, children: Element) -> Element {
    rsx! {
        div { class: "action-card",
            div { class: "action-card-icon", {children} }
            div {
                h3 { class: "action-card-title", "{title}" }
                p { class: "muted", "{description}" }
            }
        }
    }
}

#[component]
fn DamageReportForm() -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let requests = use_requests();
    let mut equipment_id = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let report = match damage_report(&equipment_id.peek(), &description.peek()) {
            Ok(report) => report,
            Err(message) => {
                toasts.error(format!("Damage Report Error: {message}"), ToastOptions::new());
                return;
            }
        };

        saving.set(true);
        let token = auth.token();
        let outcome = requests
            .run(|api| async move { api.log_damage(&report, token.as_deref()).await })
            .await;
        if matches!(outcome, Err(ClientError::Cancelled)) {
            return;
        }
        saving.set(false);
        match outcome {
            Ok(log) => {
                equipment_id.set(String::new());
                description.set(String::new());
                report_success(toasts, format!("Damage logged as repair log #{}.", log.log_id));
            }
            Err(e) => report_error(toasts, "Damage Report Error", &e),
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdWrench> { icon: LdWrench, width: 18, height: 18 }
                    " Report Damage"
                }
                CardDescription { "Open a repair log for a damaged item." }
            }
            CardContent {
                form { class: "manage-form", onsubmit: submit,
                    Input {
                        label: "Equipment ID",
                        input_type: "number",
                        min: "1",
                        required: true,
                        value: equipment_id.read().clone(),
                        on_input: move |e: FormEvent| equipment_id.set(e.value()),
                    }
                    Textarea {
                        label: "Damage Description",
                        placeholder: "What is broken?",
                        required: true,
                        value: description.read().clone(),
                        on_input: move |e: FormEvent| description.set(e.value()),
                    }
                    Button {
                        submit: true,
                        busy: saving(),
                        busy_label: "Submitting...".to_string(),
                        "Submit Report"
                    }
                }
            }
        }
    }
}

#[component]
fn RepairCompletionForm() -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let requests = use_requests();
    let mut log_id = use_signal(String::new);
    let mut cost = use_signal(String::new);
    let mut repaired_by = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let (id, update) = match repair_update(&log_id.peek(), &cost.peek(), &repaired_by.peek()) {
            Ok(parsed) => parsed,
            Err(message) => {
                toasts.error(format!("Repair Update Error: {message}"), ToastOptions::new());
                return;
            }
        };

        saving.set(true);
        let token = auth.token();
        let outcome = requests
            .run(|api| async move { api.complete_repair(id, &update, token.as_deref()).await })
            .await;
        if matches!(outcome, Err(ClientError::Cancelled)) {
            return;
        }
        saving.set(false);
        match outcome {
            Ok(response) => {
                log_id.set(String::new());
                cost.set(String::new());
                repaired_by.set(String::new());
                let message = response
                    .message
                    .unwrap_or_else(|| format!("Repair log #{id} completed."));
                report_success(toasts, message);
            }
            Err(e) => report_error(toasts, "Repair Update Error", &e),
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Complete Repair" }
                CardDescription { "Record the cost and technician for a repair log." }
            }
            CardContent {
                form { class: "manage-form", onsubmit: submit,
                    Input {
                        label: "Repair Log ID",
                        input_type: "number",
                        min: "1",
                        required: true,
                        value: log_id.read().clone(),
                        on_input: move |e: FormEvent| log_id.set(e.value()),
                    }
                    Input {
                        label: "Repair Cost",
                        input_type: "number",
                        min: "0",
                        required: true,
                        value: cost.read().clone(),
                        on_input: move |e: FormEvent| cost.set(e.value()),
                    }
                    Input {
                        label: "Repaired By",
                        required: true,
                        value: repaired_by.read().clone(),
                        on_input: move |e: FormEvent| repaired_by.set(e.value()),
                    }
                    Button {
                        submit: true,
                        busy: saving(),
                        busy_label: "Saving...".to_string(),
                        "Mark Repaired"
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

    #[test]
    fn damage_report_trims_and_validates() {
        assert_eq!(
            damage_report(" 4 ", "  cracked lens "),
            Ok(RepairLogCreate {
                equipment_id: 4,
                damage_description: "cracked lens".into(),
            })
        );
        assert_eq!(
            damage_report("0", "x"),
            Err("Equipment ID must be a positive whole number.".to_string())
        );
        assert_eq!(
            damage_report("4", "   "),
            Err("Describe the damage before submitting.".to_string())
        );
    }

    #[test]
    fn repair_update_parses_cost() {
        let (id, update) = repair_update("12", "45.50", "Tech Team").unwrap();
        assert_eq!(id, 12);
        assert_eq!(update.repair_cost, 45.5);
        assert_eq!(update.repaired_by, "Tech Team");
    }

    #[test]
    fn repair_update_rejects_bad_input() {
        assert!(repair_update("abc", "1", "Sam").is_err());
        assert_eq!(
            repair_update("3", "-2", "Sam").unwrap_err(),
            "Repair cost must be a non-negative amount."
        );
        assert!(repair_update("3", "10", " ").is_err());
    }

    #[test]
    fn action_card_renders_title() {
        let html = dioxus_ssr::render_element(rsx! {
            ActionCard { title: "Track Returns", description: "Overdue loans", "icon" }
        });
        assert!(html.contains("Track Returns"));
        assert!(html.contains("Overdue loans"));
    }
}
