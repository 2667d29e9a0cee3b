use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdRefreshCw;
use dioxus_free_icons::Icon;
use shared_types::{AverageDuration, Equipment, EquipmentQuery, TopRequestedItem};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    EmptyState, PageActions, PageHeader, PageSubtitle, PageTitle, SkeletonRows, StatCard,
};

use super::staff::OverdueTable;
use crate::auth::use_auth;
use crate::notify::report_error;
use crate::requests::use_requests;

/// Headline numbers for the inventory section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct InventoryTotals {
    items: usize,
    units: i64,
    available: i64,
    out_of_stock: usize,
}

impl InventoryTotals {
    fn from_items(items: &[Equipment]) -> Self {
        items.iter().fold(Self::default(), |mut totals, item| {
            totals.items += 1;
            totals.units += item.total_quantity;
            totals.available += item.available_quantity;
            if !item.is_available() {
                totals.out_of_stock += 1;
            }
            totals
        })
    }
}

/// Administrator overview. Each section loads on its own; one failing
/// endpoint leaves the others intact.
#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let requests = use_requests();
    let session = auth.session();
    let name = session.display_name().to_string();

    let mut inventory = use_resource(move || {
        let token = auth.token();
        async move {
            let outcome = requests
                .run(|api| async move {
                    api.list_equipment(&EquipmentQuery::default(), token.as_deref())
                        .await
                })
                .await;
            if let Err(e) = &outcome {
                report_error(toasts, "Failed to load equipment", e);
            }
            outcome.ok()
        }
    });

    let mut overdue = use_resource(move || {
        let token = auth.token();
        async move {
            let outcome = requests
                .run(|api| async move { api.list_overdue(token.as_deref()).await })
                .await;
            if let Err(e) = &outcome {
                report_error(toasts, "Failed to load overdue loans", e);
            }
            outcome.ok()
        }
    });

    let mut top = use_resource(move || {
        let token = auth.token();
        async move {
            let outcome = requests
                .run(|api| async move { api.top_requested(token.as_deref()).await })
                .await;
            if let Err(e) = &outcome {
                report_error(toasts, "Failed to load top requested items", e);
            }
            outcome.ok()
        }
    });

    let mut durations = use_resource(move || {
        let token = auth.token();
        async move {
            let outcome = requests
                .run(|api| async move { api.average_duration(token.as_deref()).await })
                .await;
            if let Err(e) = &outcome {
                report_error(toasts, "Failed to load loan durations", e);
            }
            outcome.ok()
        }
    });

    let totals = inventory
        .read()
        .as_ref()
        .and_then(|r| r.as_deref().map(InventoryTotals::from_items));
    let overdue_count = overdue
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().map(Vec::len));
    let dash = || "-".to_string();

    rsx! {
        PageHeader {
            PageTitle { "Administrator Dashboard" }
            PageSubtitle { "Signed in as {name}" }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        inventory.restart();
                        overdue.restart();
                        top.restart();
                        durations.restart();
                    },
                    Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 16, height: 16 }
                    "Refresh"
                }
            }
        }

        div { class: "stat-grid",
            StatCard {
                label: "Equipment Items",
                value: totals.map(|t| t.items.to_string()).unwrap_or_else(dash),
                hint: totals.map(|t| format!("{} out of stock", t.out_of_stock)).unwrap_or_default(),
            }
            StatCard {
                label: "Units Available",
                value: totals.map(|t| t.available.to_string()).unwrap_or_else(dash),
                hint: totals.map(|t| format!("of {} total", t.units)).unwrap_or_default(),
            }
            StatCard {
                label: "Overdue Loans",
                value: overdue_count.map(|n| n.to_string()).unwrap_or_else(dash),
            }
        }

        Card {
            CardHeader {
                CardTitle { "Equipment Inventory" }
            }
            CardContent {
                match &*inventory.read() {
                    Some(Some(items)) if items.is_empty() => rsx! {
                        EmptyState { message: "No equipment found." }
                    },
                    Some(Some(items)) => rsx! {
                        div { class: "inventory-list",
                            for item in items.iter() {
                                div { key: "{item.equipment_id}", class: "inventory-row",
                                    div {
                                        p { class: "inventory-name", "{item.name}" }
                                        p { class: "muted", {item.category_label()} }
                                    }
                                    div { class: "inventory-stock",
                                        p { class: "inventory-count",
                                            "{item.available_quantity}/{item.total_quantity}"
                                        }
                                        p { class: "muted", "Available / Total" }
                                    }
                                }
                            }
                        }
                    },
                    Some(None) => rsx! {
                        EmptyState { message: "Equipment inventory is unavailable." }
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
            }
            CardContent {
                match &*overdue.read() {
                    Some(Some(loans)) if loans.is_empty() => rsx! {
                        EmptyState { message: "No overdue loans." }
                    },
                    Some(Some(loans)) => rsx! {
                        OverdueTable { loans: loans.clone() }
                    },
                    Some(None) => rsx! {
                        EmptyState { message: "Overdue loans are unavailable." }
                    },
                    None => rsx! {
                        SkeletonRows { rows: 3 }
                    },
                }
            }
        }

        div { class: "analytics-grid",
            Card {
                CardHeader {
                    CardTitle { "Top Requested Items" }
                    CardDescription { "Total units borrowed per item." }
                }
                CardContent {
                    match &*top.read() {
                        Some(Some(items)) if items.is_empty() => rsx! {
                            EmptyState { message: "No lending activity yet." }
                        },
                        Some(Some(items)) => rsx! {
                            TopRequestedTable { items: items.clone() }
                        },
                        Some(None) => rsx! {
                            EmptyState { message: "Usage analytics are unavailable." }
                        },
                        None => rsx! {
                            SkeletonRows { rows: 3 }
                        },
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Average Loan Duration" }
                    CardDescription { "Days between issue and return." }
                }
                CardContent {
                    match &*durations.read() {
                        Some(Some(items)) if items.is_empty() => rsx! {
                            EmptyState { message: "No completed loans yet." }
                        },
                        Some(Some(items)) => rsx! {
                            DurationTable { items: items.clone() }
                        },
                        Some(None) => rsx! {
                            EmptyState { message: "Duration analytics are unavailable." }
                        },
                        None => rsx! {
                            SkeletonRows { rows: 3 }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TopRequestedTable(items: Vec<TopRequestedItem>) -> Element {
    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "Equipment" }
                    th { class: "numeric", "Units Borrowed" }
                }
            }
            tbody {
                for item in items.iter() {
                    tr {
                        td { "{item.equipment_name}" }
                        td { class: "numeric", "{item.total_units_borrowed}" }
                    }
                }
            }
        }
    }
}

#[component]
fn DurationTable(items: Vec<AverageDuration>) -> Element {
    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "Equipment" }
                    th { class: "numeric", "Average Duration" }
                }
            }
            tbody {
                for item in items.iter() {
                    tr {
                        td { "{item.equipment_name}" }
                        td { class: "numeric", {item.days_label()} }
                    }
                }
            }
        }
    }
}
