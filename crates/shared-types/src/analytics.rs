use crate::common::{lenient_f64, lenient_opt_f64};
use serde::{Deserialize, Serialize};

/// Row of `GET /analytics/usage/top-requested`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopRequestedItem {
    pub equipment_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_units_borrowed: f64,
}

/// Row of `GET /analytics/usage/average-duration`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AverageDuration {
    pub equipment_name: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub avg_loan_duration_days: Option<f64>,
}

impl AverageDuration {
    pub fn days_label(&self) -> String {
        match self.avg_loan_duration_days {
            Some(days) => format!("{days:.1} days"),
            None => "N/A".to_string(),
        }
    }
}

/// Body for `POST /analytics/repair-log`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepairLogCreate {
    pub equipment_id: i64,
    pub damage_description: String,
}

/// Body for `PUT /analytics/repair-log/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepairLogUpdate {
    pub repair_cost: f64,
    pub repaired_by: String,
}

/// A damage/repair log entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepairLog {
    pub log_id: i64,
    pub equipment_id: i64,
    #[serde(default)]
    pub damage_description: String,
    #[serde(default)]
    pub report_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub repair_cost: Option<f64>,
    #[serde(default)]
    pub repair_date: Option<String>,
}
