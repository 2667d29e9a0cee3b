use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a loan: Pending → Approved/Rejected → Issued → Returned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LendingStatus {
    #[default]
    Pending,
    Approved,
    Issued,
    Returned,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl LendingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LendingStatus::Pending => "Pending",
            LendingStatus::Approved => "Approved",
            LendingStatus::Issued => "Issued",
            LendingStatus::Returned => "Returned",
            LendingStatus::Rejected => "Rejected",
            LendingStatus::Unknown => "Unknown",
        }
    }

    /// Requests that still need staff attention.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            LendingStatus::Pending | LendingStatus::Approved | LendingStatus::Issued
        )
    }

    pub fn can_review(&self) -> bool {
        matches!(self, LendingStatus::Pending)
    }

    pub fn can_mark_returned(&self) -> bool {
        matches!(self, LendingStatus::Approved | LendingStatus::Issued)
    }
}

impl fmt::Display for LendingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loan request record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LendingRequest {
    pub request_id: i64,
    pub equipment_id: i64,
    #[serde(default)]
    pub requester_id: Option<i64>,
    #[serde(default)]
    pub request_date: String,
    #[serde(default)]
    pub expected_return_date: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub status: LendingStatus,
    #[serde(default)]
    pub borrow_date: Option<String>,
    #[serde(default)]
    pub requester_name: Option<String>,
    #[serde(default)]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub reject_reason: Option<String>,
}

/// Body for `POST /lending/request`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LendingRequestCreate {
    pub equipment_id: i64,
    pub quantity: i64,
    /// `YYYY-MM-DD`
    pub expected_return_date: String,
}

/// Body for `POST /lending/reject/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RejectRequest {
    pub reason: String,
}

/// An issued loan past its expected return date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverdueLoan {
    pub request_id: i64,
    #[serde(default)]
    pub borrower_name: String,
    #[serde(default)]
    pub requester_email: String,
    #[serde(default)]
    pub equipment_name: String,
    #[serde(default)]
    pub expected_return_date: String,
}

/// Keep only requests that still need staff attention.
pub fn active_requests(requests: Vec<LendingRequest>) -> Vec<LendingRequest> {
    requests
        .into_iter()
        .filter(|r| r.status.is_active())
        .collect()
}
