use shared_types::{
    active_requests, ClientError, LendingRequest, LendingRequestCreate, MessageResponse,
    OverdueLoan, RejectRequest,
};
use tracing::warn;

use crate::http::{decode, encode, ApiClient, HttpMethod};

pub const PENDING_REQUESTS_PATH: &str = "/lending/requests?status=Pending";
pub const LENDING_FALLBACK_PATH: &str = "/lending";

impl ApiClient {
    /// `POST /lending/request`
    pub async fn create_lending_request(
        &self,
        request: &LendingRequestCreate,
        token: Option<&str>,
    ) -> Result<LendingRequest, ClientError> {
        let body = encode(request)?;
        self.call_json("/lending/request", HttpMethod::Post, Some(body), token)
            .await
    }

    /// Requests awaiting staff action (Pending, Approved or Issued).
    ///
    /// Tries the filtered listing first and falls back to the full listing
    /// when that endpoint fails for any reason.
    pub async fn list_active_requests(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<LendingRequest>, ClientError> {
        let requests = match self
            .call_json::<Vec<LendingRequest>>(PENDING_REQUESTS_PATH, HttpMethod::Get, None, token)
            .await
        {
            Ok(requests) => requests,
            Err(ClientError::Cancelled) => return Err(ClientError::Cancelled),
            Err(e) => {
                warn!(error = %e, "pending listing unavailable, falling back to {LENDING_FALLBACK_PATH}");
                self.call_json(LENDING_FALLBACK_PATH, HttpMethod::Get, None, token)
                    .await?
            }
        };
        Ok(active_requests(requests))
    }

    /// `POST /lending/approve/{id}`
    pub async fn approve_request(
        &self,
        request_id: i64,
        token: Option<&str>,
    ) -> Result<MessageResponse, ClientError> {
        let path = format!("/lending/approve/{request_id}");
        let value = self.call(&path, HttpMethod::Post, None, token).await?;
        decode(value)
    }

    /// `POST /lending/reject/{id}` with an optional reason.
    pub async fn reject_request(
        &self,
        request_id: i64,
        reason: &str,
        token: Option<&str>,
    ) -> Result<MessageResponse, ClientError> {
        let path = format!("/lending/reject/{request_id}");
        let body = encode(&RejectRequest {
            reason: reason.trim().to_string(),
        })?;
        let value = self.call(&path, HttpMethod::Post, Some(body), token).await?;
        decode(value)
    }

    /// `POST /lending/return/{id}`
    pub async fn mark_returned(
        &self,
        request_id: i64,
        token: Option<&str>,
    ) -> Result<MessageResponse, ClientError> {
        let path = format!("/lending/return/{request_id}");
        let value = self.call(&path, HttpMethod::Post, None, token).await?;
        decode(value)
    }

    /// `GET /lending/overdue`
    pub async fn list_overdue(&self, token: Option<&str>) -> Result<Vec<OverdueLoan>, ClientError> {
        self.call_json("/lending/overdue", HttpMethod::Get, None, token)
            .await
    }
}
