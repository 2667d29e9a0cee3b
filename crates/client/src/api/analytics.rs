use shared_types::{
    AverageDuration, ClientError, MessageResponse, RepairLog, RepairLogCreate, RepairLogUpdate,
    TopRequestedItem,
};

use crate::http::{decode, encode, ApiClient, HttpMethod};

impl ApiClient {
    /// `GET /analytics/usage/top-requested`
    pub async fn top_requested(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<TopRequestedItem>, ClientError> {
        self.call_json("/analytics/usage/top-requested", HttpMethod::Get, None, token)
            .await
    }

    /// `GET /analytics/usage/average-duration`
    pub async fn average_duration(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<AverageDuration>, ClientError> {
        self.call_json("/analytics/usage/average-duration", HttpMethod::Get, None, token)
            .await
    }

    /// `POST /analytics/repair-log`
    pub async fn log_damage(
        &self,
        report: &RepairLogCreate,
        token: Option<&str>,
    ) -> Result<RepairLog, ClientError> {
        let body = encode(report)?;
        self.call_json("/analytics/repair-log", HttpMethod::Post, Some(body), token)
            .await
    }

    /// `PUT /analytics/repair-log/{id}`
    pub async fn complete_repair(
        &self,
        log_id: i64,
        update: &RepairLogUpdate,
        token: Option<&str>,
    ) -> Result<MessageResponse, ClientError> {
        let path = format!("/analytics/repair-log/{log_id}");
        let body = encode(update)?;
        let value = self.call(&path, HttpMethod::Put, Some(body), token).await?;
        decode(value)
    }
}
