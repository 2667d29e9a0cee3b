use shared_types::{Category, ClientError, Equipment, EquipmentQuery};

use crate::http::{with_query, ApiClient, HttpMethod};

impl ApiClient {
    /// `GET /equipment/` with optional search and category filters.
    pub async fn list_equipment(
        &self,
        query: &EquipmentQuery,
        token: Option<&str>,
    ) -> Result<Vec<Equipment>, ClientError> {
        let path = with_query("/equipment/", &query.pairs());
        self.call_json(&path, HttpMethod::Get, None, token).await
    }

    /// `GET /equipment_category/`
    pub async fn list_categories(&self, token: Option<&str>) -> Result<Vec<Category>, ClientError> {
        self.call_json("/equipment_category/", HttpMethod::Get, None, token)
            .await
    }
}
