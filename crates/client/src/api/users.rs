use shared_types::{AuthResult, ClientError, LoginRequest, LoginResponse, SignupRequest};
use tracing::info;

use crate::http::{encode, ApiClient, HttpMethod};

impl ApiClient {
    /// `POST /users/login`. A response missing any session field is
    /// rejected with `InvalidResponse`.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResult, ClientError> {
        let body = encode(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        let raw: LoginResponse = self
            .call_json("/users/login", HttpMethod::Post, Some(body), None)
            .await?;
        let auth = raw.into_auth_result()?;
        info!(user_id = auth.user_id, role = %auth.role, "login succeeded");
        Ok(auth)
    }

    /// `POST /users/signup`. Any 2xx counts as success.
    pub async fn signup(
        &self,
        request: &SignupRequest,
        token: Option<&str>,
    ) -> Result<(), ClientError> {
        let body = encode(request)?;
        self.call("/users/signup", HttpMethod::Post, Some(body), token)
            .await?;
        info!(username = %request.username, role = %request.role, "account created");
        Ok(())
    }
}
