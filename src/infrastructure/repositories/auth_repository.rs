use crate::domain::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::domain::shared::MessageResponse;
use crate::domain::user::{User, UserResponse};
use crate::error::{AppError, AppResult};
use crate::infrastructure::http::ApiClient;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> AppResult<TokenResponse>;

    async fn register(&self, request: &RegisterRequest) -> AppResult<User>;

    async fn me(&self, token: &str) -> AppResult<User>;

    async fn update_profile(&self, token: &str, full_name: &str) -> AppResult<User>;

    async fn logout(&self, token: &str) -> AppResult<()>;
}

pub struct HttpAuthRepository {
    client: Arc<ApiClient>,
}

impl HttpAuthRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

pub(crate) fn unwrap_user(response: UserResponse) -> AppResult<User> {
    response.user.ok_or_else(|| {
        AppError::Internal(format!(
            "Backend response carried no user: {}",
            response.message
        ))
    })
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn login(&self, request: &LoginRequest) -> AppResult<TokenResponse> {
        // no token: a 401 here is a bad password, not an expired session
        self.client
            .send(self.client.post("/auth/login").json(request), None)
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<User> {
        let response: UserResponse = self
            .client
            .send(self.client.post("/auth/register").json(request), None)
            .await?;
        unwrap_user(response)
    }

    async fn me(&self, token: &str) -> AppResult<User> {
        let response: UserResponse = self
            .client
            .send(self.client.get("/auth/me"), Some(token))
            .await?;
        unwrap_user(response)
    }

    async fn update_profile(&self, token: &str, full_name: &str) -> AppResult<User> {
        let response: UserResponse = self
            .client
            .send(
                self.client
                    .put("/auth/me")
                    .query(&[("full_name", full_name)]),
                Some(token),
            )
            .await?;
        unwrap_user(response)
    }

    async fn logout(&self, token: &str) -> AppResult<()> {
        let _: MessageResponse = self
            .client
            .send(self.client.post("/auth/logout"), Some(token))
            .await?;
        Ok(())
    }
}
