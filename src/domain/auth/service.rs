use super::error::AuthServiceError;
use super::{LoginRequest, RegisterRequest, Session};
use crate::domain::shared::validation::validate_name;
use crate::domain::user::User;
use crate::infrastructure::repositories::{AuthRepository, TokenRepository};
use async_trait::async_trait;
use std::sync::Arc;

pub struct AuthService {
    auth_repo: Arc<dyn AuthRepository>,
    tokens: Arc<dyn TokenRepository>,
}

impl AuthService {
    pub fn new(auth_repo: Arc<dyn AuthRepository>, tokens: Arc<dyn TokenRepository>) -> Self {
        Self { auth_repo, tokens }
    }
}

#[async_trait]
pub trait AuthServiceApi: Send + Sync {
    /// Logs in and persists the token for later invocations
    async fn login(&self, request: LoginRequest) -> Result<Session, AuthServiceError>;

    async fn register(&self, request: RegisterRequest) -> Result<User, AuthServiceError>;

    /// Session backed by whatever token is in the store. No request is made.
    fn restore_session(&self) -> Result<Session, AuthServiceError>;

    /// Loads the profile behind the session's token and caches it on the session
    async fn current_user(&self, session: &mut Session) -> Result<User, AuthServiceError>;

    async fn update_profile(
        &self,
        session: &mut Session,
        full_name: &str,
    ) -> Result<User, AuthServiceError>;

    /// Forgets the token locally. The backend call is best-effort since
    /// tokens are stateless on that side.
    async fn logout(&self, session: &mut Session) -> Result<(), AuthServiceError>;
}

#[async_trait]
impl AuthServiceApi for AuthService {
    async fn login(&self, request: LoginRequest) -> Result<Session, AuthServiceError> {
        let request = request.validated()?;
        let response = self.auth_repo.login(&request).await?;

        self.tokens.save(&response.access_token)?;

        tracing::info!(
            user_id = response.user.id,
            is_admin = response.user.is_admin,
            "User logged in"
        );

        Ok(Session::authenticated(response.access_token, response.user))
    }

    async fn register(&self, request: RegisterRequest) -> Result<User, AuthServiceError> {
        let request = request.validated()?;
        let user = self.auth_repo.register(&request).await?;
        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    fn restore_session(&self) -> Result<Session, AuthServiceError> {
        Ok(match self.tokens.load()? {
            Some(token) => Session::with_token(token),
            None => Session::anonymous(),
        })
    }

    async fn current_user(&self, session: &mut Session) -> Result<User, AuthServiceError> {
        let user = {
            let token = session.require_token()?;
            self.auth_repo.me(token).await?
        };
        session.set_user(user.clone());
        Ok(user)
    }

    async fn update_profile(
        &self,
        session: &mut Session,
        full_name: &str,
    ) -> Result<User, AuthServiceError> {
        let full_name = validate_name("Full name", full_name)?;
        let user = {
            let token = session.require_token()?;
            self.auth_repo.update_profile(token, &full_name).await?
        };
        tracing::info!(user_id = user.id, "Profile updated");
        session.set_user(user.clone());
        Ok(user)
    }

    async fn logout(&self, session: &mut Session) -> Result<(), AuthServiceError> {
        if let Some(token) = session.token() {
            if let Err(e) = self.auth_repo.logout(token).await {
                tracing::debug!(error = %e, "Backend logout failed, token discarded anyway");
            }
        }

        self.tokens.clear()?;
        session.invalidate();
        tracing::info!("Logged out");
        Ok(())
    }
}
