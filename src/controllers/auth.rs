use std::sync::Arc;

use super::render;
use crate::domain::auth::{LoginRequest, RegisterRequest, Session};
use crate::{
    domain::auth::{AuthService, AuthServiceApi},
    error::AppResult,
};

pub struct AuthController {
    auth_service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// Session for this invocation, from the stored token
    pub fn session(&self) -> AppResult<Session> {
        Ok(self.auth_service.restore_session()?)
    }

    /// `login` - Exchange credentials for a stored token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let session = self
            .auth_service
            .login(LoginRequest::new(email, password))
            .await?;
        let name = session
            .user()
            .map(|u| u.full_name.as_str())
            .unwrap_or(email);
        Ok(format!("Logged in as {}", name))
    }

    /// `register` - Create an account
    pub async fn register(&self, request: RegisterRequest) -> AppResult<String> {
        let user = self.auth_service.register(request).await?;
        Ok(format!(
            "Account created for {}. You can now log in.",
            user.email
        ))
    }

    /// `logout` - Forget the stored token
    pub async fn logout(&self, session: &mut Session) -> AppResult<String> {
        self.auth_service.logout(session).await?;
        Ok("Logged out".to_string())
    }

    /// `me` - Show, or with a name update, the caller's profile
    pub async fn me(&self, session: &mut Session, full_name: Option<&str>) -> AppResult<String> {
        let user = match full_name {
            Some(name) => self.auth_service.update_profile(session, name).await?,
            None => self.auth_service.current_user(session).await?,
        };
        Ok(render::user(&user))
    }
}
