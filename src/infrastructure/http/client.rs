use super::request_id::{RequestId, X_REQUEST_ID};
use crate::domain::shared::ErrorResponse;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::TokenRepository;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// HTTP client for the SEA Catering backend.
///
/// One request per call, no retries. Failures are mapped onto the error
/// taxonomy:
/// - transport errors become `NetworkFailure`
/// - 401 on an authenticated request clears the stored token and becomes
///   `AuthRequired`
/// - any other non-2xx becomes `RemoteRejection` carrying the backend's
///   `detail` text unchanged
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
    tokens: Arc<dyn TokenRepository>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenRepository>) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("sea-catering/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}{}", self.base_url, path))
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    /// Sends the request, attaching the bearer token (if any) and a fresh
    /// request id, and decodes a successful JSON body into `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        token: Option<&str>,
    ) -> AppResult<T> {
        let request_id = RequestId::generate();
        let mut builder = builder.header(X_REQUEST_ID, request_id.as_str());
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        let request = builder
            .build()
            .map_err(|e| AppError::Config(format!("Invalid request: {}", e)))?;

        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(
            method = %method,
            path = %path,
            request_id = %request_id,
            authenticated = token.is_some(),
            "Sending request"
        );

        let response = self.http_client.execute(request).await.map_err(|e| {
            tracing::warn!(
                method = %method,
                path = %path,
                request_id = %request_id,
                error = %e,
                "Request did not complete"
            );
            AppError::NetworkFailure(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                AppError::Internal(format!("Failed to parse response from {}: {}", path, e))
            });
        }

        let message = Self::error_message(response).await;
        tracing::warn!(
            method = %method,
            path = %path,
            request_id = %request_id,
            status = status.as_u16(),
            message = %message,
            "Backend rejected request"
        );

        if status == StatusCode::UNAUTHORIZED && token.is_some() {
            self.tokens.clear()?;
            tracing::info!("Cleared stored token after 401");
            return Err(AppError::AuthRequired(message));
        }

        Err(AppError::RemoteRejection {
            status: status.as_u16(),
            message,
        })
    }

    async fn error_message(response: Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => error.message(),
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        }
    }
}
