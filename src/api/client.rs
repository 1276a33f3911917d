//! Shared HTTP client for the booking API.

use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

use super::types::{ErrorBody, NewUser, ProfileUpdate, SessionResponse, SignInRequest, UserEnvelope};
use crate::error::NetworkError;
use crate::models::{AppointmentDraft, AvailabilitySlot, Provider, User};
use crate::traits::{Headers, HttpClient, MultipartFile, Response};

/// Default base URL of the booking API.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Client for the booking API.
///
/// Cloning is cheap and every clone shares the same bearer token, so a token
/// set after sign-in is attached to requests made through any clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    token: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.auth_token().is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the bearer token for all clones of this client.
    pub fn set_auth_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub fn auth_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(&self, json_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if json_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = self.auth_token() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Turn non-2xx responses into [`NetworkError::HttpStatus`], preferring
    /// the API's own error message when the body carries one.
    fn check_status(response: Response) -> Result<Response, NetworkError> {
        if response.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .map(|body| body.message)
            .or_else(|_| response.text())
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(NetworkError::HttpStatus {
            status: response.status,
            message,
        })
    }

    fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, NetworkError> {
        response.json().map_err(|e| NetworkError::InvalidResponse {
            message: e.to_string(),
        })
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, NetworkError> {
        serde_json::to_string(body).map_err(|e| NetworkError::Other {
            message: format!("Failed to encode request: {}", e),
        })
    }

    async fn get(&self, path: &str) -> Result<Response, NetworkError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url, &self.headers(false))
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        Self::check_status(response)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, NetworkError> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url, &Self::encode(body)?, &self.headers(true))
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        Self::check_status(response)
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, NetworkError> {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self
            .http
            .put(&url, &Self::encode(body)?, &self.headers(true))
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        Self::check_status(response)
    }

    /// Exchange credentials for a user and token.
    ///
    /// POST /sessions
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionResponse, NetworkError> {
        let body = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.post("sessions", &body).await?;
        Self::decode(&response)
    }

    /// POST /users
    pub async fn register_user(&self, user: &NewUser) -> Result<(), NetworkError> {
        self.post("users", user).await.map(|_| ())
    }

    /// GET /providers
    pub async fn list_providers(&self) -> Result<Vec<Provider>, NetworkError> {
        let response = self.get("providers").await?;
        Self::decode(&response)
    }

    /// Availability of one provider for one calendar day.
    ///
    /// GET /providers/{id}/day-availability?year=&month=&day=
    pub async fn day_availability(
        &self,
        provider_id: &str,
        day: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, NetworkError> {
        let path = format!(
            "providers/{}/day-availability?year={}&month={}&day={}",
            provider_id,
            day.year(),
            day.month(),
            day.day()
        );
        let response = self.get(&path).await?;
        Self::decode(&response)
    }

    /// POST /appointments
    pub async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<(), NetworkError> {
        self.post("appointments", draft).await.map(|_| ())
    }

    /// PUT /profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, NetworkError> {
        let response = self.put("profile", update).await?;
        Self::decode::<UserEnvelope>(&response).map(User::from)
    }

    /// PATCH /users/avatar
    pub async fn update_avatar(&self, file: MultipartFile) -> Result<User, NetworkError> {
        let url = self.url("users/avatar");
        debug!("PATCH {} ({} bytes)", url, file.bytes.len());
        let response = self
            .http
            .patch_multipart(&url, file, &self.headers(false))
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        let response = Self::check_status(response).inspect_err(|e| {
            warn!("Avatar upload rejected: {}", e);
        })?;
        Self::decode::<UserEnvelope>(&response).map(User::from)
    }
}
