//! # Backend client
//!
//! [`Client`] wraps every HTTP call the app makes. It owns the endpoint
//! configuration and a [`Session`], attaches the bearer token to each
//! request when one is stored, and funnels every non-success response
//! through [`crate::error::normalize`].
//!
//! The 401 rule is global: whichever endpoint answers 401, the session is
//! destroyed. If the failed request actually carried a credential the
//! client also forces navigation back to the public entry path; a 401 on
//! an unauthenticated login attempt instead surfaces its message, since
//! there was no session to tear down and the user is already on the entry
//! page.

use serde::Deserialize;

use store::{ApiConfig, Session, SessionStore, UserProfile};

use crate::error::{self, ApiError, FALLBACK_MESSAGE};
use crate::models::history::HistoryRecord;
use crate::models::predict::{PredictionInput, PredictionResult};

/// Successful login/registration payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub message: String,
    pub user: UserProfile,
}

/// Status-only response payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Bulk prediction outcome: per-row results plus a server-side spreadsheet.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BulkPredictionResponse {
    #[serde(default)]
    pub message: String,
    pub count: usize,
    pub download_file_name: String,
    #[serde(default)]
    pub result: Vec<PredictionResult>,
}

/// HTTP client for the prediction backend.
#[derive(Clone, Debug)]
pub struct Client<S: SessionStore> {
    config: ApiConfig,
    session: Session<S>,
    http: reqwest::Client,
}

impl<S: SessionStore> Client<S> {
    pub fn new(config: ApiConfig, session: Session<S>) -> Self {
        Self {
            config,
            session,
            http: reqwest::Client::new(),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Attach the credential, send, and normalize failures.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let token = self.session.token();
        let request = match &token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|err| {
            tracing::error!("request failed: {err}");
            ApiError::Network(FALLBACK_MESSAGE.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.session.clear();
            if token.is_some() {
                force_entry_path();
            }
        }

        let body = response.text().await.unwrap_or_default();
        Err(error::normalize(status.as_u16(), &body))
    }

    async fn receive<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response.json().await.map_err(|err| {
            tracing::error!("unexpected response body: {err}");
            ApiError::Server(FALLBACK_MESSAGE.to_string())
        })
    }

    /// Sign in. On success the token and profile snapshot are stored.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response = self
            .send(
                self.http
                    .post(self.config.endpoint("/auth/login"))
                    .json(&serde_json::json!({"email": email, "password": password})),
            )
            .await?;
        let auth: AuthResponse = self.receive(response).await?;
        self.store_session(&auth);
        Ok(auth)
    }

    /// Create an account. Same storage semantics as [`Client::login`].
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResponse, ApiError> {
        let response = self
            .send(self.http.post(self.config.endpoint("/auth/register")).json(
                &serde_json::json!({"email": email, "password": password, "name": name}),
            ))
            .await?;
        let auth: AuthResponse = self.receive(response).await?;
        self.store_session(&auth);
        Ok(auth)
    }

    fn store_session(&self, auth: &AuthResponse) {
        self.session.set_token(&auth.access_token);
        self.session.set_profile(&auth.user);
    }

    /// Change the password by proving the old one.
    pub async fn reset_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .send(
                self.http
                    .post(self.config.endpoint("/auth/reset-password"))
                    .json(&serde_json::json!({
                        "email": email,
                        "old_password": old_password,
                        "new_password": new_password,
                    })),
            )
            .await?;
        self.receive(response).await
    }

    /// Destroy the session and return to the entry path. Client-side only;
    /// the bearer token has no server-side state to revoke.
    pub fn logout(&self) {
        self.session.clear();
        force_entry_path();
    }

    /// Score one validated input.
    pub async fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, ApiError> {
        let response = self
            .send(self.http.post(self.config.endpoint("/predict")).json(input))
            .await?;
        self.receive(response).await
    }

    /// Upload a spreadsheet of inputs for batch scoring.
    pub async fn predict_bulk(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<BulkPredictionResponse, ApiError> {
        let part = reqwest::multipart::Part::bytes(contents).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .send(
                self.http
                    .post(self.config.endpoint("/predict/bulk"))
                    .multipart(form),
            )
            .await?;
        self.receive(response).await
    }

    /// Fetch the stored prediction history, newest first per the server.
    pub async fn history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let response = self.send(self.http.get(self.config.endpoint("/history"))).await?;
        self.receive(response).await
    }

    /// Fetch raw bytes from a server-relative path (spreadsheet downloads).
    pub async fn download(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.http.get(self.config.endpoint(path))).await?;
        let bytes = response.bytes().await.map_err(|err| {
            tracing::error!("download failed: {err}");
            ApiError::Network(FALLBACK_MESSAGE.to_string())
        })?;
        Ok(bytes.to_vec())
    }

    /// The exported history spreadsheet.
    pub async fn export_history(&self) -> Result<Vec<u8>, ApiError> {
        self.download("/history/export").await
    }
}

#[cfg(target_arch = "wasm32")]
fn force_entry_path() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn force_entry_path() {}

/// Client over the platform session store.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_client() -> Client<store::LocalStore> {
    Client::new(ApiConfig::from_env(), Session::new(store::LocalStore::new()))
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn make_client() -> Client<store::MemoryStore> {
    Client::new(ApiConfig::from_env(), Session::new(store::MemoryStore::new()))
}
