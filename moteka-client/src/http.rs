//! HTTP transport for the Moteka API
//!
//! Thin reqwest wrapper. Every request carries
//! `Authorization: Bearer <token>` whenever the session store currently
//! holds one; non-2xx responses are decoded from the backend's
//! `{"error": "..."}` body into typed errors. Calls are fire-once:
//! no retry, no caching.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionService;

/// Backend error body
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// HTTP client for the Moteka backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<SessionService>,
}

impl ApiClient {
    /// Build a client from configuration and a session service
    pub fn new(config: &ClientConfig, session: Arc<SessionService>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session service this client reads its token from
    pub fn session(&self) -> &SessionService {
        &self.session
    }

    /// Base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_header(&self) -> Option<String> {
        self.session.token().map(|t| format!("Bearer {t}"))
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.apply_auth(self.client.get(self.url(path)));
        handle_response(req.send().await?).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let req = self.apply_auth(self.client.get(self.url(path)).query(query));
        handle_response(req.send().await?).await
    }

    /// GET returning the raw body (CSV exports)
    pub(crate) async fn get_bytes<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<Vec<u8>> {
        let req = self.apply_auth(self.client.get(self.url(path)).query(query));
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(classify_error(status, &text));
        }
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.apply_auth(self.client.post(self.url(path)).json(body));
        handle_response(req.send().await?).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.apply_auth(self.client.post(self.url(path)));
        handle_response(req.send().await?).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.apply_auth(self.client.put(self.url(path)).json(body));
        handle_response(req.send().await?).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.apply_auth(self.client.patch(self.url(path)).json(body));
        handle_response(req.send().await?).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.apply_auth(self.client.delete(self.url(path)));
        handle_response(req.send().await?).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await?;
        return Err(classify_error(status, &text));
    }
    Ok(response.json().await?)
}

/// Map a non-2xx response onto a typed error.
///
/// The backend reports failures as `{"error": "..."}`; anything else
/// falls back to the raw body with the status deciding the variant.
fn classify_error(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        StatusCode::CONFLICT => ClientError::Conflict(message),
        _ => ClientError::Internal(message),
    }
}
