//! HTTP plumbing shared by the service wrappers.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Handle to the backend API.
///
/// Owns a shared `reqwest::Client` and the current bearer token. Wrappers
/// in the sibling modules call the `get`/`post`/`put`/`delete` helpers and
/// decode typed responses; non-success statuses are mapped to
/// [`ApiError::Api`] from the backend's error envelope.
#[derive(Debug, Clone)]
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    error: String,
    message: String,
}

impl Backend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            bearer: config.bearer,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    pub fn set_bearer(&mut self, token: impl Into<String>) {
        self.bearer = Some(token.into());
    }

    pub fn clear_bearer(&mut self) {
        self.bearer = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let req = self.apply_auth(self.http.get(self.url(path)));
        Self::decode(self.send(path, req).await?).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let req = self.apply_auth(self.http.post(self.url(path)).json(body));
        Self::decode(self.send(path, req).await?).await
    }

    /// POST where the response body (if any) is ignored.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let req = self.apply_auth(self.http.post(self.url(path)).json(body));
        self.send(path, req).await?;
        Ok(())
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let req = self.apply_auth(self.http.put(self.url(path)).json(body));
        Self::decode(self.send(path, req).await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let req = self.apply_auth(self.http.delete(self.url(path)));
        self.send(path, req).await?;
        Ok(())
    }

    /// Send a request and map non-success statuses to [`ApiError::Api`].
    async fn send(
        &self,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> ApiResult<reqwest::Response> {
        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error, envelope.message),
            // Not every proxy speaks the envelope; keep the raw body.
            Err(_) => ("unknown".to_string(), body),
        };

        tracing::debug!(path, status = status.as_u16(), code = %code, "backend call failed");

        Err(ApiError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
