//! Base HTTP client with shared logic

use crate::config::ApiKey;
use crate::infrastructure::model::routing::Provider;
use crate::infrastructure::model::types::ProviderError;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub provider: Provider,
    pub endpoint: String,
    pub api_key: Option<ApiKey>,
    pub http: Client,
}

impl HttpClientBase {
    pub fn new(provider: Provider, endpoint: String, api_key: Option<ApiKey>, http: Client) -> Self {
        Self {
            provider,
            endpoint,
            api_key,
            http,
        }
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Post JSON with bearer auth
    pub async fn post_with_bearer<Req, Res>(&self, url: &str, body: &Req) -> Result<Res, ProviderError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let api_key = self.require_api_key()?;
        let request = self.http.post(url).bearer_auth(api_key).json(body);
        self.execute(request).await
    }

    /// Post JSON with the key in a named header (plus any fixed extra headers)
    pub async fn post_with_key_header<Req, Res>(
        &self,
        url: &str,
        body: &Req,
        key_header: &str,
        extra_headers: &[(&str, &str)],
    ) -> Result<Res, ProviderError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let api_key = self.require_api_key()?;
        let mut request = self.http.post(url).header(key_header, api_key);
        for (name, value) in extra_headers {
            request = request.header(*name, *value);
        }
        self.execute(request.json(body)).await
    }

    /// Post JSON without auth (for local services like Ollama)
    pub async fn post_no_auth<Req, Res>(&self, url: &str, body: &Req) -> Result<Res, ProviderError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        self.execute(self.http.post(url).json(body)).await
    }

    /// Fail closed on a missing or empty reply.
    pub fn reply_text(&self, text: Option<String>, missing: &str) -> Result<String, ProviderError> {
        match text {
            Some(text) if !text.is_empty() => Ok(text),
            Some(_) => Err(ProviderError::malformed_response(self.provider, "empty reply")),
            None => Err(ProviderError::malformed_response(self.provider, missing)),
        }
    }

    fn require_api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_ref()
            .map(ApiKey::expose)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::missing_api_key(self.provider))
    }

    async fn execute<Res>(&self, request: RequestBuilder) -> Result<Res, ProviderError>
    where
        Res: DeserializeOwned,
    {
        let response = request.send().await.map_err(|err| {
            warn!(provider = %self.provider, error = %err, "Provider request failed in transport");
            ProviderError::connection_failure(self.provider, &err)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| format!("<unreadable response body: {err}>"));
            warn!(
                provider = %self.provider,
                status = status.as_u16(),
                body_len = body.len(),
                "Provider returned non-success status"
            );
            return Err(ProviderError::backend_error(self.provider, status.as_u16(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|err| ProviderError::connection_failure(self.provider, &err))?;
        debug!(
            provider = %self.provider,
            status = status.as_u16(),
            body_len = body.len(),
            "Received provider response"
        );

        serde_json::from_str(&body).map_err(|err| {
            ProviderError::malformed_response(self.provider, format!("unexpected response body: {err}"))
        })
    }
}
