use crate::config::GongConfig;
use crate::error::{log_error, GongError};
use crate::utils::basic_auth_header;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace};

/// The only verbs Gong's public API needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Authenticated handle on the Gong REST API.
///
/// The `Authorization` value is computed once in the constructor.  Nothing else is held, so one
/// client can be cloned and shared between tasks freely.
#[derive(Clone)]
pub struct GongClient {
    http_client: reqwest::Client,
    base_url: String,
    authorization: String,
}

impl GongClient {
    pub fn new(access_key: &str, access_key_secret: &str) -> Self {
        Self::from_config(GongConfig::new(access_key, access_key_secret))
    }

    pub fn from_config(config: GongConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            authorization: basic_auth_header(&config.access_key, &config.access_key_secret),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Point the client at another origin, e.g. a sandbox host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, custom TLS roots, timeouts).
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn authorization_header(&self) -> &str {
        &self.authorization
    }

    /// Perform one authenticated exchange.  `endpoint` is appended to the base url and may already
    /// carry a query string.  Non-2xx statuses become [`GongError::Api`] with the response text
    /// untouched; nothing is retried.
    pub async fn request<T, B>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&B>,
    ) -> Result<T, GongError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(method=?method, endpoint=%endpoint, "gong request");
        let mut rq = match method {
            HttpMethod::Get => self.http_client.get(&url),
            HttpMethod::Post => self.http_client.post(&url),
        }
        .header(AUTHORIZATION, self.authorization.as_str())
        .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            rq = rq.json(body);
        }

        let resp = rq.send().await.map_err(transport_error)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.map_err(transport_error)?;
            let e = GongError::Api {
                status: status.as_u16(),
                body,
            };
            log_error(&e);
            return Err(e);
        }

        let bytes = resp.bytes().await.map_err(transport_error)?;
        trace!(status=%status, len = bytes.len(), "gong response");
        serde_json::from_slice(&bytes).map_err(|e| {
            let e = GongError::Decode(e);
            log_error(&e);
            e
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, GongError> {
        self.request::<T, ()>(endpoint, HttpMethod::Get, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, GongError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, HttpMethod::Post, Some(body)).await
    }
}

fn transport_error(e: reqwest::Error) -> GongError {
    let e = GongError::Http(e);
    log_error(&e);
    e
}

impl std::fmt::Debug for GongClient {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("GongClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
