//! HTTP transport seam for the translation API.
//!
//! All network traffic goes through the [`HttpClient`] trait so the resolver
//! can be exercised against a scripted implementation in tests. The
//! reqwest-backed [`ApiHttpClient`] is the production implementation; it owns
//! authentication and multipart encoding, nothing else. Retry, timeout, and
//! TLS policy all belong to the `reqwest::Client` it wraps.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::error::{Error, Result};

/// A response as seen by this crate: status code plus raw body.
///
/// The body is kept as text regardless of status so failure diagnostics can
/// always include it; JSON decoding happens at the call site, where the
/// expected shape is known.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

/// Blocking-style HTTP operations needed by the translation client.
///
/// Implementations surface transport failures as [`Error::Transport`]; status
/// handling is left to the caller, which knows the expected code for each
/// operation.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues a GET request.
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    /// Issues a POST request with URL-encoded form fields.
    async fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<HttpResponse>;

    /// Issues a multipart POST with form fields plus one named file part.
    async fn post_file(
        &self,
        url: &str,
        fields: &[(&str, &str)],
        filename: &str,
        content: &str,
    ) -> Result<HttpResponse>;
}

/// Reqwest-backed [`HttpClient`] with optional token authentication.
pub struct ApiHttpClient {
    client: Client,
    api_key: Option<String>,
}

impl ApiHttpClient {
    /// Creates a client; `api_key` is sent as `Authorization: Token <key>`
    /// on every request when present.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Token {key}")),
            None => request,
        }
    }

    async fn execute(&self, url: &str, request: reqwest::RequestBuilder) -> Result<HttpResponse> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| Error::transport(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(url, e))?;

        debug!(url, status, "request completed");
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for ApiHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.execute(url, self.client.get(url)).await
    }

    async fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<HttpResponse> {
        self.execute(url, self.client.post(url).form(fields)).await
    }

    async fn post_file(
        &self,
        url: &str,
        fields: &[(&str, &str)],
        filename: &str,
        content: &str,
    ) -> Result<HttpResponse> {
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text((*name).to_string(), (*value).to_string());
        }
        let part = Part::text(content.to_string()).file_name(filename.to_string());
        form = form.part("file", part);

        self.execute(url, self.client.post(url).multipart(form))
            .await
    }
}
