//! Reqwest-based HTTP client adapter.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, MultipartFile, Response};

/// Production transport for [`ApiClient`](crate::api::ApiClient).
///
/// Every status code comes back as a [`Response`]; only failures to reach
/// the server or read the body are errors.
///
/// ```ignore
/// let http = ReqwestHttpClient::with_timeout(Duration::from_secs(10))?;
/// let api = ApiClient::new("http://localhost:3333", Arc::new(http));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client without a request timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose requests fail once `timeout` elapses.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(classify)?;
        Ok(Self { client })
    }

    async fn send(&self, builder: RequestBuilder, headers: &Headers) -> Result<Response, HttpError> {
        let builder = headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let headers = header_map(response.headers());
        let body = response.bytes().await.map_err(classify)?;

        Ok(Response::with_headers(status, headers, body))
    }
}

fn classify(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else if err.is_connect() {
        HttpError::ConnectionFailed(err.to_string())
    } else if err.is_builder() {
        HttpError::InvalidUrl(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}

/// Header values that are not valid UTF-8 are dropped.
fn header_map(headers: &HeaderMap) -> Headers {
    headers
        .iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect()
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(self.client.get(url), headers).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(self.client.post(url).body(body.to_owned()), headers)
            .await
    }

    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(self.client.put(url).body(body.to_owned()), headers)
            .await
    }

    async fn patch_multipart(
        &self,
        url: &str,
        file: MultipartFile,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| HttpError::Other(format!("Invalid content type: {}", e)))?;
        let form = Form::new().part(file.field, part);

        self.send(self.client.patch(url).multipart(form), headers)
            .await
    }
}
