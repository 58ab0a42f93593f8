use completion_api::{ApiRequest, JSON_CONTENT_TYPE, Method};

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError>;
}

#[derive(Clone)]
pub(crate) struct GlooTransport {
    base: &'static str,
}

impl GlooTransport {
    pub fn new(base: &'static str) -> Self {
        Self { base }
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
        let url = format!("{}{}", self.base, request.path);
        let builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
        }
        .header("accept", "application/json");

        let resp = match request.body {
            Some(body) => {
                builder
                    .header("content-type", JSON_CONTENT_TYPE)
                    .body(body)?
                    .send()
                    .await?
            }
            None => builder.send().await?,
        };

        Ok(RawResponse {
            status: resp.status(),
            body: resp.text().await?,
        })
    }
}
