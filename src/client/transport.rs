// file: src/client/transport.rs
// description: HTTP transport for the corpus server hits endpoint
// reference: https://docs.rs/reqwest

use crate::client::request::HitsRequest;
use crate::config::ServerConfig;
use crate::error::{CorpusError, Result};
use crate::models::HitsResponse;
use reqwest::Client;
use std::future::Future;
use tracing::debug;

/// Fetches and decodes one page from the hits endpoint.
pub trait HitsTransport {
    fn fetch(&self, request: &HitsRequest) -> impl Future<Output = Result<HitsResponse>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(server: &ServerConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = server.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: server.hits_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl HitsTransport for HttpTransport {
    async fn fetch(&self, request: &HitsRequest) -> Result<HitsResponse> {
        let url = request.to_url(&self.endpoint);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CorpusError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
