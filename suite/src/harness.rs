//! Shared context handed to every scenario.

use ads_core::{AdsClient, HttpRequest, HttpResponse};
use tracing::debug;

use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::transport::Transport;

/// Client, transport and configuration for one target service.
pub struct Harness {
    client: AdsClient,
    transport: Transport,
    config: SuiteConfig,
}

impl Harness {
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            client: AdsClient::new(&config.base_url),
            transport: Transport::new(config.timeout),
            config,
        }
    }

    pub fn client(&self) -> &AdsClient {
        &self.client
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Execute one request and log the exchange at debug level.
    pub fn send(&self, req: HttpRequest) -> Result<HttpResponse, SuiteError> {
        let method = req.method.as_str();
        let url = req.url.clone();
        debug!(method, %url, body = req.body.as_deref().unwrap_or(""), "request");
        let response = self.transport.execute(req)?;
        debug!(method, %url, status = response.status, body = %response.body, "response");
        Ok(response)
    }
}

/// Fail unless the response status is one of `expected`.
pub fn expect_status(response: &HttpResponse, expected: &[u16]) -> Result<(), SuiteError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    Err(SuiteError::UnexpectedStatus {
        expected: expected.to_vec(),
        actual: response.status,
        body: response.body.clone(),
    })
}
