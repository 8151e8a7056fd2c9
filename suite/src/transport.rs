//! Executes `HttpRequest` values over the network with ureq.
//!
//! Status-code-as-error is disabled: every status comes back as data and
//! the core client or the scenario decides what it means. Only failures to
//! reach the service at all become `SuiteError::Transport`.

use std::time::Duration;

use ads_core::{HttpMethod, HttpRequest, HttpResponse};
use ureq::{Agent, RequestBuilder};

use crate::error::SuiteError;

#[derive(Clone)]
pub struct Transport {
    agent: Agent,
}

impl Transport {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, SuiteError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = req;
        let transport_error = |e: ureq::Error| SuiteError::Transport {
            method: method.as_str(),
            url: url.clone(),
            message: e.to_string(),
        };

        let mut response = match method {
            HttpMethod::Get => with_headers(self.agent.get(&url), &headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&url), &headers).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(&url), &headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        }
        .map_err(transport_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(transport_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
