//! HTTP transport backed by reqwest.
//!
//! # Responsibilities
//! - Build endpoint URLs (`<base_url><api_path>/<endpoint><suffix>`)
//! - POST JSON bodies with the configured timeout
//! - Unwrap the server's `{ result }` / `{ errorCode, errorMessage }` envelope
//!
//! # Design Decisions
//! - No retries; the resolver surfaces the first failure
//! - Server-reported errors stay transport errors, never route errors

use futures_util::future::BoxFuture;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config::ServerConfig;
use crate::observability::metrics;
use crate::transport::{Endpoint, Transport, TransportError};

/// Transport that talks to the issue tracker server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
    api_path: String,
    suffix: String,
}

impl HttpTransport {
    pub fn new(config: &ServerConfig) -> Result<Self, TransportError> {
        let mut base: Url = config.base_url.parse()?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base,
            api_path: config.api_path.trim_matches('/').to_string(),
            suffix: config.endpoint_suffix.clone(),
        })
    }

    /// Absolute URL for an endpoint.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, TransportError> {
        let relative = if self.api_path.is_empty() {
            format!("{}{}", endpoint.path(), self.suffix)
        } else {
            format!("{}/{}{}", self.api_path, endpoint.path(), self.suffix)
        };
        Ok(self.base.join(&relative)?)
    }
}

impl Transport for HttpTransport {
    fn post(&self, endpoint: Endpoint, body: Value) -> BoxFuture<'_, Result<Value, TransportError>> {
        Box::pin(async move {
            let url = self.endpoint_url(endpoint)?;

            let response = self
                .client
                .post(url)
                .json(&body)
                .send()
                .await
                .map_err(|e| TransportError::Request {
                    endpoint,
                    message: e.to_string(),
                })?;

            let status = response.status();
            metrics::record_transport_call(endpoint, status.as_u16());

            if !status.is_success() {
                tracing::warn!(%endpoint, status = status.as_u16(), "Backend returned error status");
                return Err(TransportError::Status {
                    endpoint,
                    status: status.as_u16(),
                });
            }

            let payload: Value = response.json().await.map_err(|e| TransportError::Request {
                endpoint,
                message: e.to_string(),
            })?;

            unwrap_envelope(payload)
        })
    }
}

fn unwrap_envelope(payload: Value) -> Result<Value, TransportError> {
    if let Some(code) = payload.get("errorCode") {
        return Err(TransportError::Api {
            code: code.as_i64().unwrap_or_default(),
            message: payload
                .get("errorMessage")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        });
    }

    match payload {
        Value::Object(mut map) if map.contains_key("result") => {
            Ok(map.remove("result").unwrap_or(Value::Null))
        }
        other => Ok(other),
    }
}
