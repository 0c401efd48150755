use crate::domain::ports::Transport;
use crate::utils::error::{LabError, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// reqwest-backed [`Transport`]. One instance per workbench; `Client` is
/// internally reference-counted so clones are cheap.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    async fn read_reply(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        tracing::debug!("service response status: {status}");

        if !status.is_success() {
            return Err(LabError::ServiceUnavailable {
                reason: format!("service returned {status}"),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LabError::ServiceUnavailable {
                reason: format!("unreadable response body: {e}"),
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        tracing::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| LabError::ServiceUnavailable {
                reason: e.to_string(),
            })?;

        Self::read_reply(response).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        filename: &str,
        payload: Vec<u8>,
    ) -> Result<Value> {
        tracing::debug!("POST {url} (multipart, {} bytes)", payload.len());

        // Bytes go through unchanged; no content type is asserted here, the
        // service decides what it accepts.
        let part = Part::bytes(payload).file_name(filename.to_string());
        let form = Form::new().part(field.to_string(), part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| LabError::ServiceUnavailable {
                reason: e.to_string(),
            })?;

        Self::read_reply(response).await
    }
}
