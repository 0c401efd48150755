use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Read-only settings shared by the clients. Endpoint addressing and limits
/// come from here so nothing network-facing is hard-coded.
pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    /// Upper bound on the raw-notes payload, in bytes.
    fn max_note_bytes(&self) -> usize;
    /// Upper bound on an uploaded file, in bytes.
    fn max_upload_bytes(&self) -> usize;
    /// Whether the calculator may solve locally when the service is down.
    fn local_fallback(&self) -> bool;
}

/// Single-shot HTTP round trips to the assistant service.
///
/// Implementations convert every transport-level failure (connect error,
/// timeout, non-2xx status, unreadable body) into
/// [`LabError::ServiceUnavailable`](crate::utils::error::LabError); callers
/// only ever see a parsed JSON body or that one error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value>;

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        filename: &str,
        payload: Vec<u8>,
    ) -> Result<Value>;
}
