use crate::app::clients::{join_endpoint, RemoteReply};
use crate::domain::model::CleanupOutcome;
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{LabError, Result};

const ENDPOINT: &str = "clean-protocol";

/// Sends raw lab notes to the cleanup service and returns the normalized
/// SOP document, or whatever error the service reported, verbatim.
pub struct ProtocolClient<T: Transport, C: ConfigProvider> {
    transport: T,
    config: C,
}

impl<T: Transport, C: ConfigProvider> ProtocolClient<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    /// The notes are forwarded as-is; the only local check is the size cap,
    /// applied before any request goes out. Never retried.
    pub async fn clean(&self, notes: &str) -> Result<CleanupOutcome> {
        let limit = self.config.max_note_bytes();
        if notes.len() > limit {
            return Err(LabError::PayloadTooLarge {
                field: "notes",
                actual: notes.len(),
                limit,
            });
        }

        let url = join_endpoint(self.config.base_url(), ENDPOINT);
        let reply = self
            .transport
            .post_json(&url, &serde_json::json!({ "text": notes }))
            .await?;

        match RemoteReply::parse(reply)? {
            RemoteReply::Markdown(document) => Ok(CleanupOutcome::Sop(document)),
            RemoteReply::Error(message) => Ok(CleanupOutcome::RemoteError(message)),
        }
    }
}
