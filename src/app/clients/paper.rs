use crate::app::clients::{join_endpoint, RemoteReply};
use crate::domain::model::AnalysisOutcome;
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{LabError, Result};

const ENDPOINT: &str = "simplify-paper";
const FILE_FIELD: &str = "file";

/// Uploads a research paper for analysis.
///
/// The payload is opaque here: no PDF validation, no content sniffing. The
/// only local guards are "a file was actually supplied" and the size cap,
/// both checked before any bytes hit the network.
pub struct PaperClient<T: Transport, C: ConfigProvider> {
    transport: T,
    config: C,
}

impl<T: Transport, C: ConfigProvider> PaperClient<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    pub async fn analyze(&self, payload: Vec<u8>, filename: &str) -> Result<AnalysisOutcome> {
        if payload.is_empty() {
            return Err(LabError::NoFileSelected);
        }

        let limit = self.config.max_upload_bytes();
        if payload.len() > limit {
            return Err(LabError::PayloadTooLarge {
                field: "file",
                actual: payload.len(),
                limit,
            });
        }

        let url = join_endpoint(self.config.base_url(), ENDPOINT);
        let reply = self
            .transport
            .post_multipart(&url, FILE_FIELD, filename, payload)
            .await?;

        match RemoteReply::parse(reply)? {
            RemoteReply::Markdown(analysis) => Ok(AnalysisOutcome::Analysis(analysis)),
            RemoteReply::Error(message) => Ok(AnalysisOutcome::RemoteError(message)),
        }
    }
}
