use crate::app::clients::calculation::CalculationClient;
use crate::app::clients::paper::PaperClient;
use crate::app::clients::protocol::ProtocolClient;
use crate::app::transport::HttpTransport;
use crate::domain::model::{ToolReport, ToolRequest};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::Result;

/// Front door for the three assistant tools.
///
/// Owns one client per tool; all of them are stateless between invocations,
/// so a single workbench can serve concurrent requests without coordination.
/// Dropping the future returned by [`run`](Workbench::run) abandons the
/// in-flight request.
pub struct Workbench<T: Transport, C: ConfigProvider> {
    calculation: CalculationClient<T, C>,
    protocol: ProtocolClient<T, C>,
    paper: PaperClient<T, C>,
}

impl<T, C> Workbench<T, C>
where
    T: Transport + Clone,
    C: ConfigProvider + Clone,
{
    pub fn new(transport: T, config: C) -> Self {
        Self {
            calculation: CalculationClient::new(transport.clone(), config.clone()),
            protocol: ProtocolClient::new(transport.clone(), config.clone()),
            paper: PaperClient::new(transport, config),
        }
    }

    pub async fn run(&self, request: ToolRequest) -> Result<ToolReport> {
        match request {
            ToolRequest::Dilution(inputs) => {
                tracing::info!("🧮 requesting dilution calculation");
                let outcome = self.calculation.calculate(&inputs).await?;
                Ok(ToolReport::Calculation(outcome))
            }
            ToolRequest::ProtocolCleanup { notes } => {
                tracing::info!("📝 cleaning {} bytes of lab notes", notes.len());
                let outcome = self.protocol.clean(&notes).await?;
                Ok(ToolReport::ProtocolCleanup(outcome))
            }
            ToolRequest::PaperAnalysis { payload, filename } => {
                tracing::info!("📄 analyzing {} ({} bytes)", filename, payload.len());
                let outcome = self.paper.analyze(payload, &filename).await?;
                Ok(ToolReport::PaperAnalysis(outcome))
            }
        }
    }

    pub fn calculation(&self) -> &CalculationClient<T, C> {
        &self.calculation
    }

    pub fn protocol(&self) -> &ProtocolClient<T, C> {
        &self.protocol
    }

    pub fn paper(&self) -> &PaperClient<T, C> {
        &self.paper
    }
}

impl<C> Workbench<HttpTransport, C>
where
    C: ConfigProvider + Clone,
{
    /// Builds a workbench over a real HTTP transport with the configured
    /// request timeout.
    pub fn with_http(config: C) -> Result<Self> {
        let transport = HttpTransport::new(config.request_timeout())?;
        Ok(Self::new(transport, config))
    }
}
