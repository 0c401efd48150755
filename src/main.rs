use bioscribe::config::cli::{CliConfig, ToolCommand};
use bioscribe::domain::model::{
    AnalysisOutcome, CalculationOutcome, CleanupOutcome, DilutionInputs, ToolReport, ToolRequest,
};
use bioscribe::utils::validation::validate_non_empty_string;
use bioscribe::utils::{logger, error::LabError};
use bioscribe::{Result, Workbench};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting bioscribe");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };
    tracing::debug!("Using service at {}", settings.base_url);

    let request = match build_request(&cli.command).await {
        Ok(request) => request,
        Err(e) => fail(&e),
    };

    let bench = match Workbench::with_http(settings) {
        Ok(bench) => bench,
        Err(e) => fail(&e),
    };

    match bench.run(request).await {
        Ok(report) => render_report(report),
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &LabError) -> ! {
    tracing::error!("operation failed: {e}");
    eprintln!("❌ {e}");
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

async fn build_request(command: &ToolCommand) -> Result<ToolRequest> {
    match command {
        ToolCommand::Dilution { c1, v1, c2, v2 } => {
            Ok(ToolRequest::Dilution(DilutionInputs::new(*c1, *v1, *c2, *v2)))
        }
        ToolCommand::Protocol { notes, notes_file } => {
            let notes = match (notes, notes_file) {
                (Some(inline), _) => inline.clone(),
                (None, Some(path)) => tokio::fs::read_to_string(path).await?,
                // clap enforces one of the two, but degrade gracefully anyway
                (None, None) => {
                    return Err(LabError::InvalidConfigValue {
                        field: "notes".to_string(),
                        value: String::new(),
                        reason: "pass --notes or --notes-file".to_string(),
                    })
                }
            };
            validate_non_empty_string("notes", &notes)?;
            Ok(ToolRequest::ProtocolCleanup { notes })
        }
        ToolCommand::Paper { file } => {
            if file.extension().and_then(|ext| ext.to_str()) != Some("pdf") {
                tracing::warn!("{} does not look like a PDF; sending it as-is", file.display());
            }
            let payload = tokio::fs::read(file).await?;
            let filename = file
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("paper.pdf")
                .to_string();
            Ok(ToolRequest::PaperAnalysis { payload, filename })
        }
    }
}

fn render_report(report: ToolReport) {
    match report {
        ToolReport::Calculation(outcome) => {
            println!("{outcome}");
            match outcome {
                CalculationOutcome::Solved { .. } => {}
                CalculationOutcome::Rejected => std::process::exit(2),
                CalculationOutcome::Unavailable => std::process::exit(3),
            }
        }
        ToolReport::ProtocolCleanup(CleanupOutcome::Sop(document)) => {
            println!("{document}");
        }
        ToolReport::ProtocolCleanup(CleanupOutcome::RemoteError(message)) => {
            eprintln!("❌ Service reported: {message}");
            std::process::exit(1);
        }
        ToolReport::PaperAnalysis(AnalysisOutcome::Analysis(analysis)) => {
            println!("{analysis}");
        }
        ToolReport::PaperAnalysis(AnalysisOutcome::RemoteError(message)) => {
            eprintln!("❌ Service reported: {message}");
            std::process::exit(1);
        }
    }
}
