//! Binary for the member-message QA service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use corpus::{HttpMessageSource, MessageSource};
use llm_client::{Collaborator, HttpCollaborator, NullCollaborator};
use mqa_core::init_tracing;
use mqa_server::{build_router, Config, QaService};

#[derive(Parser, Debug)]
#[command(name = "mqa-server", about = "Member-message QA service", version)]
struct Cli {
    /// Listening port; overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// Log file path; overrides LOG_FILE
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load().context("loading configuration")?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = Some(log_file);
    }
    config.validate().context("invalid configuration")?;

    init_tracing(config.log_file.as_deref())?;

    let source: Arc<dyn MessageSource> =
        Arc::new(HttpMessageSource::new(config.source_url.clone()));
    let collaborator: Arc<dyn Collaborator> = match &config.llm_api_key {
        Some(key) => Arc::new(
            HttpCollaborator::new(key.clone())
                .with_api_url(config.llm_api_url.clone())
                .with_model(config.llm_model.clone()),
        ),
        None => {
            info!("LLM_API_KEY not set; answering with extraction rules only");
            Arc::new(NullCollaborator)
        }
    };

    let service = Arc::new(QaService::new(source, collaborator));
    let app = build_router(service);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
