//! clarifai-feedback - send one model feedback request from the command line.

use anyhow::{bail, Context, Result};
use clap::Parser;
use clarifai_feedback::{
    ApiResponse, AsyncClarifaiClient, AsyncClarifaiClientImpl, ClarifaiClient, ConceptFeedback,
    Config, EventType,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clarifai-feedback")]
#[command(about = "Send model feedback to the Clarifai API", long_about = None)]
struct Cli {
    /// ID of the model the feedback is about
    #[arg(long, conflicts_with = "travel", required_unless_present = "travel")]
    model: Option<String>,

    /// Target the public travel model
    #[arg(long)]
    travel: bool,

    /// URL of the image
    #[arg(long, conflicts_with = "image_file", required_unless_present = "image_file")]
    image_url: Option<String>,

    /// Local image file, sent as bytes
    #[arg(long)]
    image_file: Option<PathBuf>,

    /// Concept feedback as id=true or id=false (repeatable)
    #[arg(long = "concept", value_parser = parse_concept)]
    concepts: Vec<ConceptFeedback>,

    #[arg(long)]
    end_user_id: Option<String>,

    #[arg(long)]
    session_id: Option<String>,

    /// annotation or search_click
    #[arg(long)]
    event_type: Option<EventType>,

    #[arg(long)]
    output_id: Option<String>,
}

fn parse_concept(raw: &str) -> Result<ConceptFeedback, String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected id=true|false, got '{}'", raw))?;
    let value = value
        .parse::<bool>()
        .map_err(|_| format!("expected true or false after '=', got '{}'", value))?;
    Ok(ConceptFeedback::for_id_and_value(id, value))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    // stderr only, stdout carries the service reply
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using API URL: {}", config.api_base_url);

    let client = ClarifaiClient::new(&config);

    let model_id = match (&cli.model, cli.travel) {
        (Some(id), _) => id.clone(),
        (None, true) => client.default_models().travel_model().id().to_string(),
        (None, false) => bail!("either --model or --travel is required"),
    };

    let mut request = client
        .add_model_feedback()
        .with_id(model_id)
        .with_concepts(cli.concepts);

    request = match (cli.image_url, cli.image_file) {
        (Some(url), _) => request.with_image_url(url),
        (None, Some(path)) => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read image {}", path.display()))?;
            request.with_image_bytes(bytes)
        }
        (None, None) => bail!("either --image-url or --image-file is required"),
    };

    if let Some(end_user_id) = cli.end_user_id {
        request = request.with_end_user_id(end_user_id);
    }
    if let Some(session_id) = cli.session_id {
        request = request.with_session_id(session_id);
    }
    if let Some(event_type) = cli.event_type {
        request = request.with_event_type(event_type);
    }
    if let Some(output_id) = cli.output_id {
        request = request.with_output_id(output_id);
    }

    let payload = request.build()?;
    let async_client = AsyncClarifaiClientImpl::new(client);

    match async_client.send_feedback(payload).await? {
        ApiResponse::Successful { value, .. } => {
            println!("{}", serde_json::to_string_pretty(&value.body)?);
            Ok(())
        }
        ApiResponse::Failure { status } => {
            error!(
                "Feedback rejected (HTTP {}, code {}): {}",
                status.http_code, status.code, status.description
            );
            bail!("feedback rejected: {}", status.description)
        }
    }
}
