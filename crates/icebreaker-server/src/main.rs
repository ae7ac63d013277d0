use anyhow::{anyhow, Result};
use clap::Parser;
use icebreaker_core::{Config, OpenAIClient, QuestionGenerator};
use icebreaker_server::{router, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env = "ICEBREAKER_ADDRESS", default_value = "127.0.0.1:3000")]
    address: String,

    /// Chat completion model to generate with.
    #[arg(short, long, env = "ICEBREAKER_MODEL")]
    model: Option<String>,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long, env = "OPENAI_API_BASE")]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "icebreaker_server=debug,icebreaker_core=debug".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("could not read config file, using defaults: {:#}", err);
        Config::new()
    });

    let api_key = config
        .resolve_api_key()
        .ok_or_else(|| anyhow!("OPENAI_API_KEY is not set and no openai_api_key is configured"))?;
    let api_base = args
        .api_base
        .as_deref()
        .unwrap_or_else(|| config.api_base_or_default());
    let model = args
        .model
        .as_deref()
        .unwrap_or_else(|| config.model_or_default());

    let client = OpenAIClient::with_base_url(&api_key, api_base);
    let generator = QuestionGenerator::with_model(client, model);
    let app = router(AppState::new(generator));

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!(address = %listener.local_addr()?, %model, "icebreaker server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
